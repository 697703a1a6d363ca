use log::debug;
#[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
use log::trace;

use super::init::{ray_attacks, relevant_mask};
use crate::core::*;
#[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
use crate::utils::PRNG;

/// Entries needed by all bishop squares together
const BISHOP_TABLE_SIZE: usize = 0x1480;

/// Entries needed by all rook squares together
const ROOK_TABLE_SIZE: usize = 0x19000;

/******************************************\
|==========================================|
|             Magics Definition            |
|==========================================|
\******************************************/

/// Hashing parameters of one square.
///
/// `mask` keeps the occupancy bits that can change the attack set. Without
/// BMI2 the masked occupancy is multiplied by `magic` and the top bits are
/// kept, otherwise PEXT packs the masked bits directly. Either way the result
/// is added to `offset`, the start of this square's slice of the shared table.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Magic {
    #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
    magic: u64,

    mask: Bitboard,

    #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
    shift: u8,

    offset: usize,
}

impl Magic {
    fn new(mask: Bitboard, offset: usize) -> Magic {
        Magic {
            #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
            magic: 0,
            mask,
            #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
            shift: 64 - mask.count_bits() as u8,
            offset,
        }
    }

    /// The formula is `((occ & mask) * magic) >> shift + offset`.
    #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
    #[inline]
    pub(crate) const fn index(&self, occ: Bitboard) -> usize {
        ((occ.0 & self.mask.0).wrapping_mul(self.magic) >> self.shift) as usize + self.offset
    }

    /// The formula is `pext(occ, mask) + offset`.
    #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
    #[inline]
    pub(crate) fn index(&self, occ: Bitboard) -> usize {
        occ.pext(self.mask.0) as usize + self.offset
    }
}

/******************************************\
|==========================================|
|            Slider Attack Table           |
|==========================================|
\******************************************/

/// # Slider Attack Table
///
/// Attack sets of one slider type for every square and every relevant
/// occupancy, stored in one shared array.
///
/// ## Elements
/// - table - attack sets, each square owns `2^popcount(mask)` consecutive entries
/// - magics - hashing parameters per square
pub struct SliderTable {
    table: Box<[Bitboard]>,
    magics: [Magic; Square::NUM],
}

impl SliderTable {
    /// Bishop table, hashed over the diagonal rays
    pub(super) fn bishop() -> SliderTable {
        let table = Self::build("bishop", &Direction::DIAGONAL, &BISHOP_SEEDS);
        debug_assert_eq!(table.len(), BISHOP_TABLE_SIZE);
        table
    }

    /// Rook table, hashed over the orthogonal rays
    pub(super) fn rook() -> SliderTable {
        let table = Self::build("rook", &Direction::ORTHOGONAL, &ROOK_SEEDS);
        debug_assert_eq!(table.len(), ROOK_TABLE_SIZE);
        table
    }

    /// Gets the attack set for a square and any occupancy. Occupancy outside the
    /// square's relevant mask is ignored.
    #[inline]
    pub(super) fn get(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.table[self.magics[sq.index()].index(occ)]
    }

    /// Number of entries in the shared attack array
    pub(super) fn len(&self) -> usize {
        self.table.len()
    }

    #[cfg_attr(
        all(target_arch = "x86_64", target_feature = "bmi2"),
        allow(unused_variables, unused_mut)
    )]
    fn build(name: &str, dirs: &[Direction], seeds: &[u64; Rank::NUM]) -> SliderTable {
        let size: usize = Square::iter()
            .map(|sq| 1usize << relevant_mask(dirs, sq).count_bits())
            .sum();

        let mut table = vec![Bitboard::EMPTY; size].into_boxed_slice();
        let mut magics = [Magic::default(); Square::NUM];
        let mut offset = 0;

        #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
        let mut rank_attempts = 0;

        for sq in Square::iter() {
            let mut m = Magic::new(relevant_mask(dirs, sq), offset);
            let (occupancy, reference) = enumerate_subsets(dirs, sq, m.mask);

            #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
            {
                rank_attempts +=
                    find_magic(&mut m, seeds[sq.rank().index()], &occupancy, &reference, &mut table);

                if sq.file() == File::FileH {
                    trace!("{name} magics for rank {}: {rank_attempts} attempts", sq.rank());
                    rank_attempts = 0;
                }
            }

            #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
            for (occ, attacks) in occupancy.iter().zip(&reference) {
                table[m.index(*occ)] = *attacks;
            }

            offset += occupancy.len();
            magics[sq.index()] = m;
        }

        debug!("{name} attack table built with {} entries", table.len());

        SliderTable { table, magics }
    }
}

/// Every subset of `mask` paired with the ray-cast attacks it produces.
/// Subsets are walked with the Carry-Rippler trick, starting from the empty set.
fn enumerate_subsets(dirs: &[Direction], sq: Square, mask: Bitboard) -> (Vec<Bitboard>, Vec<Bitboard>) {
    let perm = 1usize << mask.count_bits();
    let mut occupancy = Vec::with_capacity(perm);
    let mut reference = Vec::with_capacity(perm);

    let mut occ = Bitboard::EMPTY;
    loop {
        occupancy.push(occ);
        reference.push(ray_attacks(dirs, sq, occ));

        occ = Bitboard(occ.0.wrapping_sub(mask.0) & mask.0);
        if occ.is_empty() {
            break;
        }
    }

    (occupancy, reference)
}

/******************************************\
|==========================================|
|               Magic Search               |
|==========================================|
\******************************************/

/// Seeds per rank for the bishop magic search
const BISHOP_SEEDS: [u64; Rank::NUM] = [
    0xA4302F8257706E25,
    0xF5DFC414DBE20B81,
    0x7FA4E09723AAA919,
    0xC14C05BE2E3A10BF,
    0xC60BA0419F81238E,
    0x065AFE010904A1A4,
    0x5E040F6D2A6A6FC4,
    0xF26CD592A998EBFC,
];

/// Seeds per rank for the rook magic search
const ROOK_SEEDS: [u64; Rank::NUM] = [
    0xA229B9598E24437C,
    0x563E0EF1ABAE19AD,
    0x81445AC4F7966038,
    0xC6D2FB81AC850941,
    0x283C0A606438D8B3,
    0xEE1D97DF3E4CB9D7,
    0xAC18FA699DF5F065,
    0x33481A03E05CFBED,
];

/// Searches for a magic that sends every occupancy subset to a slot holding
/// its own attack set, and fills `table` for it. Two subsets may share a slot
/// only when their attack sets are equal.
///
/// `epoch` records which attempt last wrote each slot, so the table never
/// needs clearing between attempts. Returns the number of candidates verified.
#[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
fn find_magic(
    m: &mut Magic,
    seed: u64,
    occupancy: &[Bitboard],
    reference: &[Bitboard],
    table: &mut [Bitboard],
) -> u32 {
    let mut rng = PRNG::new(seed);
    let mut epoch = vec![0u32; occupancy.len()];
    let mut attempt = 0;

    loop {
        m.magic = rng.random_sparse_u64();

        // Too few high bits means the top of the product barely depends on the mask
        if (m.magic.wrapping_mul(m.mask.0) >> 56).count_ones() < 6 {
            continue;
        }

        attempt += 1;

        let verified = occupancy.iter().zip(reference).all(|(&occ, &attacks)| {
            let idx = m.index(occ);
            let slot = idx - m.offset;

            if epoch[slot] < attempt {
                epoch[slot] = attempt;
                table[idx] = attacks;
                true
            } else {
                table[idx] == attacks
            }
        });

        if verified {
            return attempt;
        }
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

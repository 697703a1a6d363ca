use std::fmt;

use super::{Direction, File, Rank, Square, SquareList, TargetError};

/******************************************\
|==========================================|
|                 Bitboard                 |
|==========================================|
\******************************************/

/// Represents a 64-bit bitboard, the set of squares used for occupancy,
/// attack and target masks.
/// Each bit corresponds to a square, from A1 (LSB) to H8 (MSB).
///
/// Only bitwise operators are implemented. Two masks are combined with `|`,
/// never with `+`, so overlapping bits can not carry into a neighbouring square.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

crate::impl_bit_ops!(Bitboard);
crate::impl_bit_mani_ops!(Bitboard, u8);

/******************************************\
|==========================================|
|           Bitboard Constants             |
|==========================================|
\******************************************/

impl Bitboard {
    /// An empty bitboard, with no bits set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// A full bitboard, with all 64 bits set.
    pub const FULL: Bitboard = Bitboard(!Self::EMPTY.0);

    /// A bitboard with only the A1 square set.
    pub const A1: Bitboard = Bitboard(1);

    /// A bitboard representing all squares on the 1st rank.
    pub const RANK_1: Bitboard = Bitboard(0x00000000000000ff);

    /// A bitboard representing all squares on the 8th rank.
    pub const RANK_8: Bitboard = Bitboard(0xff00000000000000);

    /// A bitboard representing all squares on the A file.
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);

    /// A bitboard representing all squares on the H file.
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    /// Every square except the A file. A bit shifted one file east must land here.
    pub const NOT_A_FILE: Bitboard = Bitboard(0xfefefefefefefefe);

    /// Every square except the H file. A bit shifted one file west must land here.
    pub const NOT_H_FILE: Bitboard = Bitboard(0x7f7f7f7f7f7f7f7f);

    /// Every square except the A and B files. A bit shifted two files east must land here.
    pub const NOT_AB_FILE: Bitboard = Bitboard(0xfcfcfcfcfcfcfcfc);

    /// Every square except the G and H files. A bit shifted two files west must land here.
    pub const NOT_GH_FILE: Bitboard = Bitboard(0x3f3f3f3f3f3f3f3f);
}

/******************************************\
|==========================================|
|                Conversions               |
|==========================================|
\******************************************/

impl Square {
    /// Converts a `Square` into a `Bitboard` with only that square's bit set.
    #[inline]
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::A1.0 << *self as u8)
    }
}

impl Rank {
    /// Converts a `Rank` into a `Bitboard` with all squares on that rank set.
    #[inline]
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::RANK_1.0 << (8 * *self as u8))
    }
}

impl File {
    /// Converts a `File` into a `Bitboard` with all squares on that file set.
    #[inline]
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::FILE_A.0 << *self as u8)
    }
}

impl<const N: usize> From<[Square; N]> for Bitboard {
    fn from(squares: [Square; N]) -> Bitboard {
        let mut bb = Bitboard::EMPTY;
        for square in squares {
            bb.set(square);
        }
        bb
    }
}

/******************************************\
|==========================================|
|        Bitboard Implementation         |
|==========================================|
\******************************************/

impl Bitboard {
    /// Finds the least significant bit (LSB) set in the bitboard and returns its corresponding `Square`.
    /// Returns `None` if the bitboard is empty.
    #[inline]
    pub const fn lsb(&self) -> Option<Square> {
        match self.0 {
            0 => None,
            bits => Some(unsafe { Square::from_unchecked(bits.trailing_zeros() as u8) }),
        }
    }

    /// Finds and removes (clears) the least significant bit (LSB) from the bitboard,
    /// returning its corresponding `Square`. Returns `None` if the bitboard was empty.
    #[inline]
    pub const fn pop_lsb(&mut self) -> Option<Square> {
        let lsb = self.lsb();
        self.0 &= self.0.wrapping_sub(1);
        lsb
    }

    /// Counts the number of set bits (population count) in the bitboard.
    #[inline]
    pub const fn count_bits(&self) -> u32 {
        self.0.count_ones()
    }

    /// Checks if the bitboard is empty (no bits set).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the bit corresponding to the given `Square` is set.
    #[inline]
    pub const fn contains(&self, square: Square) -> bool {
        (self.0 & square.bb().0) != 0
    }

    /// Checks if the bit at a raw board index is set.
    ///
    /// Fails with [`TargetError::SquareOutOfRange`] when `index >= 64` instead of
    /// reading past the board.
    #[inline]
    pub const fn is_set(&self, index: u8) -> Result<bool, TargetError> {
        match Square::new(index) {
            Ok(square) => Ok(self.contains(square)),
            Err(err) => Err(err),
        }
    }

    /// Sets the bit corresponding to the given `Square`.
    #[inline]
    pub const fn set(&mut self, square: Square) {
        self.0 |= square.bb().0;
    }

    /// Clears the bit corresponding to the given `Square`.
    #[inline]
    pub const fn clear(&mut self, square: Square) {
        self.0 &= !square.bb().0;
    }

    /// Toggles the bit corresponding to the given `Square`.
    #[inline]
    pub const fn toggle(&mut self, square: Square) {
        self.0 ^= square.bb().0;
    }

    /// Iterates over each set bit in the bitboard, calling the provided function `f` with the `Square` for each.
    #[inline]
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(Square),
    {
        Iterator::for_each(*self, f);
    }

    /// Extracts the set squares in ascending order.
    ///
    /// The result lives in a fixed 64-slot buffer, so extraction never allocates.
    #[inline]
    pub fn squares(&self) -> SquareList {
        SquareList::from(*self)
    }

    /// Builds a bitboard from a list of squares, the inverse of [`Bitboard::squares`].
    ///
    /// A square listed twice is rejected with [`TargetError::DuplicateSquare`].
    pub fn from_squares(squares: &[Square]) -> Result<Bitboard, TargetError> {
        let mut bb = Bitboard::EMPTY;
        for &square in squares {
            if bb.contains(square) {
                log::warn!("rejecting square list, {square} is listed twice");
                return Err(TargetError::DuplicateSquare(square));
            }
            bb.set(square);
        }
        Ok(bb)
    }

    /// Builds a bitboard from a rank 8 first picture of the board, any non-zero cell is set.
    ///
    /// ```text
    /// ranks[0] = rank 8, a8..h8
    /// ranks[7] = rank 1, a1..h1
    /// ```
    pub fn from_ranks(ranks: [[u8; File::NUM]; Rank::NUM]) -> Bitboard {
        let mut bb = Bitboard::EMPTY;
        for (rank, cells) in Rank::iter().rev().zip(ranks) {
            for (file, cell) in File::iter().zip(cells) {
                if cell != 0 {
                    bb.set(Square::from_parts(file, rank));
                }
            }
        }
        bb
    }

    /// Shifts every set bit one step in `dir`. Bits that would leave the board,
    /// over the top and bottom ranks or across the A/H file edge, are dropped.
    #[inline]
    pub const fn shift(&self, dir: Direction) -> Bitboard {
        let offset = dir.offset();
        let shifted = if offset >= 0 {
            self.0 << offset
        } else {
            self.0 >> -offset
        };

        Bitboard(shifted & dir.landing_mask().0)
    }

    /// Extracts bits from the bitboard according to a mask using the PEXT instruction.
    /// This instruction is available on processors with BMI2 support.
    #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
    #[inline]
    pub fn pext(&self, mask: u64) -> u64 {
        use std::arch::x86_64::_pext_u64;
        unsafe { _pext_u64(self.0, mask) }
    }
}

impl Iterator for Bitboard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.pop_lsb()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count_bits() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Bitboard {}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SEPARATOR: &str = "\n     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{}", SEPARATOR)?;

        for rank in Rank::iter().rev() {
            write!(f, " {}   |", rank)?;

            for file in File::iter() {
                let square = Square::from_parts(file, rank);
                let cell = if self.contains(square) { " 1 " } else { "   " };
                write!(f, "{}|", cell)?;
            }

            writeln!(f, "{}", SEPARATOR)?;
        }

        writeln!(f)?;
        writeln!(f, "       A   B   C   D   E   F   G   H")?;
        writeln!(f)?;
        writeln!(f, "Bitboard: {:#x}", self.0)
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::PRNG;

    #[test]
    fn test_edge_masks_match_mapping() {
        assert_eq!(Bitboard::NOT_A_FILE, !File::FileA.bb());
        assert_eq!(Bitboard::NOT_H_FILE, !File::FileH.bb());
        assert_eq!(Bitboard::NOT_AB_FILE, !(File::FileA.bb() | File::FileB.bb()));
        assert_eq!(Bitboard::NOT_GH_FILE, !(File::FileG.bb() | File::FileH.bb()));

        // Same masks written in decimal
        assert_eq!(Bitboard::NOT_A_FILE.0, 18374403900871474942);
        assert_eq!(Bitboard::NOT_H_FILE.0, 9187201950435737471);
        assert_eq!(Bitboard::NOT_AB_FILE.0, 18229723555195321596);
        assert_eq!(Bitboard::NOT_GH_FILE.0, 4557430888798830399);
    }

    #[test]
    fn test_pop_lsb() {
        let mut bb = Square::E4.bb() | Square::A1.bb();
        assert_eq!(bb.pop_lsb(), Some(Square::A1));
        assert_eq!(bb.pop_lsb(), Some(Square::E4));
        assert_eq!(bb.pop_lsb(), None);
        assert_eq!(bb.pop_lsb(), None);
    }

    #[test]
    fn test_is_set() {
        let bb = Square::E4.bb() | Square::H8.bb();
        assert_eq!(bb.is_set(28), Ok(true));
        assert_eq!(bb.is_set(63), Ok(true));
        assert_eq!(bb.is_set(0), Ok(false));
        assert_eq!(bb.is_set(64), Err(TargetError::SquareOutOfRange(64)));
        assert_eq!(Bitboard::FULL.is_set(200), Err(TargetError::SquareOutOfRange(200)));
    }

    #[test]
    fn test_get_set_clear_toggle() {
        let mut bb = Bitboard::EMPTY;
        bb.set(Square::E4);
        assert!(bb.contains(Square::E4));
        assert!(!bb.contains(Square::A1));

        bb.clear(Square::E4);
        assert!(!bb.contains(Square::E4));

        bb.toggle(Square::D5);
        assert!(bb.contains(Square::D5));
        bb.toggle(Square::D5);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_extract_squares_ascending() {
        let bb = Bitboard::from([Square::H7, Square::A1, Square::D8, Square::G6, Square::B5]);
        let squares = bb.squares();

        assert_eq!(squares.len(), 5);
        assert_eq!(
            squares.as_slice(),
            &[Square::A1, Square::B5, Square::G6, Square::H7, Square::D8]
        );
    }

    #[test]
    fn test_extract_empty_and_full() {
        assert!(Bitboard::EMPTY.squares().is_empty());

        let all = Bitboard::FULL.squares();
        assert_eq!(all.len(), 64);
        assert!(all.iter().copied().eq(Square::iter()));
    }

    #[test]
    fn test_round_trip_random_boards() {
        let mut rng = PRNG::default();
        for _ in 0..1000 {
            let bb = Bitboard(rng.random_u64());
            let squares = bb.squares();
            assert_eq!(squares.len(), bb.count_bits() as usize);
            assert_eq!(Bitboard::from_squares(squares.as_slice()), Ok(bb));
        }
    }

    #[test]
    fn test_from_squares_any_order() {
        let list = [Square::G6, Square::A1, Square::H7, Square::B5];
        let bb = Bitboard::from_squares(&list).unwrap();

        assert_eq!(
            bb.squares().as_slice(),
            &[Square::A1, Square::B5, Square::G6, Square::H7]
        );
    }

    #[test]
    fn test_from_squares_rejects_duplicates() {
        let list = [Square::A2, Square::B2, Square::A2];
        assert_eq!(
            Bitboard::from_squares(&list),
            Err(TargetError::DuplicateSquare(Square::A2))
        );
        assert_eq!(Bitboard::from_squares(&[]), Ok(Bitboard::EMPTY));
    }

    #[test]
    fn test_from_ranks() {
        let bb = Bitboard::from_ranks([
            [1, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 1, 1, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 1],
        ]);

        assert_eq!(
            bb,
            Bitboard::from([Square::A8, Square::C6, Square::D6, Square::H1])
        );
    }

    #[test]
    fn test_shift_basic_directions() {
        let bb = Square::E5.bb();

        assert_eq!(bb.shift(Direction::N), Square::E6.bb());
        assert_eq!(bb.shift(Direction::S), Square::E4.bb());
        assert_eq!(bb.shift(Direction::E), Square::F5.bb());
        assert_eq!(bb.shift(Direction::W), Square::D5.bb());

        assert_eq!(bb.shift(Direction::NE), Square::F6.bb());
        assert_eq!(bb.shift(Direction::NW), Square::D6.bb());
        assert_eq!(bb.shift(Direction::SE), Square::F4.bb());
        assert_eq!(bb.shift(Direction::SW), Square::D4.bb());

        assert_eq!(bb.shift(Direction::NNE), Square::F7.bb());
        assert_eq!(bb.shift(Direction::NNW), Square::D7.bb());
        assert_eq!(bb.shift(Direction::NEE), Square::G6.bb());
        assert_eq!(bb.shift(Direction::NWW), Square::C6.bb());
        assert_eq!(bb.shift(Direction::SEE), Square::G4.bb());
        assert_eq!(bb.shift(Direction::SWW), Square::C4.bb());
        assert_eq!(bb.shift(Direction::SSE), Square::F3.bb());
        assert_eq!(bb.shift(Direction::SSW), Square::D3.bb());
    }

    #[test]
    fn test_shift_edge_cases() {
        let h5 = Square::H5.bb();
        assert_eq!(h5.shift(Direction::E), Bitboard::EMPTY);
        assert_eq!(h5.shift(Direction::NE), Bitboard::EMPTY);
        assert_eq!(h5.shift(Direction::SE), Bitboard::EMPTY);
        assert_eq!(h5.shift(Direction::W), Square::G5.bb());

        let a5 = Square::A5.bb();
        assert_eq!(a5.shift(Direction::W), Bitboard::EMPTY);
        assert_eq!(a5.shift(Direction::NW), Bitboard::EMPTY);
        assert_eq!(a5.shift(Direction::SW), Bitboard::EMPTY);
        assert_eq!(a5.shift(Direction::E), Square::B5.bb());

        let e8 = Square::E8.bb();
        assert_eq!(e8.shift(Direction::N), Bitboard::EMPTY);
        assert_eq!(e8.shift(Direction::NE), Bitboard::EMPTY);
        assert_eq!(e8.shift(Direction::NW), Bitboard::EMPTY);

        let e1 = Square::E1.bb();
        assert_eq!(e1.shift(Direction::S), Bitboard::EMPTY);
        assert_eq!(e1.shift(Direction::SE), Bitboard::EMPTY);
        assert_eq!(e1.shift(Direction::SW), Bitboard::EMPTY);

        let g5 = Square::G5.bb();
        assert_eq!(g5.shift(Direction::NEE), Bitboard::EMPTY);
        assert_eq!(g5.shift(Direction::SEE), Bitboard::EMPTY);

        let b5 = Square::B5.bb();
        assert_eq!(b5.shift(Direction::NWW), Bitboard::EMPTY);
        assert_eq!(b5.shift(Direction::SWW), Bitboard::EMPTY);
    }

    #[test]
    fn test_shift_multiple_bits() {
        let bb = Square::E4.bb() | Square::D4.bb();
        assert_eq!(bb.shift(Direction::N), Square::E5.bb() | Square::D5.bb());
        assert_eq!(bb.shift(Direction::E), Square::F4.bb() | Square::E4.bb());

        let edge_case = Square::H1.bb() | Square::A1.bb();
        assert_eq!(edge_case.shift(Direction::E), Square::B1.bb());
        assert_eq!(edge_case.shift(Direction::W), Square::G1.bb());
    }

    #[test]
    fn test_iterator() {
        let bb = Square::E4.bb() | Square::D5.bb();
        assert_eq!(bb.len(), 2);
        assert_eq!(bb.collect::<Vec<_>>(), vec![Square::E4, Square::D5]);

        let mut seen = Vec::new();
        bb.for_each(|sq| seen.push(sq));
        assert_eq!(seen, vec![Square::E4, Square::D5]);
    }

    #[test]
    fn test_operators() {
        let mut bb = Square::A1.bb();
        bb |= Square::B1.bb();
        assert_eq!(bb, Bitboard::from([Square::A1, Square::B1]));
        bb &= Square::B1.bb();
        assert_eq!(bb, Square::B1.bb());
        bb ^= Square::B1.bb();
        assert_eq!(bb, Bitboard::EMPTY);
        assert_eq!(!Bitboard::EMPTY, Bitboard::FULL);

        // Overlapping boards combine as a set
        let left = Bitboard::from([Square::A1, Square::B1]);
        let right = Bitboard::from([Square::B1, Square::C1]);
        assert_eq!((left | right).count_bits(), 3);
        assert_eq!(left & right, Square::B1.bb());
        assert_eq!(left ^ right, Bitboard::from([Square::A1, Square::C1]));

        // Raw shifts wrap across the h-file, `shift` does not
        assert_eq!(Square::H1.bb() << 1u8, Square::A2.bb());
        assert_eq!(Square::H1.bb().shift(Direction::E), Bitboard::EMPTY);
        assert_eq!(Square::H8.bb() >> 63u8, Square::A1.bb());

        let mut bb = Rank::Rank1.bb();
        bb <<= 8u8;
        assert_eq!(bb, Rank::Rank2.bb());
        bb >>= 16u8;
        assert_eq!(bb, Bitboard::EMPTY);
    }
}

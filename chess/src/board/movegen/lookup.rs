//! # Module: `lookup`
//!
//! The attack lookup object and its process-wide instance.
//!
//! ## Overview
//!
//! [`AttackTables`] owns every precomputed table:
//!
//! - **Leaper tables**: king, knight and per-colour pawn captures and pushes,
//!   one bitboard per square.
//! - **Slider tables**: bishop and rook attack sets for every relevant
//!   occupancy, see [`SliderTable`]. Queens combine the two.
//!
//! The tables are immutable once built. A host either owns an `AttackTables`
//! and passes it by reference, or calls [`init_tables`] once at start-up and
//! uses the free functions, which read the process-wide instance and fail with
//! [`TargetError::TablesNotInitialized`] until it exists.

use std::sync::OnceLock;
use std::time::Instant;

use log::{debug, info};

use super::init::*;
use super::magic::SliderTable;
use crate::core::{Bitboard, Colour, Direction, PieceType, Square, TargetError};

/******************************************\
|==========================================|
|              Attack Tables               |
|==========================================|
\******************************************/

/// Read-only attack lookup for every piece type.
pub struct AttackTables {
    pub(super) king: AttackTable,
    pub(super) knight: AttackTable,
    pub(super) pawn_attacks: [AttackTable; Colour::NUM],
    pub(super) pawn_pushes: [AttackTable; Colour::NUM],
    pub(super) bishop: SliderTable,
    pub(super) rook: SliderTable,
}

impl AttackTables {
    /// Builds every table. Building twice gives identical tables.
    pub fn new() -> AttackTables {
        let king = init_pseudo_attacks(&Direction::KING);
        let knight = init_pseudo_attacks(&Direction::KNIGHT);
        let pawn_attacks = init_pawn_attacks();
        let pawn_pushes = init_pawn_pushes();
        debug!("leaper tables built: king, knight, pawn attacks and pushes for both colours");

        AttackTables {
            king,
            knight,
            pawn_attacks,
            pawn_pushes,
            bishop: SliderTable::bishop(),
            rook: SliderTable::rook(),
        }
    }

    /// Squares a king on `sq` attacks
    #[inline]
    pub fn king_targets(&self, sq: Square) -> Bitboard {
        self.king[sq.index()]
    }

    /// Squares a knight on `sq` attacks
    #[inline]
    pub fn knight_targets(&self, sq: Square) -> Bitboard {
        self.knight[sq.index()]
    }

    /// Diagonal capture squares of a pawn, regardless of what stands on them
    #[inline]
    pub fn pawn_attack_targets(&self, sq: Square, col: Colour) -> Bitboard {
        self.pawn_attacks[col.index()][sq.index()]
    }

    /// Bishop attacks along the four diagonals, each ray ending on its first blocker
    #[inline]
    pub fn bishop_targets(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.bishop.get(sq, occ)
    }

    /// Rook attacks along the rank and file, each ray ending on its first blocker
    #[inline]
    pub fn rook_targets(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.rook.get(sq, occ)
    }

    /// Union of the bishop and rook attacks from the same square
    #[inline]
    pub fn queen_targets(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.bishop_targets(sq, occ) | self.rook_targets(sq, occ)
    }

    /// Gets the attack `Bitboard` for a piece
    ///
    /// # Arguments
    /// * `col`: The `Colour` of the attacking piece, only read for pawns.
    /// * `pt`: The `PieceType` of the attacking piece.
    /// * `sq`: The `Square` the attacking piece is on.
    /// * `occ`: All occupied squares on the board, only read for sliders.
    ///
    /// Pawns report their captures, never their pushes.
    #[inline]
    pub fn attacks(&self, col: Colour, pt: PieceType, sq: Square, occ: Bitboard) -> Bitboard {
        match pt {
            PieceType::Pawn => self.pawn_attack_targets(sq, col),
            PieceType::Knight => self.knight_targets(sq),
            PieceType::King => self.king_targets(sq),
            PieceType::Bishop => self.bishop_targets(sq, occ),
            PieceType::Rook => self.rook_targets(sq, occ),
            PieceType::Queen => self.queen_targets(sq, occ),
        }
    }
}

impl Default for AttackTables {
    fn default() -> Self {
        AttackTables::new()
    }
}

/******************************************\
|==========================================|
|              One-time Setup              |
|==========================================|
\******************************************/

/// A slot that holds an [`AttackTables`] once it has been built.
///
/// Building happens at most once per slot even when several threads race to
/// initialise it; afterwards every reader sees the same tables.
pub struct TableSlot(OnceLock<AttackTables>);

impl TableSlot {
    pub const fn new() -> TableSlot {
        TableSlot(OnceLock::new())
    }

    /// Builds the tables on first call and returns them on every call.
    pub fn init(&self) -> &AttackTables {
        self.0.get_or_init(|| {
            let start = Instant::now();
            let tables = AttackTables::new();
            info!("attack tables initialised in {:?}", start.elapsed());
            tables
        })
    }

    /// The tables, or [`TargetError::TablesNotInitialized`] before [`TableSlot::init`].
    pub fn get(&self) -> Result<&AttackTables, TargetError> {
        self.0.get().ok_or(TargetError::TablesNotInitialized)
    }
}

impl Default for TableSlot {
    fn default() -> Self {
        TableSlot::new()
    }
}

static TABLES: TableSlot = TableSlot::new();

/// Builds the process-wide tables. Call once before any free query function;
/// later calls return the same tables without rebuilding.
pub fn init_tables() -> &'static AttackTables {
    TABLES.init()
}

/// The process-wide tables, if [`init_tables`] has run.
pub fn tables() -> Result<&'static AttackTables, TargetError> {
    TABLES.get()
}

/******************************************\
|==========================================|
|               Get Attacks                |
|==========================================|
\******************************************/

#[inline]
pub fn king_targets(sq: Square) -> Result<Bitboard, TargetError> {
    Ok(tables()?.king_targets(sq))
}

#[inline]
pub fn knight_targets(sq: Square) -> Result<Bitboard, TargetError> {
    Ok(tables()?.knight_targets(sq))
}

#[inline]
pub fn pawn_attack_targets(sq: Square, col: Colour) -> Result<Bitboard, TargetError> {
    Ok(tables()?.pawn_attack_targets(sq, col))
}

#[inline]
pub fn bishop_targets(sq: Square, occ: Bitboard) -> Result<Bitboard, TargetError> {
    Ok(tables()?.bishop_targets(sq, occ))
}

#[inline]
pub fn rook_targets(sq: Square, occ: Bitboard) -> Result<Bitboard, TargetError> {
    Ok(tables()?.rook_targets(sq, occ))
}

#[inline]
pub fn queen_targets(sq: Square, occ: Bitboard) -> Result<Bitboard, TargetError> {
    Ok(tables()?.queen_targets(sq, occ))
}

#[inline]
pub fn attacks(col: Colour, pt: PieceType, sq: Square, occ: Bitboard) -> Result<Bitboard, TargetError> {
    Ok(tables()?.attacks(col, pt, sq, occ))
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{File, Rank};
    use test_case::test_case;

    #[test]
    fn test_uninitialised_slot_is_an_error() {
        let slot = TableSlot::new();
        assert!(matches!(slot.get(), Err(TargetError::TablesNotInitialized)));
    }

    #[test]
    fn test_init_is_once() {
        let _ = env_logger::builder().is_test(true).try_init();

        let first = init_tables() as *const AttackTables;
        let second = init_tables() as *const AttackTables;
        assert_eq!(first, second);
        assert!(tables().is_ok());
    }

    #[test_case(Square::A1, 3; "corner a1")]
    #[test_case(Square::H8, 3; "corner h8")]
    #[test_case(Square::D4, 8; "centre d4")]
    #[test_case(Square::G7, 8; "inner g7")]
    fn test_king_target_counts(sq: Square, expected: u32) {
        init_tables();
        assert_eq!(king_targets(sq).map(|bb| bb.count_bits()), Ok(expected));
    }

    #[test_case(Square::A1; "a1")]
    #[test_case(Square::H1; "h1")]
    #[test_case(Square::A8; "a8")]
    #[test_case(Square::H8; "h8")]
    fn test_knight_corner_counts(sq: Square) {
        init_tables();
        assert_eq!(knight_targets(sq).map(|bb| bb.count_bits()), Ok(2));
    }

    #[test]
    fn test_rook_empty_board_cross() {
        let tables = init_tables();

        for sq in Square::iter() {
            let cross = (sq.rank().bb() | sq.file().bb()) & !sq.bb();
            assert_eq!(tables.rook_targets(sq, Bitboard::EMPTY), cross, "rook on {sq}");
        }
    }

    #[test]
    fn test_rook_blocker_two_away() {
        let tables = init_tables();
        let occ = Square::D6.bb();
        let rook = tables.rook_targets(Square::D4, occ);

        assert!(rook.contains(Square::D5));
        assert!(rook.contains(Square::D6));
        assert!(!rook.contains(Square::D7));
        assert!(!rook.contains(Square::D8));
        assert_eq!(rook.count_bits(), 12);
    }

    #[test]
    fn test_bishop_blockers() {
        let tables = init_tables();
        let occ = Bitboard::from([Square::B2, Square::G7, Square::E4]);
        let bishop = tables.bishop_targets(Square::C3, occ);

        assert_eq!(
            bishop,
            Bitboard::from([
                Square::D4,
                Square::E5,
                Square::F6,
                Square::G7,
                Square::B4,
                Square::A5,
                Square::D2,
                Square::E1,
                Square::B2,
            ])
        );
        assert!(!bishop.contains(Square::A1));
        assert!(!bishop.contains(Square::H8));
    }

    #[test]
    fn test_queen_is_union() {
        let tables = init_tables();
        let occ = Bitboard::from([Square::E6, Square::C4, Square::G2, Square::B7]);

        for sq in Square::iter() {
            let queen = tables.queen_targets(sq, occ);
            assert_eq!(queen, tables.rook_targets(sq, occ) | tables.bishop_targets(sq, occ));
            assert!((tables.rook_targets(sq, occ) & tables.bishop_targets(sq, occ)).is_empty());
        }

        assert_eq!(tables.queen_targets(Square::D4, Bitboard::EMPTY).count_bits(), 27);
    }

    #[test]
    fn test_attacks_dispatch() {
        let tables = init_tables();
        let occ = File::FileE.bb() | Rank::Rank5.bb();

        assert_eq!(
            tables.attacks(Colour::Black, PieceType::Pawn, Square::E5, occ),
            Bitboard::from([Square::D4, Square::F4])
        );
        assert_eq!(tables.attacks(Colour::White, PieceType::Knight, Square::G1, occ), tables.knight_targets(Square::G1));
        assert_eq!(tables.attacks(Colour::White, PieceType::King, Square::E1, occ), tables.king_targets(Square::E1));
        assert_eq!(
            tables.attacks(Colour::White, PieceType::Rook, Square::A1, occ),
            (Rank::Rank1.bb() & !File::FileF.bb() & !File::FileG.bb() & !File::FileH.bb() & !Square::A1.bb())
                | (File::FileA.bb() & !Rank::Rank6.bb() & !Rank::Rank7.bb() & !Rank::Rank8.bb() & !Square::A1.bb())
        );
        assert_eq!(
            attacks(Colour::White, PieceType::Queen, Square::D4, occ),
            Ok(tables.queen_targets(Square::D4, occ))
        );
    }

    #[test]
    fn test_free_functions_match_tables() {
        let tables = init_tables();
        let occ = Bitboard(0x0000_2400_0081_4200);

        for sq in Square::iter() {
            assert_eq!(pawn_attack_targets(sq, Colour::White), Ok(tables.pawn_attack_targets(sq, Colour::White)));
            assert_eq!(bishop_targets(sq, occ), Ok(tables.bishop_targets(sq, occ)));
            assert_eq!(rook_targets(sq, occ), Ok(tables.rook_targets(sq, occ)));
            assert_eq!(queen_targets(sq, occ), Ok(tables.queen_targets(sq, occ)));
        }
    }
}

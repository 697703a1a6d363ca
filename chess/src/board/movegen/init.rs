//! # Module: `init`
//!
//! Builders for the occupancy-independent tables and the slow reference
//! attack functions the slider tables are verified against.
//!
//! - **Leaper tables**: king, knight and pawn captures, derived by shifting a
//!   single bit in every direction of the piece and keeping only the bits that
//!   land on the board (see [`Direction::landing_mask`]).
//! - **Pawn push table**: the one-step forward square per colour, with no
//!   double push and no blocking.
//! - **Ray casting**: square by square slider attacks, inclusive of the first
//!   blocker. This is the definition the magic tables must reproduce.
//! - **Relevant occupancy mask**: the rays from a square without the board edge,
//!   since a blocker on the last square of a ray does not change the attack set.
use crate::core::*;

/// One bitboard per square.
pub type AttackTable = [Bitboard; Square::NUM];

/// Initializes pseudo-attack tables for non-sliding pieces.
/// Each entry is the union of one step in every direction in `dirs`.
pub(super) const fn init_pseudo_attacks(dirs: &[Direction]) -> AttackTable {
    let mut attacks = [Bitboard::EMPTY; Square::NUM];

    let mut i = 0;
    while i < Square::NUM {
        let sq_bb = unsafe { Square::from_unchecked(i as u8).bb() };

        let mut j = 0;
        while j < dirs.len() {
            attacks[i].0 |= sq_bb.shift(dirs[j]).0;
            j += 1;
        }

        i += 1;
    }

    attacks
}

/// Pawn capture squares for both colours, indexed by colour then square
pub(super) const fn init_pawn_attacks() -> [AttackTable; Colour::NUM] {
    [
        init_pseudo_attacks(&Colour::White.captures()),
        init_pseudo_attacks(&Colour::Black.captures()),
    ]
}

/// Single step pawn pushes for both colours, indexed by colour then square.
/// A pawn on the last rank pushes off the board and gets an empty entry.
pub(super) const fn init_pawn_pushes() -> [AttackTable; Colour::NUM] {
    [
        init_pseudo_attacks(&[Colour::White.forward()]),
        init_pseudo_attacks(&[Colour::Black.forward()]),
    ]
}

/// Slider attacks by walking each ray until it leaves the board or hits a bit
/// in `occ`. The blocking square is part of the result.
pub(crate) const fn ray_attacks(dirs: &[Direction], sq: Square, occ: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;

    let mut i = 0;
    while i < dirs.len() {
        let mut from = sq;
        while let Some(to) = from.add(dirs[i]) {
            attacks.0 |= to.bb().0;
            if occ.contains(to) {
                break;
            }
            from = to;
        }
        i += 1;
    }

    attacks
}

/// Board edges that do not lie on the square's own rank or file.
pub(super) const fn edge_mask(sq: Square) -> Bitboard {
    let ranks = (Bitboard::RANK_1.0 | Bitboard::RANK_8.0) & !sq.rank().bb().0;
    let files = (Bitboard::FILE_A.0 | Bitboard::FILE_H.0) & !sq.file().bb().0;

    Bitboard(ranks | files)
}

/// Squares whose occupancy can change the slider attacks from `sq`.
pub(super) const fn relevant_mask(dirs: &[Direction], sq: Square) -> Bitboard {
    Bitboard(ray_attacks(dirs, sq, Bitboard::EMPTY).0 & !edge_mask(sq).0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Square::A1, 3; "corner a1")]
    #[test_case(Square::H1, 3; "corner h1")]
    #[test_case(Square::A8, 3; "corner a8")]
    #[test_case(Square::H8, 3; "corner h8")]
    #[test_case(Square::A4, 5; "edge a4")]
    #[test_case(Square::E4, 8; "centre e4")]
    #[test_case(Square::B7, 8; "inner b7")]
    fn test_king_counts(sq: Square, expected: u32) {
        let king = init_pseudo_attacks(&Direction::KING);
        assert_eq!(king[sq.index()].count_bits(), expected);
    }

    #[test_case(Square::A1, 2; "corner a1")]
    #[test_case(Square::H1, 2; "corner h1")]
    #[test_case(Square::A8, 2; "corner a8")]
    #[test_case(Square::H8, 2; "corner h8")]
    #[test_case(Square::B1, 3; "b1")]
    #[test_case(Square::B2, 4; "b2")]
    #[test_case(Square::D4, 8; "centre d4")]
    fn test_knight_counts(sq: Square, expected: u32) {
        let knight = init_pseudo_attacks(&Direction::KNIGHT);
        assert_eq!(knight[sq.index()].count_bits(), expected);
    }

    #[test]
    fn test_knight_does_not_wrap() {
        let knight = init_pseudo_attacks(&Direction::KNIGHT);
        assert_eq!(knight[Square::A1.index()], Bitboard::from([Square::B3, Square::C2]));
        assert_eq!(knight[Square::H8.index()], Bitboard::from([Square::G6, Square::F7]));
        assert_eq!(
            knight[Square::G2.index()],
            Bitboard::from([Square::E1, Square::E3, Square::F4, Square::H4])
        );
    }

    #[test]
    fn test_leapers_match_square_steps() {
        let king = init_pseudo_attacks(&Direction::KING);
        let knight = init_pseudo_attacks(&Direction::KNIGHT);

        for sq in Square::iter() {
            let king_steps = Direction::KING.iter().filter_map(|&d| sq.add(d));
            let knight_steps = Direction::KNIGHT.iter().filter_map(|&d| sq.add(d));

            assert_eq!(king[sq.index()], king_steps.fold(Bitboard::EMPTY, |bb, s| bb | s.bb()));
            assert_eq!(knight[sq.index()], knight_steps.fold(Bitboard::EMPTY, |bb, s| bb | s.bb()));
        }
    }

    #[test]
    fn test_pawn_attacks() {
        let pawn = init_pawn_attacks();
        let white = &pawn[Colour::White.index()];
        let black = &pawn[Colour::Black.index()];

        assert_eq!(white[Square::E4.index()], Bitboard::from([Square::D5, Square::F5]));
        assert_eq!(white[Square::A2.index()], Square::B3.bb());
        assert_eq!(white[Square::H2.index()], Square::G3.bb());
        assert_eq!(white[Square::C8.index()], Bitboard::EMPTY);

        assert_eq!(black[Square::E5.index()], Bitboard::from([Square::D4, Square::F4]));
        assert_eq!(black[Square::A7.index()], Square::B6.bb());
        assert_eq!(black[Square::H7.index()], Square::G6.bb());
        assert_eq!(black[Square::C1.index()], Bitboard::EMPTY);
    }

    #[test]
    fn test_pawn_pushes() {
        let push = init_pawn_pushes();
        let white = &push[Colour::White.index()];
        let black = &push[Colour::Black.index()];

        assert_eq!(white[Square::A2.index()], Square::A3.bb());
        assert_eq!(white[Square::H7.index()], Square::H8.bb());
        assert_eq!(white[Square::D8.index()], Bitboard::EMPTY);

        assert_eq!(black[Square::A7.index()], Square::A6.bb());
        assert_eq!(black[Square::H2.index()], Square::H1.bb());
        assert_eq!(black[Square::D1.index()], Bitboard::EMPTY);
    }

    #[test]
    fn test_tables_are_idempotent() {
        assert_eq!(init_pseudo_attacks(&Direction::KING), init_pseudo_attacks(&Direction::KING));
        assert_eq!(init_pawn_attacks(), init_pawn_attacks());
        assert_eq!(init_pawn_pushes(), init_pawn_pushes());
    }

    #[test]
    fn test_ray_attacks_empty_board() {
        let rook = ray_attacks(&Direction::ORTHOGONAL, Square::D4, Bitboard::EMPTY);
        assert_eq!(rook, (Rank::Rank4.bb() | File::FileD.bb()) & !Square::D4.bb());
        assert_eq!(rook.count_bits(), 14);

        let bishop = ray_attacks(&Direction::DIAGONAL, Square::A1, Bitboard::EMPTY);
        assert_eq!(bishop.count_bits(), 7);
        assert!(bishop.contains(Square::H8));
    }

    #[test]
    fn test_ray_attacks_stop_at_blocker() {
        let occ = Square::D6.bb() | Square::D8.bb();
        let rook = ray_attacks(&Direction::ORTHOGONAL, Square::D4, occ);

        assert!(rook.contains(Square::D5));
        assert!(rook.contains(Square::D6));
        assert!(!rook.contains(Square::D7));
        assert!(!rook.contains(Square::D8));
        assert!(rook.contains(Square::D1));
        assert!(rook.contains(Square::A4));
        assert!(rook.contains(Square::H4));
    }

    #[test]
    fn test_relevant_masks() {
        let rook = relevant_mask(&Direction::ORTHOGONAL, Square::A1);
        assert_eq!(rook.count_bits(), 12);
        assert!(!rook.contains(Square::A8));
        assert!(!rook.contains(Square::H1));

        let rook = relevant_mask(&Direction::ORTHOGONAL, Square::E4);
        assert_eq!(rook.count_bits(), 10);

        let bishop = relevant_mask(&Direction::DIAGONAL, Square::E4);
        assert_eq!(bishop.count_bits(), 9);

        let bishop = relevant_mask(&Direction::DIAGONAL, Square::A1);
        assert_eq!(bishop.count_bits(), 6);
    }
}

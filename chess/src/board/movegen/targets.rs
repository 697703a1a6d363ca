use super::lookup::{AttackTables, tables};
use crate::board::PieceSet;
use crate::core::*;

/******************************************\
|==========================================|
|              Pawn Targets                |
|==========================================|
\******************************************/

impl AttackTables {
    /// Squares a pawn on `sq` can push to.
    ///
    /// The single push is dropped when its square is occupied. The double push
    /// is only added from the colour's start rank, and only when both squares
    /// in front of the pawn are empty.
    #[inline]
    pub fn pawn_push_targets(&self, sq: Square, col: Colour, occ: Bitboard) -> Bitboard {
        let single = self.pawn_pushes[col.index()][sq.index()] & !occ;

        if single.is_empty() || sq.rank() != col.start_rank() {
            return single;
        }

        single | (single.shift(col.forward()) & !occ)
    }

    /// Every square a pawn on `sq` can move to: diagonal captures onto
    /// `enemy_occ` and pushes blocked by `all_occ`.
    #[inline]
    pub fn pawn_targets(&self, sq: Square, col: Colour, enemy_occ: Bitboard, all_occ: Bitboard) -> Bitboard {
        (self.pawn_attack_targets(sq, col) & enemy_occ) | self.pawn_push_targets(sq, col, all_occ)
    }

    /// Union of the attacks of every piece in `pieces`, all of colour `col`.
    ///
    /// Pawns contribute their captures only. Squares holding `col`'s own pieces
    /// are not removed.
    pub fn generate_attack_targets(&self, pieces: &PieceSet, col: Colour, occ: Bitboard) -> Bitboard {
        PieceType::iter().fold(Bitboard::EMPTY, |attacked, pt| {
            pieces
                .squares(pt)
                .iter()
                .fold(attacked, |attacked, &sq| attacked | self.attacks(col, pt, sq, occ))
        })
    }
}

#[inline]
pub fn pawn_push_targets(sq: Square, col: Colour, occ: Bitboard) -> Result<Bitboard, TargetError> {
    Ok(tables()?.pawn_push_targets(sq, col, occ))
}

#[inline]
pub fn pawn_targets(
    sq: Square,
    col: Colour,
    enemy_occ: Bitboard,
    all_occ: Bitboard,
) -> Result<Bitboard, TargetError> {
    Ok(tables()?.pawn_targets(sq, col, enemy_occ, all_occ))
}

pub fn generate_attack_targets(pieces: &PieceSet, col: Colour, occ: Bitboard) -> Result<Bitboard, TargetError> {
    Ok(tables()?.generate_attack_targets(pieces, col, occ))
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

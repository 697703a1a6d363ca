use super::{PieceSet, Position};
use crate::core::*;

impl Position {
    /// Applies a move and returns the resulting position, leaving `self` untouched.
    ///
    /// The piece on `mv.from` moves to `mv.to`. Whatever stood on `mv.to` is
    /// removed, so a capture needs no special handling. With a promotion the
    /// pawn arrives as the promoted piece. Castling and en passant are not
    /// interpreted, and the move is not checked for legality.
    ///
    /// # Errors
    ///
    /// * [`TargetError::EmptySquare`] when nothing stands on `mv.from`.
    /// * [`TargetError::InvalidPromotion`] when the promotion is a pawn or a
    ///   king, or the moving piece is not a pawn.
    pub fn make_move(&self, mv: Move) -> Result<Position, TargetError> {
        let piece = self.piece_on(mv.from).ok_or(TargetError::EmptySquare(mv.from))?;
        let us = piece.colour();

        let arriving = match mv.promotion {
            None => piece.pt(),
            Some(pt) if piece.pt() == PieceType::Pawn && PieceType::PROMOTIONS.contains(&pt) => pt,
            Some(pt) => return Err(TargetError::InvalidPromotion(pt)),
        };

        let mut ours: PieceSet = *self.side(us);
        let mut theirs: PieceSet = *self.side(!us);

        ours.remove(mv.from);
        ours.remove(mv.to);
        theirs.remove(mv.to);
        ours.add(arriving, mv.to);

        Ok(match us {
            Colour::White => Position::new(ours, theirs),
            Colour::Black => Position::new(theirs, ours),
        })
    }
}

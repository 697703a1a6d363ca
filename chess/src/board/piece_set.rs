use crate::core::*;

/******************************************\
|==========================================|
|                Piece Set                 |
|==========================================|
\******************************************/

/// The pieces of one side: one bitboard per piece type, indexed by [`PieceType`].
///
/// The piece types are expected not to share squares. Nothing here enforces
/// that except [`PieceSet::from_squares`]; the occupancy is a union either way.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSet([Bitboard; PieceType::NUM]);

impl PieceSet {
    /// A side with no pieces
    pub const EMPTY: PieceSet = PieceSet([Bitboard::EMPTY; PieceType::NUM]);

    /// Wraps bitboards ordered pawn, knight, bishop, rook, queen, king
    pub const fn new(pieces: [Bitboard; PieceType::NUM]) -> PieceSet {
        PieceSet(pieces)
    }

    /// Builds a side from square lists ordered pawn, knight, bishop, rook, queen, king.
    ///
    /// A square listed twice, in one list or across two lists, is rejected
    /// with [`TargetError::DuplicateSquare`].
    pub fn from_squares(lists: [&[Square]; PieceType::NUM]) -> Result<PieceSet, TargetError> {
        let mut set = PieceSet::EMPTY;

        for (pt, list) in PieceType::iter().zip(lists) {
            let bb = Bitboard::from_squares(list)?;

            if let Some(sq) = (bb & set.occupancy()).lsb() {
                log::warn!("rejecting piece set, {sq} holds more than one piece type");
                return Err(TargetError::DuplicateSquare(sq));
            }

            set.0[pt.index()] = bb;
        }

        Ok(set)
    }

    /// The same set with the bitboard of `pt` replaced
    pub const fn with(mut self, pt: PieceType, bb: Bitboard) -> PieceSet {
        self.0[pt as usize] = bb;
        self
    }

    #[inline]
    pub const fn pieces(&self, pt: PieceType) -> Bitboard {
        self.0[pt as usize]
    }

    /// Squares of every piece of type `pt`, ascending
    #[inline]
    pub fn squares(&self, pt: PieceType) -> SquareList {
        self.pieces(pt).squares()
    }

    /// Every square holding a piece of this side.
    ///
    /// This is the bitwise union of the six bitboards. A square set in two of
    /// them is counted once.
    #[inline]
    pub fn occupancy(&self) -> Bitboard {
        self.0.iter().fold(Bitboard::EMPTY, |occ, &bb| occ | bb)
    }

    /// The first piece type, in pawn to king order, that stands on `sq`
    #[inline]
    pub fn piece_type_on(&self, sq: Square) -> Option<PieceType> {
        PieceType::iter().find(|&pt| self.pieces(pt).contains(sq))
    }

    #[inline]
    pub(crate) fn add(&mut self, pt: PieceType, sq: Square) {
        self.0[pt.index()].set(sq);
    }

    /// Clears `sq` from every piece type
    #[inline]
    pub(crate) fn remove(&mut self, sq: Square) {
        for bb in self.0.iter_mut() {
            bb.clear(sq);
        }
    }
}

impl std::ops::Index<PieceType> for PieceSet {
    type Output = Bitboard;

    fn index(&self, pt: PieceType) -> &Self::Output {
        &self.0[pt.index()]
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

    #[test]
    fn test_occupancy_is_union() {
        let pawns = Bitboard::from([Square::A2, Square::B2]);
        let knights = Bitboard::from([Square::B2, Square::C3]);
        let set = PieceSet::EMPTY
            .with(PieceType::Pawn, pawns)
            .with(PieceType::Knight, knights);

        assert_eq!(set.occupancy(), Bitboard::from([Square::A2, Square::B2, Square::C3]));
        assert_eq!(set.occupancy().count_bits(), 3);
        // Adding the masks would carry b2 into c2
        assert_ne!(set.occupancy().0, pawns.0.wrapping_add(knights.0));
        assert_eq!(
            pawns.0.wrapping_add(knights.0),
            Bitboard::from([Square::A2, Square::C2, Square::C3]).0
        );
    }

    #[test]
    fn test_occupancy_disjoint_sets() {
        let set = PieceSet::new([
            Rank::Rank2.bb(),
            Bitboard::from([Square::B1, Square::G1]),
            Bitboard::from([Square::C1, Square::F1]),
            Bitboard::from([Square::A1, Square::H1]),
            Square::D1.bb(),
            Square::E1.bb(),
        ]);

        assert_eq!(set.occupancy(), Rank::Rank1.bb() | Rank::Rank2.bb());
        assert_eq!(PieceSet::EMPTY.occupancy(), Bitboard::EMPTY);
    }

    #[test]
    fn test_from_squares() {
        let set = PieceSet::from_squares([
            &[Square::E4, Square::D5],
            &[Square::F3],
            &[],
            &[Square::A1],
            &[],
            &[Square::G1],
        ])
        .unwrap();

        assert_eq!(set[PieceType::Pawn], Bitboard::from([Square::E4, Square::D5]));
        assert_eq!(set.pieces(PieceType::Knight), Square::F3.bb());
        assert!(set[PieceType::Bishop].is_empty());
        assert_eq!(set.squares(PieceType::Pawn).as_slice(), &[Square::E4, Square::D5]);
        assert_eq!(set.piece_type_on(Square::G1), Some(PieceType::King));
        assert_eq!(set.piece_type_on(Square::H1), None);
    }

    #[test]
    fn test_from_squares_rejects_shared_square() {
        let result = PieceSet::from_squares([&[Square::E4], &[], &[Square::E4], &[], &[], &[]]);
        assert_eq!(result, Err(TargetError::DuplicateSquare(Square::E4)));

        let result = PieceSet::from_squares([&[Square::C2, Square::C2], &[], &[], &[], &[], &[]]);
        assert_eq!(result, Err(TargetError::DuplicateSquare(Square::C2)));
    }

    #[test]
    fn test_add_and_remove() {
        let mut set = PieceSet::EMPTY;
        set.add(PieceType::Queen, Square::D1);
        set.add(PieceType::Rook, Square::D1);
        assert_eq!(set.occupancy(), Square::D1.bb());

        set.remove(Square::D1);
        assert_eq!(set, PieceSet::EMPTY);
    }
}

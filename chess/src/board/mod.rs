pub mod movegen;
pub mod movement;
pub mod piece_set;

pub use movegen::{
    AttackTables, TableSlot, attacks, bishop_targets, generate_attack_targets, init_tables,
    king_targets, knight_targets, pawn_attack_targets, pawn_push_targets, pawn_targets,
    queen_targets, rook_targets, tables,
};
pub use piece_set::PieceSet;

use crate::core::*;

/******************************************\
|==========================================|
|                 Position                 |
|==========================================|
\******************************************/

/// Piece placement of both sides plus the occupancy of each colour.
///
/// The occupancy is always derived as the union of a side's piece bitboards,
/// so it can not drift from the pieces. A position is never changed in place;
/// [`Position::make_move`] returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    sides: [PieceSet; Colour::NUM],

    occupied: [Bitboard; Colour::NUM],
}

/******************************************\
|==========================================|
|           Basic Implementation           |
|==========================================|
\******************************************/

impl Position {
    pub fn new(white: PieceSet, black: PieceSet) -> Position {
        Position {
            sides: [white, black],
            occupied: [white.occupancy(), black.occupancy()],
        }
    }

    /// The standard initial placement
    pub fn starting() -> Position {
        let white = PieceSet::new([
            Rank::Rank2.bb(),
            Bitboard::from([Square::B1, Square::G1]),
            Bitboard::from([Square::C1, Square::F1]),
            Bitboard::from([Square::A1, Square::H1]),
            Square::D1.bb(),
            Square::E1.bb(),
        ]);

        // Black mirrors white across the middle of the board
        let mut black = PieceSet::EMPTY;
        for pt in PieceType::iter() {
            black = black.with(pt, Bitboard(white.pieces(pt).0.swap_bytes()));
        }

        Position::new(white, black)
    }

    #[inline]
    pub fn side(&self, colour: Colour) -> &PieceSet {
        &self.sides[colour.index()]
    }

    #[inline]
    pub fn occupied(&self, colour: Colour) -> Bitboard {
        self.occupied[colour.index()]
    }

    #[inline]
    pub fn all_occupied(&self) -> Bitboard {
        self.occupied(Colour::White) | self.occupied(Colour::Black)
    }

    #[inline]
    pub fn piece_bb(&self, colour: Colour, pt: PieceType) -> Bitboard {
        self.side(colour).pieces(pt)
    }

    /// The piece on `square`, white checked first
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        Colour::iter().find_map(|colour| {
            self.side(colour)
                .piece_type_on(square)
                .map(|pt| Piece::from_parts(colour, pt))
        })
    }

    /// The square of `colour`'s king, the lowest one if there are several
    #[inline]
    pub fn king_square(&self, colour: Colour) -> Option<Square> {
        self.piece_bb(colour, PieceType::King).lsb()
    }
}

/******************************************\
|==========================================|
|             Attack Queries               |
|==========================================|
\******************************************/

impl Position {
    /// Every square `colour` attacks, with both sides' pieces blocking sliders
    #[inline]
    pub fn attacked_squares(&self, colour: Colour, tables: &AttackTables) -> Bitboard {
        tables.generate_attack_targets(self.side(colour), colour, self.all_occupied())
    }

    #[inline]
    pub fn is_attacked(&self, square: Square, by: Colour, tables: &AttackTables) -> bool {
        self.attacked_squares(by, tables).contains(square)
    }

    /// Whether `colour`'s king stands on a square the other side attacks.
    /// A side without a king is never in check.
    pub fn is_in_check(&self, colour: Colour, tables: &AttackTables) -> bool {
        self.king_square(colour)
            .is_some_and(|ksq| self.is_attacked(ksq, !colour, tables))
    }

    /// Pseudo-legal targets of the piece on `square`: its attacks or pushes
    /// without the squares its own side occupies. Pins and checks are not
    /// considered.
    pub fn piece_targets(&self, square: Square, tables: &AttackTables) -> Result<Bitboard, TargetError> {
        let piece = self.piece_on(square).ok_or(TargetError::EmptySquare(square))?;
        let us = piece.colour();

        let targets = match piece.pt() {
            PieceType::Pawn => {
                tables.pawn_targets(square, us, self.occupied(!us), self.all_occupied())
            }
            pt => tables.attacks(us, pt, square, self.all_occupied()),
        };

        Ok(targets & !self.occupied(us))
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::starting()
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SEPARATOR: &str = "\n     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{}", SEPARATOR)?;

        for rank in Rank::iter().rev() {
            write!(f, " {}   |", rank)?;

            for file in File::iter() {
                let square = Square::from_parts(file, rank);
                let cell = match self.piece_on(square) {
                    Some(piece) => piece.to_string(),
                    None => " ".to_string(),
                };
                write!(f, " {} |", cell)?;
            }

            writeln!(f, "{}", SEPARATOR)?;
        }

        writeln!(f)?;
        writeln!(f, "       A   B   C   D   E   F   G   H")
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

use thiserror::Error;

use crate::core::Colour;

/******************************************\
|==========================================|
|                Piece Type                |
|==========================================|
\******************************************/

/// # Piece Type representation
///
/// - The six kinds of chess piece, independent of colour
/// - The discriminant doubles as the index of a piece set's bitboards

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
   Pawn, Knight, Bishop, Rook, Queen, King,
}

impl PieceType {
    /// Number of elements in the PieceType enum
    pub const NUM: usize = 6;

    /// Piece types a pawn may promote to
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
    ];
}

crate::impl_from_to_primitive!(PieceType);
crate::impl_enum_iter!(PieceType);

/******************************************\
|==========================================|
|                  Piece                   |
|==========================================|
\******************************************/

/// # Piece representation
///
/// - A piece type together with its colour, interleaved so that the low bit is the colour

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    WhitePawn, BlackPawn, WhiteKnight, BlackKnight, WhiteBishop, BlackBishop,
    WhiteRook, BlackRook, WhiteQueen, BlackQueen, WhiteKing, BlackKing,
}

impl Piece {
    /// Number of elements in the Piece enum
    pub const NUM: usize = 12;
}

crate::impl_from_to_primitive!(Piece);
crate::impl_enum_iter!(Piece);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl PieceType {
    /// Bishops, rooks and queens move along rays and are stopped by blockers
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }
}

impl Piece {
    /// Returns the piece type of the piece
    pub const fn pt(self) -> PieceType {
        unsafe { PieceType::from_unchecked(self as u8 >> 1) }
    }

    /// Returns the colour of the piece
    pub const fn colour(self) -> Colour {
        unsafe { Colour::from_unchecked(self as u8 & 1) }
    }

    /// Combines a colour and piece type pair to create a piece
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_targets::core::{Piece, Colour, PieceType};
    ///
    /// assert_eq!(Piece::from_parts(Colour::White, PieceType::Pawn), Piece::WhitePawn);
    /// assert_eq!(Piece::from_parts(Colour::Black, PieceType::King), Piece::BlackKing);
    /// ```
    pub const fn from_parts(colour: Colour, piece_type: PieceType) -> Self {
        unsafe { Piece::from_unchecked(colour as u8 | (piece_type as u8) << 1) }
    }

    /// Unicode chess glyph. The position diagram prints FEN letters instead.
    pub const fn symbol(self) -> char {
        PIECE_SYMBOLS[self as usize]
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

/// FEN letters, indexed by piece
const PIECE_STR: &[u8; Piece::NUM] = b"PpNnBbRrQqKk";

/// Unicode glyphs, indexed by piece
const PIECE_SYMBOLS: [char; Piece::NUM] = ['♙', '♟', '♘', '♞', '♗', '♝', '♖', '♜', '♕', '♛', '♔', '♚'];

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", PIECE_STR[self.index()] as char)
    }
}

impl std::fmt::Display for PieceType {
    /// Lower case letter of the piece type ('n' for a knight), as used in move strings
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", PIECE_STR[self.index() << 1].to_ascii_lowercase() as char)
    }
}

/******************************************\
|==========================================|
|                Parse Piece               |
|==========================================|
\******************************************/

impl std::str::FromStr for Piece {
    type Err = ParsePieceError;

    /// Parse the piece character into a piece, with error checkings
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_targets::core::{Piece, ParsePieceError};
    ///
    /// assert_eq!("k".parse::<Piece>().unwrap(), Piece::BlackKing);
    /// assert!(matches!("X".parse::<Piece>(), Err(ParsePieceError::InvalidChar('X'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let piece_char = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(ParsePieceError::InvalidLength(s.chars().count())),
        };

        let index = PIECE_STR
            .iter()
            .position(|&c| c as char == piece_char)
            .ok_or(ParsePieceError::InvalidChar(piece_char))?;

        Ok(unsafe { Piece::from_unchecked(index as u8) })
    }
}

impl std::str::FromStr for PieceType {
    type Err = ParsePieceError;

    /// Parses a piece letter of either case into its piece type
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Piece>().map(Piece::pt)
    }
}

/******************************************\
|==========================================|
|            Piece Parse Error             |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePieceError {
    #[error("Invalid length for piece string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for piece string: '{0}', expected one of \"PNBRQKpnbrqk\"")]
    InvalidChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

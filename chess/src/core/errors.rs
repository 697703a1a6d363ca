//! Defines the error type shared by the attack and target generation API.
//!
//! Every failure is local and synchronous: out-of-range input, querying the
//! process-wide tables before they exist, or malformed square lists and moves.
//! None of them is retried or replaced with a default bitboard, since an empty
//! bitboard is itself a legitimate answer.

#![deny(missing_docs)]

use thiserror::Error;

use super::{PieceType, Square};

/******************************************\
|==========================================|
|               Target Error               |
|==========================================|
\******************************************/

/// Represents errors raised by the bitboard primitives, the lookup tables and
/// the position helpers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetError {
    /// A raw square index was not in `0..64`.
    /// Contains the rejected index.
    #[error("Square index {0} is out of range, expected 0-63")]
    SquareOutOfRange(u8),

    /// A raw colour tag was neither `0` (white) nor `1` (black).
    /// Contains the rejected tag.
    #[error("Invalid colour tag {0}, expected 0 (white) or 1 (black)")]
    InvalidColour(u8),

    /// The process-wide attack tables were queried before `init_tables` ran.
    #[error("Attack tables have not been initialised")]
    TablesNotInitialized,

    /// The same square appeared twice in a square list.
    #[error("Square {0} appears more than once in the square list")]
    DuplicateSquare(Square),

    /// A move was applied from a square that holds no piece.
    #[error("No piece on the origin square {0}")]
    EmptySquare(Square),

    /// A promotion asked for a pawn or a king, or was attached to a move of
    /// a piece that is not a pawn.
    #[error("Cannot promote to {0}")]
    InvalidPromotion(PieceType),
}

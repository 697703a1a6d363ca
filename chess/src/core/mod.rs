// Core module exports

mod macros;

// Board representation submodules
pub mod bitboard;
pub mod errors;
pub mod moves;
pub mod piece;
pub mod square;
pub mod square_list;
pub mod types;

// Re-export common types for easier access
pub use bitboard::Bitboard;
pub use errors::TargetError;
pub use moves::Move;
pub use piece::{ParsePieceError, Piece, PieceType};
pub use square::{File, ParseFileError, ParseRankError, ParseSquareError, Rank, Square};
pub use square_list::SquareList;
pub use types::{Colour, Direction};

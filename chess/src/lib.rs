//! # Chess Targets
//!
//! Bitboard position representation with precomputed attack tables and
//! move-target generation.
//!
//! Squares map to bits as `rank * 8 + file`, so a1 is bit 0 and h8 is bit 63.
//! Leaper attacks (king, knight, pawn) come from per-square tables, slider
//! attacks (bishop, rook, queen) from magic bitboards, and
//! [`generate_attack_targets`] unions the attacks of one side. Legality,
//! castling and en passant are left to the caller.
//!
//! ```ignore
//! use chess_targets::{Colour, Position, Square, init_tables};
//!
//! let tables = init_tables();
//! let position = Position::starting();
//! let knight = position.piece_targets(Square::G1, tables)?;
//! assert_eq!(knight.count_bits(), 2);
//! ```
pub mod board;
pub mod core;
pub mod utils;

pub use crate::board::*;
pub use crate::core::*;

//! # Module: `movegen`
//!
//! Attack and target generation for every piece type.
//!
//! ## Overview
//!
//! - **Leaper attacks**: king, knight and pawn tables, one bitboard per square
//!   (and per colour for pawns), independent of occupancy.
//! - **Slider attacks**: bishop and rook attacks depend on occupancy. Each ray
//!   stops on, and includes, its first blocker. Lookups go through magic
//!   bitboards (PEXT on BMI2 targets); queens are the union of both.
//! - **Targets**: pawn pushes with double-push eligibility, pawn captures
//!   against enemy occupancy, and the union of everything one side attacks.
//!
//! ## Usage
//!
//! Either own an [`AttackTables`] and call its methods, or call [`init_tables`]
//! once at start-up and use the free functions, which return
//! [`TargetError::TablesNotInitialized`](crate::core::TargetError) until then.
//!
//! ## Submodules
//!
//! - `init`: table builders and ray casting.
//! - `magic`: magic bitboard slider tables.
//! - `lookup`: the `AttackTables` object and its process-wide instance.
//! - `targets`: pawn targets and the attacked squares of one side.

mod init;
mod lookup;
mod magic;
mod targets;

pub use lookup::{
    AttackTables, TableSlot, attacks, bishop_targets, init_tables, king_targets, knight_targets,
    pawn_attack_targets, queen_targets, rook_targets, tables,
};
pub use magic::SliderTable;
pub use targets::{generate_attack_targets, pawn_push_targets, pawn_targets};

//! Core rules types.
//!
//! This module contains the value types shared across the rules core:
//! - `PieceKind` and `Side` - piece kinds and players
//! - `Square` - on-board coordinate, file and rank in 1..=8
//! - `CastleRights` and `Flags` - state threaded between half-moves
//! - `CandidateMove`, `AppliedMove`, `Outcome`, `CheckStatus`

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleRights, Flags};
pub use moves::{AppliedMove, CandidateMove, CheckStatus, Outcome};
pub use piece::{PieceKind, Side, DEFAULT_PROMOTION, PROMOTION_KINDS};
pub use square::Square;

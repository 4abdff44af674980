//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! assert!(!Board::standard().is_end(Side::White, &Flags::initial()));
//! ```

pub use super::{
    Board, BoardBuilder, CandidateMove, CastleRights, CheckStatus, Flags, MoveError, Outcome,
    PieceKind, Position, Side, Square, DEFAULT_PROMOTION,
};

//! Chess rules core: positions, attacks, move generation and legality.
//!
//! The board is a pair of piece lists. Everything a half-move needs beyond
//! occupancy (castling rights, en-passant target) lives in [`Flags`], which
//! the caller threads from one call to the next.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Flags, Side, Square, DEFAULT_PROMOTION};
//!
//! let mut board = Board::standard();
//! let flags = Flags::initial();
//! assert_eq!(board.legal_moves(Side::White, &flags).count(), 20);
//!
//! let (e2, e4) = (Square::at(5, 2), Square::at(5, 4));
//! assert!(board.is_valid_move(Side::White, &flags, e2, e4));
//! board.make_move(Side::White, e2, e4, DEFAULT_PROMOTION).unwrap();
//! let flags = board.update_flags(Side::White, e2, e4, flags.castle);
//! assert_eq!(flags.en_passant, Some(Square::at(5, 3)));
//! assert!(!board.is_end(Side::Black, &flags));
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod display;
mod error;
mod fen;
mod flags;
mod legality;
mod make_move;
mod movegen;
mod position;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, FenError, MoveError, SquareError};
pub use movegen::Destinations;
pub use position::Position;
pub use state::{Board, Piece};
pub use types::{
    AppliedMove, CandidateMove, CastleRights, CheckStatus, Flags, Outcome, PieceKind, Side,
    Square, DEFAULT_PROMOTION, PROMOTION_KINDS,
};

pub mod board;

pub use board::{Board, CandidateMove, Flags, PieceKind, Position, Side, Square};

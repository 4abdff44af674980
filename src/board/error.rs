//! Error types for rules operations.

use std::fmt;

use super::{PieceKind, Side, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Placement does not have exactly eight ranks
    InvalidRankCount { found: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Rank describes fewer than eight files
    TooFewFiles { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::TooFewFiles { rank, files } => {
                write!(f, "Only {files} files in rank {rank}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File out of bounds (must be 1-8)
    FileOutOfBounds { file: u8 },
    /// Rank out of bounds (must be 1-8)
    RankOutOfBounds { rank: u8 },
    /// Invalid coordinate notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 1-8)")
            }
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 1-8)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move application failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The moving side has no piece on the origin square
    NoPieceAt { side: Side, square: Square },
    /// Pawns cannot promote to this kind
    InvalidPromotion { kind: PieceKind },
    /// Not a legal move in the position
    Illegal { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAt { side, square } => {
                write!(f, "{side} has no piece on {square}")
            }
            MoveError::InvalidPromotion { kind } => {
                write!(f, "Cannot promote to '{}'", kind.to_char())
            }
            MoveError::Illegal { from, to } => write!(f, "Illegal move {from}{to}"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for board precondition violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The side has no king, so check cannot be decided
    MissingKing { side: Side },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MissingKing { side } => write!(f, "{side} has no king on the board"),
        }
    }
}

impl std::error::Error for BoardError {}

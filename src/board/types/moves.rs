//! Candidate moves and the record of an applied move.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::square::Square;

/// A (from, to) pair. The promotion kind travels separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CandidateMove {
    pub from: Square,
    pub to: Square,
}

impl CandidateMove {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        CandidateMove { from, to }
    }
}

impl fmt::Display for CandidateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// What [`Board::make_move`](crate::board::Board::make_move) did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppliedMove {
    pub from: Square,
    pub to: Square,
    /// Kind of the piece that left `from`
    pub moved: PieceKind,
    /// Removed enemy piece and the square it stood on (differs from `to` en passant)
    pub captured: Option<(Square, PieceKind)>,
    /// Rook relocation when the king castled
    pub rook_castled: Option<(Square, Square)>,
    /// New kind of the pawn when it reached the last rank
    pub promoted: Option<PieceKind>,
}

impl AppliedMove {
    #[must_use]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.captured, Some((sq, _)) if sq != self.to)
    }

    #[must_use]
    pub fn is_castling(&self) -> bool {
        self.rook_castled.is_some()
    }
}

/// How a position without legal moves ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Checkmate { winner: super::piece::Side },
    Stalemate,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            Outcome::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Result of probing a side's king.
///
/// Keeps "no king on the board" apart from "king not attacked".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CheckStatus {
    Clear,
    Checked,
    NoKing,
}

impl CheckStatus {
    #[inline]
    #[must_use]
    pub const fn is_checked(self) -> bool {
        matches!(self, CheckStatus::Checked)
    }
}

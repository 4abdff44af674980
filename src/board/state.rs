#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{PieceKind, Side, Square};

/// A piece on the board. Its square changes in place when it moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub square: Square,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(square: Square, kind: PieceKind) -> Self {
        Piece { square, kind }
    }
}

/// Piece lists for both sides, indexed by [`Side::index`].
///
/// At most one piece may occupy a square across both lists. The board does
/// not police this; build positions through [`Board::standard`],
/// [`BoardBuilder`](super::BoardBuilder) or FEN.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) pieces: [Vec<Piece>; 2],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Board with no pieces
    #[must_use]
    pub fn empty() -> Self {
        Board {
            pieces: [Vec::new(), Vec::new()],
        }
    }

    /// The standard initial arrangement
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for side in Side::BOTH {
            let home = side.home_rank();
            let pawns = side.pawn_start_rank();
            for (file, kind) in (1..=8).zip(BACK_RANK) {
                board.put(side, Square::at(file, home), kind);
            }
            for file in 1..=8 {
                board.put(side, Square::at(file, pawns), PieceKind::Pawn);
            }
        }
        board
    }

    /// Pieces owned by `side`, in insertion order
    #[inline]
    #[must_use]
    pub fn pieces(&self, side: Side) -> &[Piece] {
        &self.pieces[side.index()]
    }

    /// Append a piece for `side`. Does not check whether the square is taken.
    pub fn put(&mut self, side: Side, square: Square, kind: PieceKind) {
        self.pieces[side.index()].push(Piece::new(square, kind));
    }

    /// Remove and return `side`'s piece on `square`, if any
    pub fn take(&mut self, side: Side, square: Square) -> Option<Piece> {
        let list = &mut self.pieces[side.index()];
        let idx = list.iter().position(|p| p.square == square)?;
        Some(list.remove(idx))
    }

    /// Kind of `side`'s piece on `square`; `None` means no such piece
    #[must_use]
    pub fn kind_at(&self, side: Side, square: Square) -> Option<PieceKind> {
        self.pieces(side)
            .iter()
            .find(|p| p.square == square)
            .map(|p| p.kind)
    }

    /// Owner and kind of whatever stands on `square`
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Side, PieceKind)> {
        Side::BOTH
            .into_iter()
            .find_map(|side| self.kind_at(side, square).map(|kind| (side, kind)))
    }

    #[inline]
    #[must_use]
    pub fn is_occupied_by(&self, side: Side, square: Square) -> bool {
        self.pieces(side).iter().any(|p| p.square == square)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        !Side::BOTH
            .into_iter()
            .any(|side| self.is_occupied_by(side, square))
    }

    /// True when every listed square is empty
    #[must_use]
    pub fn all_empty(&self, squares: &[Square]) -> bool {
        squares.iter().all(|&sq| self.is_empty(sq))
    }

    /// `side`'s king square; the first one found if the caller supplied several
    #[must_use]
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces(side)
            .iter()
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.square)
    }

    /// True if `side` has a piece of `kind` on `square`
    #[inline]
    #[must_use]
    pub fn has(&self, side: Side, square: Square, kind: PieceKind) -> bool {
        self.kind_at(side, square) == Some(kind)
    }
}

//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, PieceKind, Side, Square};
//!
//! let position = BoardBuilder::new()
//!     .piece(Square::at(5, 1), Side::White, PieceKind::King)
//!     .piece(Square::at(5, 8), Side::Black, PieceKind::King)
//!     .piece(Square::at(1, 2), Side::White, PieceKind::Pawn)
//!     .side_to_move(Side::White)
//!     .build_position();
//! assert_eq!(position.legal_moves().count(), 7);
//! ```

use super::{Board, CastleRights, Flags, PieceKind, Position, Side, Square};

/// A fluent builder for constructing [`Board`] and [`Position`] values.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Side, PieceKind)>,
    side_to_move: Side,
    castle: CastleRights,
    en_passant: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Side::White,
            castle: CastleRights::none(),
            en_passant: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::standard();
        let mut builder = Self::new();
        for side in Side::BOTH {
            for piece in board.pieces(side) {
                builder.pieces.push((piece.square, side, piece.kind));
            }
        }
        builder.castle = CastleRights::all();
        builder
    }

    /// Place a piece, replacing whatever stood on that square.
    #[must_use]
    pub fn piece(mut self, square: Square, side: Side, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, side, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, side: Side) -> Self {
        self.side_to_move = side;
        self
    }

    /// Set castling rights from a `CastleRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastleRights) -> Self {
        self.castle = rights;
        self
    }

    /// Enable kingside castling for a side.
    #[must_use]
    pub fn castle_kingside(mut self, side: Side) -> Self {
        self.castle.set(side, true);
        self
    }

    /// Enable queenside castling for a side.
    #[must_use]
    pub fn castle_queenside(mut self, side: Side) -> Self {
        self.castle.set(side, false);
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant = Some(target);
        self
    }

    /// Build just the board, pieces in the order they were placed.
    #[must_use]
    pub fn build(&self) -> Board {
        let mut board = Board::empty();
        for &(square, side, kind) in &self.pieces {
            board.put(side, square, kind);
        }
        board
    }

    /// Build the board together with side to move and flags.
    #[must_use]
    pub fn build_position(&self) -> Position {
        Position::new(
            self.build(),
            self.side_to_move,
            Flags {
                castle: self.castle,
                en_passant: self.en_passant,
            },
        )
    }
}

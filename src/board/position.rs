//! A board together with the side to move and its flags.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    Board, CandidateMove, Flags, MoveError, Outcome, PieceKind, Side, Square, DEFAULT_PROMOTION,
    PROMOTION_KINDS,
};

/// Everything needed to ask for the next half-move.
///
/// Plain value: [`Position::play`] returns the successor and leaves `self`
/// alone.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub board: Board,
    pub side: Side,
    pub flags: Flags,
}

impl Default for Position {
    fn default() -> Self {
        Position::standard()
    }
}

impl Position {
    #[must_use]
    pub const fn new(board: Board, side: Side, flags: Flags) -> Self {
        Position { board, side, flags }
    }

    /// Standard start: White to move, all castling rights
    #[must_use]
    pub fn standard() -> Self {
        Position::new(Board::standard(), Side::White, Flags::initial())
    }

    pub fn legal_moves(&self) -> impl Iterator<Item = CandidateMove> + '_ {
        self.board.legal_moves(self.side, &self.flags)
    }

    #[must_use]
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.board.is_valid_move(self.side, &self.flags, from, to)
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.board.outcome(self.side, &self.flags)
    }

    /// Validate and play one half-move: apply it to a copy, refresh the
    /// flags and hand the turn over.
    ///
    /// # Errors
    /// [`MoveError::Illegal`] if the move is not legal here, or whatever
    /// [`Board::make_move`] reports.
    pub fn play(
        &self,
        from: Square,
        to: Square,
        promotion: PieceKind,
    ) -> Result<Position, MoveError> {
        if !self.is_legal(from, to) {
            return Err(MoveError::Illegal { from, to });
        }
        self.advance(from, to, promotion)
    }

    fn advance(
        &self,
        from: Square,
        to: Square,
        promotion: PieceKind,
    ) -> Result<Position, MoveError> {
        let mut board = self.board.clone();
        board.make_move(self.side, from, to, promotion)?;
        let flags = board.update_flags(self.side, from, to, self.flags.castle);
        Ok(Position::new(board, self.side.flip(), flags))
    }

    /// Promotion choices that lead to distinct positions for this move
    fn promotion_choices(&self, mv: CandidateMove) -> &'static [PieceKind] {
        let promotes = self.board.kind_at(self.side, mv.from) == Some(PieceKind::Pawn)
            && mv.to.rank() == self.side.promotion_rank();
        if promotes {
            &PROMOTION_KINDS
        } else {
            &[DEFAULT_PROMOTION]
        }
    }

    /// Count leaf nodes of the legal move tree `depth` plies deep.
    ///
    /// A pawn move onto the last rank counts once per promotion kind, so the
    /// totals line up with published perft tables.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut nodes = 0;
        for mv in self.legal_moves() {
            for &promotion in self.promotion_choices(mv) {
                if depth == 1 {
                    nodes += 1;
                } else if let Ok(next) = self.advance(mv.from, mv.to, promotion) {
                    nodes += next.perft(depth - 1);
                }
            }
        }
        nodes
    }
}

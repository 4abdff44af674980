//! Legal move filtering and terminal detection.
//!
//! Legality is decided by playing the move on a private copy of the board
//! and asking whether the mover's king is attacked afterwards.

use super::{
    Board, CandidateMove, CheckStatus, Flags, Outcome, Piece, Side, Square, DEFAULT_PROMOTION,
};

impl Board {
    /// True if `side` moving `from` -> `to` leaves its own king unattacked.
    ///
    /// Works on a clone; `self` is never touched. Returns false when `side`
    /// has no piece on `from`. A side without a king is never in check, so
    /// for such boards every applicable move passes.
    #[must_use]
    pub fn move_test(&self, side: Side, from: Square, to: Square) -> bool {
        match self.with_move(side, from, to, DEFAULT_PROMOTION) {
            Ok(trial) => trial.check_status(side) != CheckStatus::Checked,
            Err(_) => false,
        }
    }

    /// Every legal (from, to) pair for `side`, produced lazily.
    ///
    /// Pieces are visited in list order; stopping after the first item only
    /// pays for the candidates examined so far.
    pub fn legal_moves<'a>(
        &'a self,
        side: Side,
        flags: &Flags,
    ) -> impl Iterator<Item = CandidateMove> + 'a {
        let flags = *flags;
        self.pieces(side).iter().flat_map(move |piece| {
            let from = piece.square;
            self.pseudo_moves(side, piece, &flags)
                .filter(move |&to| !self.is_occupied_by(side, to))
                .filter(move |&to| self.move_test(side, from, to))
                .map(move |to| CandidateMove::new(from, to))
        })
    }

    /// Point query: is `from` -> `to` a legal move for `side`?
    #[must_use]
    pub fn is_valid_move(&self, side: Side, flags: &Flags, from: Square, to: Square) -> bool {
        let Some(kind) = self.kind_at(side, from) else {
            return false;
        };
        if self.is_occupied_by(side, to) {
            return false;
        }
        let piece = Piece::new(from, kind);
        self.pseudo_moves(side, &piece, flags).any(|sq| sq == to)
            && self.move_test(side, from, to)
    }

    /// True when `side` has no legal move. Stops at the first one found.
    #[must_use]
    pub fn is_end(&self, side: Side, flags: &Flags) -> bool {
        self.legal_moves(side, flags).next().is_none()
    }

    /// Checkmate or stalemate for `side` to move, `None` while the game goes on.
    #[must_use]
    pub fn outcome(&self, side: Side, flags: &Flags) -> Option<Outcome> {
        if !self.is_end(side, flags) {
            return None;
        }
        Some(if self.check_status(side).is_checked() {
            Outcome::Checkmate {
                winner: side.flip(),
            }
        } else {
            Outcome::Stalemate
        })
    }

    #[must_use]
    pub fn is_checkmate(&self, side: Side, flags: &Flags) -> bool {
        matches!(self.outcome(side, flags), Some(Outcome::Checkmate { .. }))
    }

    #[must_use]
    pub fn is_stalemate(&self, side: Side, flags: &Flags) -> bool {
        self.outcome(side, flags) == Some(Outcome::Stalemate)
    }
}

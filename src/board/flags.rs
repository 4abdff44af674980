use super::{Board, CastleRights, Flags, PieceKind, Side, Square};

impl Board {
    /// Flags for the position after `side` moved `from` -> `to` on this board.
    ///
    /// Call once after every applied move, passing the rights that held
    /// before it. A castling right survives only while its king and rook
    /// still stand on their home squares; rights are never restored. The
    /// en-passant target is the square a pawn just skipped with a double
    /// step, and is cleared by any other move.
    #[must_use]
    pub fn update_flags(
        &self,
        side: Side,
        from: Square,
        to: Square,
        castle: CastleRights,
    ) -> Flags {
        let mut castle = castle;
        for owner in Side::BOTH {
            let home = owner.home_rank();
            let king_home = self.has(owner, Square::at(5, home), PieceKind::King);
            for (kingside, corner) in [(true, 8), (false, 1)] {
                let rook_home = self.has(owner, Square::at(corner, home), PieceKind::Rook);
                if castle.has(owner, kingside) && !(king_home && rook_home) {
                    castle.remove(owner, kingside);
                    #[cfg(feature = "logging")]
                    log::debug!(
                        "{owner} loses {} castling",
                        if kingside { "kingside" } else { "queenside" }
                    );
                }
            }
        }

        let en_passant = match self.kind_at(side, to) {
            Some(PieceKind::Pawn) if from.rank().abs_diff(to.rank()) == 2 => {
                Square::new(to.file(), (from.rank() + to.rank()) / 2)
            }
            _ => None,
        };

        Flags { castle, en_passant }
    }
}

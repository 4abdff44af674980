use super::{AppliedMove, Board, MoveError, PieceKind, Side, Square};

impl Board {
    /// Apply a move for `side` in place. Does not check legality.
    ///
    /// Handles ordinary capture, the rook half of castling (a king stepping
    /// two files), promotion to `promotion` on the last rank, and en-passant
    /// capture. Use [`Board::with_move`] to keep the original intact.
    ///
    /// # Errors
    /// [`MoveError::NoPieceAt`] if `side` has nothing on `from`;
    /// [`MoveError::InvalidPromotion`] if the pawn promotes to a pawn or king.
    /// The board is untouched in both cases.
    pub fn make_move(
        &mut self,
        side: Side,
        from: Square,
        to: Square,
        promotion: PieceKind,
    ) -> Result<AppliedMove, MoveError> {
        let moved = self
            .kind_at(side, from)
            .ok_or(MoveError::NoPieceAt { side, square: from })?;
        let enemy = side.flip();
        let is_pawn = moved == PieceKind::Pawn;
        let promotes = is_pawn && to.rank() == side.promotion_rank();
        if promotes && !promotion.is_promotion_target() {
            return Err(MoveError::InvalidPromotion { kind: promotion });
        }
        let en_passant = is_pawn
            && from.rank() == side.en_passant_rank()
            && from.file() != to.file()
            && self.is_empty(to);

        let mut captured = self.take(enemy, to).map(|piece| (to, piece.kind));

        if let Some(piece) = self.pieces[side.index()]
            .iter_mut()
            .find(|p| p.square == from)
        {
            piece.square = to;
        }

        let mut rook_castled = None;
        if moved == PieceKind::King && from.file().abs_diff(to.file()) == 2 {
            rook_castled = self.castle_rook(side, from, to);
        }

        let mut promoted = None;
        if promotes {
            self.take(side, to);
            self.put(side, to, promotion);
            promoted = Some(promotion);
        }

        if en_passant {
            if let Some(victim) = to.offset(0, -side.pawn_direction()) {
                if self.has(enemy, victim, PieceKind::Pawn) {
                    self.take(enemy, victim);
                    captured = Some((victim, PieceKind::Pawn));
                }
            }
        }

        #[cfg(feature = "logging")]
        log::trace!(
            "{side} {} {from}{to} captured={captured:?} castled={rook_castled:?} promoted={promoted:?}",
            moved.to_char()
        );

        Ok(AppliedMove {
            from,
            to,
            moved,
            captured,
            rook_castled,
            promoted,
        })
    }

    /// Copy of the board with the move applied; `self` is left as it was.
    pub fn with_move(
        &self,
        side: Side,
        from: Square,
        to: Square,
        promotion: PieceKind,
    ) -> Result<Board, MoveError> {
        let mut next = self.clone();
        next.make_move(side, from, to, promotion)?;
        Ok(next)
    }

    /// Move the rook on the corner the king headed toward to the square the
    /// king just crossed.
    fn castle_rook(&mut self, side: Side, from: Square, to: Square) -> Option<(Square, Square)> {
        let (corner, step) = if to.file() > from.file() { (8, -1) } else { (1, 1) };
        let rook_from = Square::new(corner, from.rank())?;
        let rook_to = to.offset(step, 0)?;
        let rook = self.pieces[side.index()]
            .iter_mut()
            .find(|p| p.square == rook_from && p.kind == PieceKind::Rook)?;
        rook.square = rook_to;
        Some((rook_from, rook_to))
    }
}

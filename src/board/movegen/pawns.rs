use super::super::{Board, Side, Square};

/// The two forward diagonals, whatever stands on them.
pub(super) fn attacks(side: Side, from: Square) -> [Option<Square>; 2] {
    let dir = side.pawn_direction();
    [from.offset(1, dir), from.offset(-1, dir)]
}

impl Board {
    /// Single and double pushes onto empty squares, plus diagonal steps onto
    /// an enemy piece or the en-passant target.
    pub(crate) fn pawn_moves(
        &self,
        side: Side,
        from: Square,
        en_passant: Option<Square>,
    ) -> [Option<Square>; 4] {
        let dir = side.pawn_direction();
        let mut moves = [None; 4];

        if let Some(one) = from.offset(0, dir).filter(|&sq| self.is_empty(sq)) {
            moves[0] = Some(one);
            if from.rank() == side.pawn_start_rank() {
                moves[1] = one.offset(0, dir).filter(|&sq| self.is_empty(sq));
            }
        }

        let enemy = side.flip();
        for (slot, target) in attacks(side, from).into_iter().enumerate() {
            moves[2 + slot] = target
                .filter(|&sq| self.is_occupied_by(enemy, sq) || en_passant == Some(sq));
        }

        moves
    }
}

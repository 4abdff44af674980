use super::{Board, BoardError, CheckStatus, Side, Square};

impl Board {
    /// True if any piece of `side`'s opponent attacks `square`.
    pub fn is_attacked(&self, side: Side, square: Square) -> bool {
        let enemy = side.flip();
        self.pieces(enemy)
            .iter()
            .any(|piece| self.attack_squares(enemy, piece).any(|sq| sq == square))
    }

    /// Whether `side`'s king is attacked, or [`CheckStatus::NoKing`] if it has none.
    #[must_use]
    pub fn check_status(&self, side: Side) -> CheckStatus {
        match self.king_square(side) {
            Some(king) if self.is_attacked(side, king) => CheckStatus::Checked,
            Some(_) => CheckStatus::Clear,
            None => CheckStatus::NoKing,
        }
    }

    /// Whether `side`'s king is in check; errors when there is no king to ask about.
    pub fn is_checked(&self, side: Side) -> Result<bool, BoardError> {
        match self.check_status(side) {
            CheckStatus::Checked => Ok(true),
            CheckStatus::Clear => Ok(false),
            CheckStatus::NoKing => Err(BoardError::MissingKing { side }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, PieceKind};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_pawn_attacks_diagonally_forward_only() {
        let board = BoardBuilder::new()
            .piece(sq("d5"), Side::Black, PieceKind::Pawn)
            .build();
        assert!(board.is_attacked(Side::White, sq("c4")));
        assert!(board.is_attacked(Side::White, sq("e4")));
        assert!(!board.is_attacked(Side::White, sq("d4")));
        assert!(!board.is_attacked(Side::White, sq("c6")));
    }

    #[test]
    fn test_slider_attack_blocked() {
        let board = BoardBuilder::new()
            .piece(sq("a1"), Side::Black, PieceKind::Rook)
            .piece(sq("a4"), Side::White, PieceKind::Pawn)
            .build();
        assert!(board.is_attacked(Side::White, sq("a4")));
        assert!(!board.is_attacked(Side::White, sq("a5")));
        assert!(board.is_attacked(Side::White, sq("h1")));
    }

    #[test]
    fn test_own_pieces_do_not_attack() {
        let board = BoardBuilder::new()
            .piece(sq("d1"), Side::White, PieceKind::Queen)
            .build();
        assert!(!board.is_attacked(Side::White, sq("d8")));
        assert!(board.is_attacked(Side::Black, sq("d8")));
    }

    #[test]
    fn test_check_status_three_states() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Side::White, PieceKind::King)
            .piece(sq("e8"), Side::Black, PieceKind::Rook)
            .build();
        assert_eq!(board.check_status(Side::White), CheckStatus::Checked);
        assert_eq!(board.check_status(Side::Black), CheckStatus::NoKing);
        assert_eq!(board.is_checked(Side::White), Ok(true));
        assert_eq!(
            board.is_checked(Side::Black),
            Err(BoardError::MissingKing { side: Side::Black })
        );
    }

    #[test]
    fn test_start_position_nobody_in_check() {
        let board = Board::standard();
        assert_eq!(board.check_status(Side::White), CheckStatus::Clear);
        assert_eq!(board.is_checked(Side::Black), Ok(false));
    }
}

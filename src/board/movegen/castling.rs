use std::array;

use super::super::{Board, CastleRights, PieceKind, Side, Square};

/// Castling destinations for a king, computed on the first `next()`.
pub(crate) struct Castles<'a> {
    board: &'a Board,
    side: Side,
    from: Square,
    rights: CastleRights,
    targets: Option<array::IntoIter<Option<Square>, 2>>,
}

impl<'a> Castles<'a> {
    pub(crate) fn new(board: &'a Board, side: Side, from: Square, rights: CastleRights) -> Self {
        Castles {
            board,
            side,
            from,
            rights,
            targets: None,
        }
    }
}

impl Iterator for Castles<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let (board, side, from, rights) = (self.board, self.side, self.from, self.rights);
        self.targets
            .get_or_insert_with(|| board.castle_targets(side, from, rights).into_iter())
            .flatten()
            .next()
    }
}

impl Board {
    /// Kingside and queenside castling destinations available to `side`'s
    /// king on `from`.
    ///
    /// Each needs its right set, the rook on its corner, every square between
    /// king and rook empty, the king out of check, and the squares the king
    /// crosses (destination included) unattacked.
    pub(crate) fn castle_targets(
        &self,
        side: Side,
        from: Square,
        rights: CastleRights,
    ) -> [Option<Square>; 2] {
        let home = side.home_rank();
        let wants_kingside = rights.has(side, true);
        let wants_queenside = rights.has(side, false);
        if from != Square::at(5, home) || !(wants_kingside || wants_queenside) {
            return [None, None];
        }
        if self.check_status(side).is_checked() {
            return [None, None];
        }

        let at = |file| Square::at(file, home);
        let safe = |squares: &[Square]| squares.iter().all(|&sq| !self.is_attacked(side, sq));
        let rook_home = |file| self.has(side, at(file), PieceKind::Rook);

        let kingside = (wants_kingside
            && rook_home(8)
            && self.all_empty(&[at(6), at(7)])
            && safe(&[at(6), at(7)]))
        .then(|| at(7));
        let queenside = (wants_queenside
            && rook_home(1)
            && self.all_empty(&[at(2), at(3), at(4)])
            && safe(&[at(4), at(3)]))
        .then(|| at(3));

        [kingside, queenside]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn castle_board() -> BoardBuilder {
        BoardBuilder::new()
            .piece(sq("e1"), Side::White, PieceKind::King)
            .piece(sq("a1"), Side::White, PieceKind::Rook)
            .piece(sq("h1"), Side::White, PieceKind::Rook)
            .piece(sq("e8"), Side::Black, PieceKind::King)
    }

    #[test]
    fn test_both_sides_open() {
        let board = castle_board().build();
        let got = board.castle_targets(Side::White, sq("e1"), CastleRights::all());
        assert_eq!(got, [Some(sq("g1")), Some(sq("c1"))]);
    }

    #[test]
    fn test_rights_gate_each_wing() {
        let board = castle_board().build();
        let mut rights = CastleRights::none();
        rights.set(Side::White, false);
        let got = board.castle_targets(Side::White, sq("e1"), rights);
        assert_eq!(got, [None, Some(sq("c1"))]);
    }

    #[test]
    fn test_queenside_needs_b_file_empty() {
        let board = castle_board()
            .piece(sq("b1"), Side::White, PieceKind::Knight)
            .build();
        let got = board.castle_targets(Side::White, sq("e1"), CastleRights::all());
        assert_eq!(got, [Some(sq("g1")), None]);
    }

    #[test]
    fn test_attacked_b_file_does_not_block_queenside() {
        let board = castle_board()
            .piece(sq("b8"), Side::Black, PieceKind::Rook)
            .build();
        let got = board.castle_targets(Side::White, sq("e1"), CastleRights::all());
        assert_eq!(got, [Some(sq("g1")), Some(sq("c1"))]);
    }

    #[test]
    fn test_attacked_crossing_square_blocks() {
        let board = castle_board()
            .piece(sq("f8"), Side::Black, PieceKind::Rook)
            .build();
        let got = board.castle_targets(Side::White, sq("e1"), CastleRights::all());
        assert_eq!(got, [None, Some(sq("c1"))]);
    }

    #[test]
    fn test_attacked_destination_blocks() {
        let board = castle_board()
            .piece(sq("c8"), Side::Black, PieceKind::Rook)
            .build();
        let got = board.castle_targets(Side::White, sq("e1"), CastleRights::all());
        assert_eq!(got, [Some(sq("g1")), None]);
    }

    #[test]
    fn test_no_castling_out_of_check() {
        let board = castle_board()
            .piece(sq("e5"), Side::Black, PieceKind::Rook)
            .build();
        let got = board.castle_targets(Side::White, sq("e1"), CastleRights::all());
        assert_eq!(got, [None, None]);
    }

    #[test]
    fn test_black_uses_eighth_rank() {
        let board = BoardBuilder::new()
            .piece(sq("e8"), Side::Black, PieceKind::King)
            .piece(sq("h8"), Side::Black, PieceKind::Rook)
            .piece(sq("e1"), Side::White, PieceKind::King)
            .build();
        let got = board.castle_targets(Side::Black, sq("e8"), CastleRights::all());
        assert_eq!(got, [Some(sq("g8")), None]);
    }
}

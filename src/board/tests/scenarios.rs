//! Whole-position walkthroughs of the rules.

use super::sq;
use crate::board::{
    Board, BoardBuilder, CandidateMove, CastleRights, Flags, Piece, PieceKind, Position, Side,
    DEFAULT_PROMOTION,
};

#[test]
fn test_start_position_has_twenty_moves() {
    let board = Board::standard();
    let flags = Flags::initial();
    let moves: Vec<CandidateMove> = board.legal_moves(Side::White, &flags).collect();
    assert_eq!(moves.len(), 20);

    let pawn_moves = moves
        .iter()
        .filter(|mv| board.kind_at(Side::White, mv.from) == Some(PieceKind::Pawn))
        .count();
    let knight_moves = moves
        .iter()
        .filter(|mv| board.kind_at(Side::White, mv.from) == Some(PieceKind::Knight))
        .count();
    assert_eq!(pawn_moves, 16);
    assert_eq!(knight_moves, 4);

    assert_eq!(board.legal_moves(Side::Black, &flags).count(), 20);
    assert!(!board.is_end(Side::White, &flags));
}

#[test]
fn test_en_passant_after_double_push() {
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Side::White, PieceKind::King)
        .piece(sq("e8"), Side::Black, PieceKind::King)
        .piece(sq("e5"), Side::White, PieceKind::Pawn)
        .piece(sq("d7"), Side::Black, PieceKind::Pawn)
        .build();

    board
        .make_move(Side::Black, sq("d7"), sq("d5"), DEFAULT_PROMOTION)
        .unwrap();
    let flags = board.update_flags(Side::Black, sq("d7"), sq("d5"), CastleRights::none());
    assert_eq!(flags.en_passant, Some(sq("d6")));

    let pawn = Piece::new(sq("e5"), PieceKind::Pawn);
    let targets: Vec<_> = board.pseudo_moves(Side::White, &pawn, &flags).collect();
    assert!(targets.contains(&sq("d6")));
    assert!(board.is_valid_move(Side::White, &flags, sq("e5"), sq("d6")));

    let applied = board
        .make_move(Side::White, sq("e5"), sq("d6"), DEFAULT_PROMOTION)
        .unwrap();
    assert!(applied.is_en_passant());
    assert_eq!(applied.captured, Some((sq("d5"), PieceKind::Pawn)));
    assert!(board.is_empty(sq("d5")));
    assert!(board.is_empty(sq("e5")));
    assert!(board.has(Side::White, sq("d6"), PieceKind::Pawn));
    assert_eq!(board.pieces(Side::Black).len(), 1);
}

#[test]
fn test_castling_both_wings() {
    let position = Position::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
    let king = Piece::new(sq("e1"), PieceKind::King);
    let targets: Vec<_> = position
        .board
        .pseudo_moves(Side::White, &king, &position.flags)
        .collect();
    assert!(targets.contains(&sq("g1")));
    assert!(targets.contains(&sq("c1")));

    let short = position.play(sq("e1"), sq("g1"), DEFAULT_PROMOTION).unwrap();
    assert!(short.board.has(Side::White, sq("g1"), PieceKind::King));
    assert!(short.board.has(Side::White, sq("f1"), PieceKind::Rook));
    assert!(short.board.is_empty(sq("h1")));
    assert_eq!(short.flags.castle.as_array(), [false, false, true, true]);

    let long = position.play(sq("e1"), sq("c1"), DEFAULT_PROMOTION).unwrap();
    assert!(long.board.has(Side::White, sq("c1"), PieceKind::King));
    assert!(long.board.has(Side::White, sq("d1"), PieceKind::Rook));
    assert!(long.board.is_empty(sq("a1")));
    assert_eq!(long.flags.castle.as_array(), [false, false, true, true]);

    let black = long.play(sq("e8"), sq("g8"), DEFAULT_PROMOTION).unwrap();
    assert!(black.board.has(Side::Black, sq("g8"), PieceKind::King));
    assert!(black.board.has(Side::Black, sq("f8"), PieceKind::Rook));
    assert_eq!(black.flags.castle, CastleRights::none());
}

#[test]
fn test_single_evasion() {
    // Rook on a1 checks along the first rank; only Bf1 interposes.
    let position = BoardBuilder::new()
        .piece(sq("h1"), Side::White, PieceKind::King)
        .piece(sq("g2"), Side::White, PieceKind::Pawn)
        .piece(sq("h2"), Side::White, PieceKind::Pawn)
        .piece(sq("c4"), Side::White, PieceKind::Bishop)
        .piece(sq("a1"), Side::Black, PieceKind::Rook)
        .piece(sq("a8"), Side::Black, PieceKind::King)
        .side_to_move(Side::White)
        .build_position();

    assert_eq!(position.board.is_checked(Side::White), Ok(true));
    let moves: Vec<_> = position.legal_moves().collect();
    assert_eq!(moves, vec![CandidateMove::new(sq("c4"), sq("f1"))]);
    assert_eq!(position.outcome(), None);

    let after = position.play(sq("c4"), sq("f1"), DEFAULT_PROMOTION).unwrap();
    assert_eq!(after.board.is_checked(Side::White), Ok(false));
}

use std::env;
use std::process::ExitCode;

use chess_rules::board::Position;

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("usage: legal_moves [<fen>]");
        return ExitCode::SUCCESS;
    }

    let position = if args.is_empty() {
        Position::standard()
    } else {
        match Position::try_from_fen(&args.join(" ")) {
            Ok(position) => position,
            Err(err) => {
                eprintln!("legal_moves: {err}");
                return ExitCode::FAILURE;
            }
        }
    };

    let legal_moves: Vec<_> = position.legal_moves().collect();
    let flags = &position.flags;
    println!("side_to_move: {}", position.side);
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", position.board.is_checkmate(position.side, flags));
    println!("stalemate: {}", position.board.is_stalemate(position.side, flags));
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}

use super::error::FenError;
use super::{Board, CastleRights, Flags, PieceKind, Position, Side, Square};

impl Position {
    /// Parse a position from FEN.
    ///
    /// Reads placement, side to move, castling and en-passant fields; the
    /// move clocks, if present, are ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut board = Board::empty();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 8 - rank_idx as u8;
            let mut file: usize = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    if file > 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank as usize,
                            files: file,
                        });
                    }
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank as usize,
                        files: file + 1,
                    });
                }
                let side = if c.is_ascii_uppercase() {
                    Side::White
                } else {
                    Side::Black
                };
                board.put(side, Square::at(file as u8 + 1, rank), kind);
                file += 1;
            }
            if file < 8 {
                return Err(FenError::TooFewFiles {
                    rank: rank as usize,
                    files: file,
                });
            }
        }

        let side = match parts[1] {
            "w" => Side::White,
            "b" => Side::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castle = CastleRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => castle.set(Side::White, true),
                'Q' => castle.set(Side::White, false),
                'k' => castle.set(Side::Black, true),
                'q' => castle.set(Side::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            other => Some(other.parse::<Square>().map_err(|_| {
                FenError::InvalidEnPassant {
                    found: other.to_string(),
                }
            })?),
        };

        Ok(Position::new(board, side, Flags { castle, en_passant }))
    }

    /// Parse a position from FEN.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// FEN for this position; move clocks are written as "0 1".
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (1..=8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 1..=8 {
                match self.board.piece_at(Square::at(file, rank)) {
                    Some((side, kind)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(kind.to_fen_char(side));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side {
            Side::White => "w",
            Side::Black => "b",
        };

        let mut castling = String::new();
        for (side, kingside, c) in [
            (Side::White, true, 'K'),
            (Side::White, false, 'Q'),
            (Side::Black, true, 'k'),
            (Side::Black, false, 'q'),
        ] {
            if self.flags.castle.has(side, kingside) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .flags
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {} {} {} 0 1", rows.join("/"), active, castling, ep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_start_fen_matches_standard() {
        let pos = Position::from_fen(START);
        let standard = Position::standard();
        assert_eq!(pos.side, standard.side);
        assert_eq!(pos.flags, standard.flags);
        for sq in Square::all() {
            assert_eq!(pos.board.piece_at(sq), standard.board.piece_at(sq));
        }
        assert_eq!(standard.to_fen(), START);
    }

    #[test]
    fn test_en_passant_and_rights_parsed() {
        let pos = Position::from_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w Kq d6 0 1");
        assert_eq!(pos.flags.en_passant, Some(Square::at(4, 6)));
        assert_eq!(pos.flags.castle.as_array(), [true, false, false, true]);
        assert_eq!(pos.to_fen(), "r3k2r/8/8/3pP3/8/8/8/R3K2R w Kq d6 0 1");
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            Position::try_from_fen("8/8 w"),
            Err(FenError::TooFewParts { found: 2 })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8 w - -"),
            Err(FenError::InvalidRankCount { found: 3 })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8/7x w - -"),
            Err(FenError::InvalidPiece { char: 'x' })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8/8 x - -"),
            Err(FenError::InvalidSideToMove {
                found: "x".to_string()
            })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8/8 w Z -"),
            Err(FenError::InvalidCastling { char: 'Z' })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8/8 w - j9"),
            Err(FenError::InvalidEnPassant {
                found: "j9".to_string()
            })
        );
        assert!(matches!(
            Position::try_from_fen("8/8/8/8/8/8/8/9 w - -"),
            Err(FenError::TooManyFiles { .. })
        ));
        assert_eq!(
            Position::try_from_fen("7/8/8/8/8/8/8/8 w - -"),
            Err(FenError::TooFewFiles { rank: 8, files: 7 })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8/8p w - -"),
            Err(FenError::TooManyFiles { rank: 1, files: 9 })
        );
    }

    #[test]
    fn test_long_digit_run_is_rejected() {
        let rank = format!("{}3p", "9".repeat(28));
        let fen = format!("{rank}/8/8/8/8/8/8/8 w - -");
        assert_eq!(
            Position::try_from_fen(&fen),
            Err(FenError::TooManyFiles { rank: 8, files: 9 })
        );
    }
}

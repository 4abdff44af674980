use std::fmt;

use super::{Board, Square};

impl fmt::Display for Board {
    /// Rank 8 at the top, White in uppercase, empty squares as '.'
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in (1..=8).rev() {
            write!(f, "{rank} |")?;
            for file in 1..=8 {
                let ch = self
                    .piece_at(Square::at(file, rank))
                    .map_or('.', |(side, kind)| kind.to_fen_char(side));
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}

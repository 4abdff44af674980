use super::super::{Board, Square};

/// Walks each direction in turn, stopping a ray after its first occupied square.
pub(crate) struct Rays<'a> {
    board: &'a Board,
    origin: Square,
    directions: &'static [(i8, i8)],
    dir: usize,
    cursor: Option<Square>,
}

impl<'a> Rays<'a> {
    pub(crate) fn new(board: &'a Board, origin: Square, directions: &'static [(i8, i8)]) -> Self {
        Rays {
            board,
            origin,
            directions,
            dir: 0,
            cursor: None,
        }
    }

    fn next_ray(&mut self) {
        self.dir += 1;
        self.cursor = None;
    }
}

impl Iterator for Rays<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        while let Some(&(df, dr)) = self.directions.get(self.dir) {
            let base = self.cursor.unwrap_or(self.origin);
            match base.offset(df, dr) {
                Some(sq) => {
                    if self.board.is_empty(sq) {
                        self.cursor = Some(sq);
                    } else {
                        self.next_ray();
                    }
                    return Some(sq);
                }
                None => self.next_ray(),
            }
        }
        None
    }
}

//! Pseudo-legal destination generation.
//!
//! Two entry points exist per piece:
//! - [`Board::attack_squares`] never considers castling and never asks
//!   whether anybody is in check, so attack detection can call it freely.
//! - [`Board::pseudo_moves`] is the full generator: pawn pushes, en-passant
//!   captures and castling, parameterized by the current [`Flags`].
//!
//! Both yield squares lazily and leave friendly-occupied destinations in;
//! filtering those out is the legality layer's job.

mod castling;
mod leapers;
mod pawns;
mod sliders;

use std::array;
use std::iter::{Chain, Copied, Flatten};
use std::slice;

use super::attack_tables::{ALL_DIRECTIONS, DIAGONALS, ORTHOGONALS};
use super::{Board, Flags, Piece, PieceKind, Side, Square};

pub(crate) use castling::Castles;
pub(crate) use sliders::Rays;

type Leaps = Copied<slice::Iter<'static, Square>>;

/// Lazy, finite sequence of destination squares for one piece.
pub struct Destinations<'a>(Inner<'a>);

enum Inner<'a> {
    PawnMoves(Flatten<array::IntoIter<Option<Square>, 4>>),
    PawnAttacks(Flatten<array::IntoIter<Option<Square>, 2>>),
    Leaper(Leaps),
    Slider(Rays<'a>),
    King(Chain<Leaps, Castles<'a>>),
}

impl Iterator for Destinations<'_> {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        match &mut self.0 {
            Inner::PawnMoves(it) => it.next(),
            Inner::PawnAttacks(it) => it.next(),
            Inner::Leaper(it) => it.next(),
            Inner::Slider(it) => it.next(),
            Inner::King(it) => it.next(),
        }
    }
}

impl Board {
    /// Squares `piece` (owned by `side`) attacks, ignoring castling.
    ///
    /// Pawns attack their two forward diagonals whether or not anything
    /// stands there; sliders include the first blocker on each ray.
    pub fn attack_squares(&self, side: Side, piece: &Piece) -> Destinations<'_> {
        let from = piece.square;
        Destinations(match piece.kind {
            PieceKind::Pawn => Inner::PawnAttacks(pawns::attacks(side, from).into_iter().flatten()),
            PieceKind::Knight => Inner::Leaper(leapers::knight(from)),
            PieceKind::King => Inner::Leaper(leapers::king(from)),
            slider => self.slider(from, slider),
        })
    }

    /// Pseudo-legal destinations of `piece`, including en passant and castling.
    pub fn pseudo_moves(&self, side: Side, piece: &Piece, flags: &Flags) -> Destinations<'_> {
        let from = piece.square;
        Destinations(match piece.kind {
            PieceKind::Pawn => Inner::PawnMoves(
                self.pawn_moves(side, from, flags.en_passant)
                    .into_iter()
                    .flatten(),
            ),
            PieceKind::Knight => Inner::Leaper(leapers::knight(from)),
            PieceKind::King => Inner::King(
                leapers::king(from).chain(Castles::new(self, side, from, flags.castle)),
            ),
            slider => self.slider(from, slider),
        })
    }

    fn slider(&self, from: Square, kind: PieceKind) -> Inner<'_> {
        let directions: &'static [(i8, i8)] = match kind {
            PieceKind::Bishop => &DIAGONALS,
            PieceKind::Rook => &ORTHOGONALS,
            _ => &ALL_DIRECTIONS,
        };
        Inner::Slider(Rays::new(self, from, directions))
    }
}

use super::super::attack_tables::{KING_TARGETS, KNIGHT_TARGETS};
use super::super::Square;
use super::Leaps;

#[inline]
pub(super) fn knight(from: Square) -> Leaps {
    KNIGHT_TARGETS[from.index()].iter().copied()
}

#[inline]
pub(super) fn king(from: Square) -> Leaps {
    KING_TARGETS[from.index()].iter().copied()
}

//! Castling rights and the per-move flag bundle.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Side;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Castling rights represented as a bitmask.
///
/// Array order is White kingside, White queenside, Black kingside,
/// Black queenside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastleRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastleRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, side: Side, kingside: bool) -> bool {
        self.0 & Self::bit_for(side, kingside) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, side: Side, kingside: bool) {
        self.0 |= Self::bit_for(side, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, side: Side, kingside: bool) {
        self.0 &= !Self::bit_for(side, kingside);
    }

    /// Rights as four booleans in flag order
    #[must_use]
    pub const fn as_array(self) -> [bool; 4] {
        [
            self.0 & CASTLE_WHITE_K != 0,
            self.0 & CASTLE_WHITE_Q != 0,
            self.0 & CASTLE_BLACK_K != 0,
            self.0 & CASTLE_BLACK_Q != 0,
        ]
    }

    /// Build from four booleans in flag order
    #[must_use]
    pub const fn from_array(rights: [bool; 4]) -> Self {
        let mut bits = 0;
        if rights[0] {
            bits |= CASTLE_WHITE_K;
        }
        if rights[1] {
            bits |= CASTLE_WHITE_Q;
        }
        if rights[2] {
            bits |= CASTLE_BLACK_K;
        }
        if rights[3] {
            bits |= CASTLE_BLACK_Q;
        }
        CastleRights(bits)
    }

    #[inline]
    const fn bit_for(side: Side, kingside: bool) -> u8 {
        match (side, kingside) {
            (Side::White, true) => CASTLE_WHITE_K,
            (Side::White, false) => CASTLE_WHITE_Q,
            (Side::Black, true) => CASTLE_BLACK_K,
            (Side::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

/// Auxiliary state threaded between half-moves by the caller.
///
/// Produced fresh by [`Board::update_flags`](crate::board::Board::update_flags)
/// after every move; the board never stores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Flags {
    pub castle: CastleRights,
    pub en_passant: Option<Square>,
}

impl Flags {
    /// Flags for the standard start position: all rights, no en-passant target
    #[must_use]
    pub const fn initial() -> Self {
        Flags {
            castle: CastleRights::all(),
            en_passant: None,
        }
    }

    /// No castling rights and no en-passant target
    #[must_use]
    pub const fn none() -> Self {
        Flags {
            castle: CastleRights::none(),
            en_passant: None,
        }
    }
}

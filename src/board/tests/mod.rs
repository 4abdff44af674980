//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move tree node counts against published tables
//! - `scenarios.rs` - Start position, en passant, castling, single evasion
//! - `make_move.rs` - Move application side effects and copy isolation
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests over random playouts

mod scenarios;

use crate::board::Square;

pub(super) fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

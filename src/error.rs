//! Error types for rejecting malformed puzzle input.

use thiserror::Error;

/// Reasons a grid cannot be turned into a [`crate::engine::Board`].
///
/// The search core assumes well-formed boards, so every one of these is
/// raised at the input boundary and never from inside a search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoardError {
    #[error("board has no rows")]
    Empty,

    #[error("board is not square: row {row} has {found} cells (expected {expected})")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("board side {side} is outside the supported range {min}..={max}")]
    UnsupportedSide { side: usize, min: usize, max: usize },

    #[error("tile value {value} is out of range (expected 0..={max})")]
    ValueOutOfRange { value: u32, max: u32 },

    #[error("tile value {value} appears more than once")]
    DuplicateValue { value: u32 },

    #[error("unrecognized token '{token}' in row {row}")]
    InvalidToken { row: usize, token: String },
}

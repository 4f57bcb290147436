use thiserror::Error;

/// Errors raised by the board model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column outside 0..=7
    #[error("square ({row}, {col}) is outside the 8x8 board")]
    OutOfRange { row: i32, col: i32 },

    /// Algebraic square name that could not be parsed
    #[error("invalid square notation: {0:?}")]
    InvalidNotation(String),
}

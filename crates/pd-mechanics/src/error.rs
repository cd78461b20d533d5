//! Error types for the mechanics crate.

/// Errors that can occur during dice and reward operations.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    /// A dice pool was configured with zero dice.
    #[error("invalid dice count: {0} (must be at least 1)")]
    InvalidDiceCount(u32),

    /// A dice pool was configured with zero-sided dice.
    #[error("invalid die sides: {0} (must be at least 1)")]
    InvalidSides(u32),

    /// A monetary amount could not be parsed from a string.
    #[error("invalid amount: '{0}' (expected a non-negative decimal with at most 2 fraction digits)")]
    InvalidAmount(String),
}

/// Convenience result type for mechanics operations.
pub type DiceResult<T> = Result<T, DiceError>;

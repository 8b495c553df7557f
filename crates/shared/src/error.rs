//! Error taxonomy for amount conversion and parsing.
//!
//! None of these are fatal. Callers degrade every variant to
//! "ignore this update and keep the last valid state".

use thiserror::Error;

/// Result type alias using `AmountError`.
pub type AmountResult<T> = Result<T, AmountError>;

/// Amount handling errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// No usable exchange rate (missing, non-positive, or stale).
    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),

    /// Input does not parse as a finite number.
    #[error("Not a number: {0}")]
    NotANumber(String),

    /// Input exceeded the digit limit and was truncated.
    #[error("Input exceeds {limit} digits")]
    Overflow {
        /// Maximum number of digits accepted.
        limit: usize,
    },
}

impl AmountError {
    /// Returns a stable error code for logs and the UI layer.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRate(_) => "INVALID_RATE",
            Self::NotANumber(_) => "NOT_A_NUMBER",
            Self::Overflow { .. } => "OVERFLOW",
        }
    }
}

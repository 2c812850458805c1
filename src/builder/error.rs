//! Build errors for the calculator builder.

use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Error token is empty. Call .error_token(text) with visible text")]
    EmptyErrorToken,

    #[error("Error token {0:?} reads as a number and would be mistaken for a result")]
    NumericErrorToken(String),

    #[error("Display capacity is zero. Use .max_digits(n) with n > 0")]
    ZeroDisplayCapacity,
}

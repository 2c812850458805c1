//! Entry violations and handling strategies.

use thiserror::Error;

/// Reasons a typed token may be refused.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EntryViolation {
    #[error("Operand already contains a decimal point")]
    DuplicatePoint,

    #[error("Display is full ({max} digits)")]
    DisplayFull { max: usize },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}

/// Strategy for handling entry violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViolationStrategy {
    /// Drop the token and leave the state unchanged
    #[default]
    Reject,

    /// Apply the token anyway but log a warning
    AcceptAndWarn,
}

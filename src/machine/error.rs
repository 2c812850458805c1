//! Calculator error types.

use thiserror::Error;

/// Errors reported by the calculator.
///
/// Transitions never fail outright. An evaluation error becomes the fault
/// of [`Phase::Error`](crate::core::Phase::Error); an unknown keypad label
/// is returned from [`Calculator::press_label`](super::Calculator::press_label).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    /// A division had a zero divisor
    #[error("Division by zero")]
    DivisionByZero,

    /// An operation produced an infinite or undefined value
    #[error("Result is not a finite number")]
    NonFiniteResult,

    /// The label does not name a keypad button
    #[error("Unknown key {0:?}")]
    UnknownKey(String),
}

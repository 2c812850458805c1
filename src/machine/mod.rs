//! The calculation state machine.
//!
//! This module is the imperative shell around [`crate::core`]: one owned
//! [`Calculator`] whose methods are the only place the state tuple changes.

mod calculator;
mod error;

pub use calculator::Calculator;
pub use error::CalcError;

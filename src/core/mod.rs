//! Core calculator types and logic.
//!
//! This module contains the pure functional core:
//! - Operators and their arithmetic
//! - Permissive number parsing and display formatting
//! - Keypad input events
//! - The state tuple and its derived phases
//!
//! Nothing in this module mutates shared state or logs. The imperative
//! shell lives in [`crate::machine`].

mod calc_state;
mod key;
pub mod number;
mod operator;
mod state;

pub use calc_state::{CalcState, INITIAL_DISPLAY};
pub use key::{DigitOutOfRange, Key, Token};
pub use operator::Operator;
pub use state::{Phase, State};

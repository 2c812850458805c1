//! Tapcalc: a keypad calculator state machine
//!
//! Tapcalc is the calculation core of a four-function touch calculator,
//! separated from any UI toolkit. A presentation layer feeds it key events
//! and re-reads one display string after each event.
//!
//! # Core Concepts
//!
//! - **Keys**: Digit, point, operator, equals, clear, negate and percent events
//! - **State**: The display text, the pending operand and operator, and
//!   whether the next digit starts a fresh number
//! - **Chaining**: Operators resolve left to right with no precedence
//! - **Entry rules**: `Validation`-based checks on typed tokens
//!
//! # Example
//!
//! ```rust
//! use tapcalc::{Calculator, Phase};
//!
//! let mut calc = Calculator::new();
//! for label in ["5", "+", "3", "="] {
//!     calc.press_label(label).unwrap();
//! }
//! assert_eq!(calc.display(), "8");
//!
//! for label in ["9", "÷", "0", "="] {
//!     calc.press_label(label).unwrap();
//! }
//! assert_eq!(calc.display(), "Error");
//! assert_eq!(calc.phase(), Phase::Error);
//! ```

pub mod builder;
pub mod core;
pub mod enforcement;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{CalculatorBuilder, CalculatorConfig, NonFinitePolicy};
pub use crate::core::{CalcState, Key, Operator, Phase, State, Token};
pub use crate::machine::{CalcError, Calculator};

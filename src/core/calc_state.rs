//! The calculation state tuple.

use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// Display text of a freshly created or cleared calculator.
pub const INITIAL_DISPLAY: &str = "0";

/// Complete state of the calculator.
///
/// Only [`Calculator`](crate::machine::Calculator) mutates this value; hosts
/// observe it through a shared reference or a serialized snapshot.
///
/// # Example
///
/// ```rust
/// use tapcalc::core::CalcState;
///
/// let state = CalcState::default();
/// assert_eq!(state.display, "0");
/// assert!(state.previous_value.is_none());
/// assert!(state.operator.is_none());
/// assert!(state.awaiting_new_entry);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalcState {
    /// The currently shown text.
    pub display: String,
    /// Left-hand operand of a pending operation.
    pub previous_value: Option<f64>,
    /// The pending operation.
    pub operator: Option<Operator>,
    /// Whether the next digit starts a fresh number.
    pub awaiting_new_entry: bool,
}

impl Default for CalcState {
    fn default() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            previous_value: None,
            operator: None,
            awaiting_new_entry: true,
        }
    }
}

impl CalcState {
    /// Whether an operator is waiting for its right-hand operand.
    pub fn is_pending(&self) -> bool {
        self.operator.is_some()
    }
}

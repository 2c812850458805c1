//! Named discrete phases of the calculator.
//!
//! The full machine state is the [`CalcState`](super::CalcState) tuple. The
//! phases here are a coarse, derived view of it for display and logging.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for named state machine states.
///
/// All methods are pure. A state is a value describing where the machine
/// currently is.
///
/// # Example
///
/// ```rust
/// use tapcalc::core::{Phase, State};
///
/// assert_eq!(Phase::OperatorPending.name(), "OperatorPending");
/// assert!(!Phase::OperatorPending.is_final());
/// assert!(Phase::Error.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Coarse phase of the calculator, derived from its state.
///
/// The calculator runs for the lifetime of the session, so no phase is
/// final. `Error` is left by typing a digit or pressing clear.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// The next digit starts a fresh number and no operator is pending.
    Ready,
    /// An operand is being typed and no operator is pending.
    Entering,
    /// An operator is waiting for its right-hand operand.
    OperatorPending,
    /// The last evaluation was rejected and the error token is shown.
    Error,
}

impl State for Phase {
    fn name(&self) -> &str {
        match self {
            Self::Ready => "Ready",
            Self::Entering => "Entering",
            Self::OperatorPending => "OperatorPending",
            Self::Error => "Error",
        }
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

//! Builder API for configuring a calculator.
//!
//! Settings come either from the fluent [`CalculatorBuilder`] or from a
//! serde-loaded [`CalculatorConfig`]; both end in a validated
//! [`Calculator`](crate::machine::Calculator).

pub mod calculator;
pub mod config;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use config::{CalculatorConfig, NonFinitePolicy, DEFAULT_ERROR_TOKEN};
pub use error::BuildError;

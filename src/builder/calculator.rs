//! Builder for constructing calculators.

use crate::builder::config::{CalculatorConfig, NonFinitePolicy};
use crate::builder::error::BuildError;
use crate::core::number;
use crate::enforcement::EntryRules;
use crate::machine::Calculator;

/// Builder for constructing calculators with a fluent API.
///
/// # Example
///
/// ```rust
/// use tapcalc::builder::{CalculatorBuilder, NonFinitePolicy};
/// use tapcalc::enforcement::EntryRulesBuilder;
///
/// let calc = CalculatorBuilder::new()
///     .non_finite(NonFinitePolicy::ShowError)
///     .error_token("E")
///     .entry_rules(EntryRulesBuilder::new().max_digits(9).build())
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.display(), "0");
/// ```
#[derive(Debug, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
    rules: EntryRules,
}

impl CalculatorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a loaded configuration.
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            rules: EntryRules::default(),
        }
    }

    /// Set how non-finite results are presented.
    pub fn non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.config.non_finite = policy;
        self
    }

    /// Set the text shown after a rejected evaluation.
    pub fn error_token(mut self, token: impl Into<String>) -> Self {
        self.config.error_token = token.into();
        self
    }

    /// Write a leading decimal point as `0.`.
    pub fn pad_leading_point(mut self, enabled: bool) -> Self {
        self.config.pad_leading_point = enabled;
        self
    }

    /// Replace the entry rules.
    pub fn entry_rules(mut self, rules: EntryRules) -> Self {
        self.rules = rules;
        self
    }

    /// Build the calculator.
    /// Returns an error if the settings are inconsistent.
    pub fn build(self) -> Result<Calculator, BuildError> {
        let token = self.config.error_token.trim();
        if token.is_empty() {
            return Err(BuildError::EmptyErrorToken);
        }
        if !number::parse(token).is_nan() {
            return Err(BuildError::NumericErrorToken(token.to_string()));
        }
        if self.rules.max_digits() == Some(0) {
            return Err(BuildError::ZeroDisplayCapacity);
        }

        Ok(Calculator::from_parts(self.config, self.rules))
    }
}

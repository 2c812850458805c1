//! Calculator configuration.

use serde::{Deserialize, Serialize};

/// Default text shown after a rejected evaluation.
pub const DEFAULT_ERROR_TOKEN: &str = "Error";

/// How a non-finite arithmetic result is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFinitePolicy {
    /// Show the error token and drop the pending operation
    #[default]
    ShowError,

    /// Render `Infinity`, `-Infinity` or `NaN` and keep going
    Passthrough,
}

/// Serializable calculator settings.
///
/// Missing fields take their defaults, so a host can load a partial
/// configuration from any serde format.
///
/// # Example
///
/// ```rust
/// use tapcalc::builder::{CalculatorConfig, NonFinitePolicy};
///
/// let config = CalculatorConfig::default();
/// assert_eq!(config.non_finite, NonFinitePolicy::ShowError);
/// assert_eq!(config.error_token, "Error");
/// assert!(config.pad_leading_point);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub non_finite: NonFinitePolicy,
    pub error_token: String,
    /// Write a leading decimal point as `0.` rather than `.`
    pub pad_leading_point: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            non_finite: NonFinitePolicy::ShowError,
            error_token: DEFAULT_ERROR_TOKEN.to_string(),
            pad_leading_point: true,
        }
    }
}

impl CalculatorConfig {
    /// Settings that reproduce raw keypad behavior: non-finite results are
    /// shown as-is and a leading point is not padded.
    pub fn unguarded() -> Self {
        Self {
            non_finite: NonFinitePolicy::Passthrough,
            pad_leading_point: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let config: CalculatorConfig =
            serde_json::from_str(r#"{ "non_finite": "passthrough" }"#).unwrap();

        assert_eq!(config.non_finite, NonFinitePolicy::Passthrough);
        assert_eq!(config.error_token, DEFAULT_ERROR_TOKEN);
        assert!(config.pad_leading_point);
    }

    #[test]
    fn empty_config_is_default() {
        let config: CalculatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let result: Result<CalculatorConfig, _> =
            serde_json::from_str(r#"{ "non_finite": "explode" }"#);
        assert!(result.is_err());
    }
}

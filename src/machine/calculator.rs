//! Calculator that applies keypad events to the state tuple.

use crate::builder::{BuildError, CalculatorBuilder, CalculatorConfig, NonFinitePolicy};
use crate::core::{number, CalcState, Key, Operator, Phase, State, Token, INITIAL_DISPLAY};
use crate::enforcement::{EntryContext, EntryRules, ViolationStrategy};
use crate::machine::error::CalcError;
use stillwater::validation::Validation;
use tracing::{debug, trace, warn};

/// Four-function calculator driven by keypad events.
///
/// Chaining is left-to-right without precedence: pressing an operator while
/// another is pending resolves the pending one first.
///
/// # Example
///
/// ```rust
/// use tapcalc::core::{Operator, Token};
/// use tapcalc::machine::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.digit_entry(Token::Digit(2));
/// calc.operator_entry(Operator::Add);
/// calc.digit_entry(Token::Digit(3));
/// calc.operator_entry(Operator::Multiply);
/// calc.digit_entry(Token::Digit(4));
/// calc.equals();
///
/// assert_eq!(calc.display(), "20");
/// ```
#[derive(Debug)]
pub struct Calculator {
    state: CalcState,
    fault: Option<CalcError>,
    config: CalculatorConfig,
    rules: EntryRules,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with default settings.
    pub fn new() -> Self {
        Self::from_parts(CalculatorConfig::default(), EntryRules::default())
    }

    /// Create a calculator from a loaded configuration and default rules.
    pub fn from_config(config: CalculatorConfig) -> Result<Self, BuildError> {
        CalculatorBuilder::from_config(config).build()
    }

    pub(crate) fn from_parts(config: CalculatorConfig, rules: EntryRules) -> Self {
        Self {
            state: CalcState::default(),
            fault: None,
            config,
            rules,
        }
    }

    /// Get the display text (pure)
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Get the full state tuple (pure)
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Get the fault behind the error phase, if any (pure)
    pub fn last_error(&self) -> Option<&CalcError> {
        self.fault.as_ref()
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Derive the current phase (pure)
    pub fn phase(&self) -> Phase {
        if self.fault.is_some() {
            Phase::Error
        } else if self.state.is_pending() {
            Phase::OperatorPending
        } else if self.state.awaiting_new_entry {
            Phase::Ready
        } else {
            Phase::Entering
        }
    }

    /// Apply one key event.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Token(token) => self.digit_entry(token),
            Key::Operator(op) => self.operator_entry(op),
            Key::Equals => self.equals(),
            Key::Clear => self.clear(),
            Key::Negate => self.negate(),
            Key::Percent => self.percent(),
        }
    }

    /// Parse a keypad label and apply it.
    pub fn press_label(&mut self, label: &str) -> Result<(), CalcError> {
        let key =
            Key::from_label(label).ok_or_else(|| CalcError::UnknownKey(label.to_string()))?;
        self.press(key);
        Ok(())
    }

    /// Type a digit or the decimal point. A digit outside `0..=9` is dropped.
    pub fn digit_entry(&mut self, token: Token) {
        let Some(c) = token.as_char() else {
            warn!(token = ?token, "digit out of range dropped");
            return;
        };

        let context = EntryContext {
            display: self.state.display.clone(),
            token,
            awaiting_new_entry: self.state.awaiting_new_entry,
        };

        if let Validation::Failure(violations) = self.rules.enforce(&context) {
            let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
            match self.rules.violation_strategy() {
                ViolationStrategy::Reject => {
                    debug!(token = %token, violations = ?reasons, "entry rejected");
                    return;
                }
                ViolationStrategy::AcceptAndWarn => {
                    warn!(
                        token = %token,
                        violations = ?reasons,
                        "entry accepted despite violations"
                    );
                }
            }
        }

        let padded = token.is_point() && self.config.pad_leading_point;
        if self.state.awaiting_new_entry {
            self.state.display = if padded {
                format!("{INITIAL_DISPLAY}.")
            } else {
                c.to_string()
            };
            self.state.awaiting_new_entry = false;
        } else if self.state.display == INITIAL_DISPLAY && !padded {
            self.state.display = c.to_string();
        } else {
            self.state.display.push(c);
        }
        self.fault = None;

        self.log_transition(Key::Token(token));
    }

    /// Select a binary operator, resolving any pending one first.
    pub fn operator_entry(&mut self, op: Operator) {
        if self.ignored_in_error(Key::Operator(op)) {
            return;
        }

        let current = number::parse(&self.state.display);
        match (self.state.previous_value, self.state.operator) {
            (None, _) => self.state.previous_value = Some(current),
            (Some(previous), Some(pending)) => match self.evaluate(pending, previous, current) {
                Ok(result) => {
                    self.state.previous_value = Some(result);
                    self.state.display = number::stringify(result);
                }
                Err(error) => {
                    self.fail(error);
                    return;
                }
            },
            (Some(_), None) => {}
        }

        self.state.operator = Some(op);
        self.state.awaiting_new_entry = true;

        self.log_transition(Key::Operator(op));
    }

    /// Resolve the pending operation. No-op when nothing is pending.
    pub fn equals(&mut self) {
        if self.ignored_in_error(Key::Equals) {
            return;
        }

        let (Some(previous), Some(op)) = (self.state.previous_value, self.state.operator) else {
            trace!(display = %self.state.display, "equals with nothing pending");
            return;
        };

        let current = number::parse(&self.state.display);
        match self.evaluate(op, previous, current) {
            Ok(result) => {
                self.state.display = number::stringify(result);
                self.state.previous_value = None;
                self.state.operator = None;
                self.state.awaiting_new_entry = true;
                self.log_transition(Key::Equals);
            }
            Err(error) => self.fail(error),
        }
    }

    /// Restore the initial state and forget any fault.
    pub fn clear(&mut self) {
        self.state = CalcState::default();
        self.fault = None;
        self.log_transition(Key::Clear);
    }

    /// Flip the sign of the display.
    pub fn negate(&mut self) {
        self.unary(Key::Negate, |value| value * -1.0);
    }

    /// Divide the display by one hundred.
    pub fn percent(&mut self) {
        self.unary(Key::Percent, |value| value / 100.0);
    }

    /// Rewrite the display only; the pending operation is never touched.
    fn unary(&mut self, key: Key, f: impl FnOnce(f64) -> f64) {
        if self.ignored_in_error(key) {
            return;
        }

        let result = f(number::parse(&self.state.display));
        if !result.is_finite() && self.config.non_finite == NonFinitePolicy::ShowError {
            trace!(key = %key, display = %self.state.display, "non-finite unary result dropped");
            return;
        }

        self.state.display = number::stringify(result);
        self.log_transition(key);
    }

    fn evaluate(&self, op: Operator, a: f64, b: f64) -> Result<f64, CalcError> {
        let result = op.apply(a, b);
        if result.is_finite() || self.config.non_finite == NonFinitePolicy::Passthrough {
            return Ok(result);
        }

        if op == Operator::Divide && b == 0.0 {
            Err(CalcError::DivisionByZero)
        } else {
            Err(CalcError::NonFiniteResult)
        }
    }

    fn fail(&mut self, error: CalcError) {
        warn!(error = %error, token = %self.config.error_token, "evaluation rejected");
        self.state = CalcState {
            display: self.config.error_token.clone(),
            previous_value: None,
            operator: None,
            awaiting_new_entry: true,
        };
        self.fault = Some(error);
    }

    fn ignored_in_error(&self, key: Key) -> bool {
        if self.fault.is_some() {
            trace!(key = %key, "key ignored while showing error");
            return true;
        }
        false
    }

    fn log_transition(&self, key: Key) {
        let phase = self.phase();
        debug!(
            key = %key,
            display = %self.state.display,
            phase = phase.name(),
            "transition applied"
        );
    }
}

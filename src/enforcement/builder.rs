//! Builder API for creating entry rules.

use crate::enforcement::context::EntryContext;
use crate::enforcement::rules::{EntryCheck, EntryRules};
use crate::enforcement::violations::{EntryViolation, ViolationStrategy};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating entry rules
pub struct EntryRulesBuilder {
    single_point: bool,
    max_digits: Option<usize>,
    required_checks: Vec<EntryCheck>,
    on_violation: ViolationStrategy,
}

impl EntryRulesBuilder {
    pub fn new() -> Self {
        Self {
            single_point: true,
            max_digits: None,
            required_checks: Vec::new(),
            on_violation: ViolationStrategy::Reject,
        }
    }

    /// Allow at most one decimal point per operand
    pub fn single_point(mut self, enabled: bool) -> Self {
        self.single_point = enabled;
        self
    }

    /// Limit the number of digits in a typed operand
    pub fn max_digits(mut self, n: usize) -> Self {
        self.max_digits = Some(n);
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&EntryContext) -> Validation<(), NonEmptyVec<EntryViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&EntryContext) -> bool + Send + Sync + 'static,
    {
        let check = move |ctx: &EntryContext| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(EntryViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Set violation handling strategy
    pub fn on_violation(mut self, strategy: ViolationStrategy) -> Self {
        self.on_violation = strategy;
        self
    }

    /// Build the entry rules
    pub fn build(self) -> EntryRules {
        EntryRules {
            single_point: self.single_point,
            max_digits: self.max_digits,
            required_checks: self.required_checks,
            on_violation: self.on_violation,
        }
    }
}

impl Default for EntryRulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

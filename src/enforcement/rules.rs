//! Entry rules for typed tokens using Validation.

use crate::enforcement::context::EntryContext;
use crate::enforcement::violations::{EntryViolation, ViolationStrategy};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for entry check functions
pub type EntryCheck =
    Box<dyn Fn(&EntryContext) -> Validation<(), NonEmptyVec<EntryViolation>> + Send + Sync>;

/// Rules a typed token must satisfy.
/// Uses Validation to accumulate ALL violations.
pub struct EntryRules {
    pub(crate) single_point: bool,
    pub(crate) max_digits: Option<usize>,
    pub(crate) required_checks: Vec<EntryCheck>,
    pub(crate) on_violation: ViolationStrategy,
}

impl Default for EntryRules {
    fn default() -> Self {
        Self {
            single_point: true,
            max_digits: None,
            required_checks: Vec::new(),
            on_violation: ViolationStrategy::Reject,
        }
    }
}

impl fmt::Debug for EntryRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryRules")
            .field("single_point", &self.single_point)
            .field("max_digits", &self.max_digits)
            .field("required_checks", &self.required_checks.len())
            .field("on_violation", &self.on_violation)
            .finish()
    }
}

impl EntryRules {
    /// Rules that accept every token, including repeated decimal points.
    pub fn permissive() -> Self {
        Self {
            single_point: false,
            ..Self::default()
        }
    }

    /// Check a proposed entry, accumulating ALL violations.
    /// Returns Validation::Success(()) if all checks pass.
    pub fn enforce(
        &self,
        context: &EntryContext,
    ) -> Validation<(), NonEmptyVec<EntryViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<EntryViolation>>> = Vec::new();

        if self.single_point && context.token.is_point() {
            let check = if context.extends_operand() && context.display.contains('.') {
                Validation::fail(EntryViolation::DuplicatePoint)
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        if let Some(max) = self.max_digits {
            let check = if !context.token.is_point()
                && context.extends_operand()
                && context.digit_count() >= max
            {
                Validation::fail(EntryViolation::DisplayFull { max })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(context));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    pub fn violation_strategy(&self) -> ViolationStrategy {
        self.on_violation
    }

    pub fn max_digits(&self) -> Option<usize> {
        self.max_digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Token;
    use crate::enforcement::builder::EntryRulesBuilder;

    fn ctx(display: &str, token: Token, awaiting_new_entry: bool) -> EntryContext {
        EntryContext {
            display: display.to_string(),
            token,
            awaiting_new_entry,
        }
    }

    #[test]
    fn enforcement_accumulates_all_violations() {
        let rules = EntryRulesBuilder::new()
            .max_digits(3)
            .require_pred(|_ctx| false, "Custom check always fails".to_string())
            .build();

        let result = rules.enforce(&ctx("123", Token::Digit(4), false));

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, EntryViolation::DisplayFull { max: 3 })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, EntryViolation::CustomCheckFailed { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn second_point_is_rejected() {
        let rules = EntryRules::default();

        assert!(rules.enforce(&ctx("1", Token::Point, false)).is_success());
        assert!(rules.enforce(&ctx("0", Token::Point, false)).is_success());

        let result = rules.enforce(&ctx("1.5", Token::Point, false));
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert!(errors
                .iter()
                .any(|e| matches!(e, EntryViolation::DuplicatePoint)));
        }
    }

    #[test]
    fn point_starting_a_new_number_is_allowed() {
        let rules = EntryRules::default();
        assert!(rules.enforce(&ctx("1.5", Token::Point, true)).is_success());
    }

    #[test]
    fn permissive_rules_accept_repeated_points() {
        let rules = EntryRules::permissive();
        assert!(rules.enforce(&ctx("1.2", Token::Point, false)).is_success());
    }

    #[test]
    fn display_capacity_only_limits_growth() {
        let rules = EntryRulesBuilder::new().max_digits(2).build();

        assert!(rules.enforce(&ctx("12", Token::Digit(3), false)).is_failure());
        assert!(rules.enforce(&ctx("12", Token::Digit(3), true)).is_success());
        assert!(rules.enforce(&ctx("12", Token::Point, false)).is_success());
        assert!(rules.enforce(&ctx("1", Token::Digit(2), false)).is_success());
    }

    #[test]
    fn custom_validation_check_works() {
        let rules = EntryRulesBuilder::new()
            .require(|ctx: &EntryContext| {
                if ctx.token == Token::Digit(7) {
                    Validation::fail(EntryViolation::CustomCheckFailed {
                        message: "7 is out of order".to_string(),
                    })
                } else {
                    Validation::success(())
                }
            })
            .build();

        assert!(rules.enforce(&ctx("1", Token::Digit(7), false)).is_failure());
        assert!(rules.enforce(&ctx("1", Token::Digit(8), false)).is_success());
    }

    #[test]
    fn violation_strategy_is_stored() {
        let rules = EntryRulesBuilder::new()
            .on_violation(ViolationStrategy::AcceptAndWarn)
            .build();

        assert_eq!(rules.violation_strategy(), ViolationStrategy::AcceptAndWarn);
    }
}

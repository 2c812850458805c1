//! Validation-based entry rules for typed tokens.
//!
//! Every check runs against the proposed entry and all violations are
//! collected with Stillwater's `Validation` instead of stopping at the
//! first one, so a host can report everything wrong with a keypress.
//!
//! # Example
//!
//! ```rust
//! use tapcalc::core::Token;
//! use tapcalc::enforcement::{EntryContext, EntryRulesBuilder, ViolationStrategy};
//!
//! let rules = EntryRulesBuilder::new()
//!     .max_digits(12)
//!     .on_violation(ViolationStrategy::Reject)
//!     .build();
//!
//! let context = EntryContext {
//!     display: "3.14".to_string(),
//!     token: Token::Point,
//!     awaiting_new_entry: false,
//! };
//! assert!(rules.enforce(&context).is_failure());
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

pub use builder::EntryRulesBuilder;
pub use context::EntryContext;
pub use rules::EntryRules;
pub use violations::{EntryViolation, ViolationStrategy};

//! Entry Rules
//!
//! This example demonstrates the validation-based entry rules that guard
//! every typed digit and decimal point.
//!
//! Key concepts:
//! - Validation over Result for comprehensive error reporting
//! - Built-in rules (single decimal point, display capacity)
//! - Custom validation predicates
//! - Violation strategies (Reject, AcceptAndWarn)
//!
//! Run with: cargo run --example entry_rules

use stillwater::validation::Validation;
use tapcalc::core::Token;
use tapcalc::enforcement::{EntryContext, EntryRulesBuilder, ViolationStrategy};
use tapcalc::CalculatorBuilder;

fn main() {
    println!("=== Entry Rules Example ===\n");

    // Example 1: Display capacity with rejection
    println!("Example 1: Display Capacity");
    let mut calc = CalculatorBuilder::new()
        .entry_rules(EntryRulesBuilder::new().max_digits(4).build())
        .build()
        .unwrap();
    for label in ["1", "2", "3", "4", "5", ".", "6"] {
        calc.press_label(label).unwrap();
    }
    println!("  Typed 1 2 3 4 5 . 6 with max 4 digits");
    println!("  Display: {}\n", calc.display());

    // Example 2: Custom predicate, every violation collected
    println!("Example 2: Custom Rules Collect All Violations");
    let rules = EntryRulesBuilder::new()
        .max_digits(3)
        .require_pred(
            |ctx| ctx.token != Token::Digit(7),
            "7 key is disabled".to_string(),
        )
        .build();

    let context = EntryContext {
        display: "123".to_string(),
        token: Token::Digit(7),
        awaiting_new_entry: false,
    };
    match rules.enforce(&context) {
        Validation::Success(()) => println!("  Entry accepted"),
        Validation::Failure(violations) => {
            println!("  Entry refused with {} violations:", violations.len());
            for violation in violations.iter() {
                println!("    - {violation}");
            }
        }
    }
    println!();

    // Example 3: Accept and warn
    println!("Example 3: AcceptAndWarn Strategy");
    let mut calc = CalculatorBuilder::new()
        .entry_rules(
            EntryRulesBuilder::new()
                .on_violation(ViolationStrategy::AcceptAndWarn)
                .build(),
        )
        .build()
        .unwrap();
    for label in ["1", ".", "2", ".", "3"] {
        calc.press_label(label).unwrap();
    }
    println!("  Typed 1 . 2 . 3 with violations logged, not refused");
    println!("  Display: {}\n", calc.display());

    println!("Key Takeaways:");
    println!("- Validation accumulates ALL violations, not just the first");
    println!("- Reject keeps the display unchanged on a bad keypress");
    println!("- AcceptAndWarn reproduces a raw keypad while logging");

    println!("\n=== Example Complete ===");
}

//! Keypad Session
//!
//! This example drives the calculator the way a presentation layer would:
//! one keypad label per button press, re-reading the display after each.
//!
//! Key concepts:
//! - Label-driven input through `press_label`
//! - Left-to-right chaining without precedence
//! - Derived phases for display and logging
//! - Error phase after a division by zero
//!
//! Run with: cargo run --example keypad_session

use tapcalc::{Calculator, State};

fn run(calc: &mut Calculator, labels: &str) {
    for label in labels.split_whitespace() {
        calc.press_label(label).unwrap();
        println!(
            "  [{label:>2}] display = {:<8} phase = {}",
            calc.display(),
            calc.phase().name()
        );
    }
}

fn main() {
    println!("=== Keypad Session Example ===\n");

    let mut calc = Calculator::new();

    println!("Session 1: 2 + 3 × 4 = (no precedence)");
    run(&mut calc, "2 + 3 × 4 =");
    println!("  Result: {}\n", calc.display());

    println!("Session 2: percent and sign change");
    run(&mut calc, "C 2 0 0 × 1 5 % = ±");
    println!("  Result: {}\n", calc.display());

    println!("Session 3: division by zero");
    run(&mut calc, "C 9 ÷ 0 =");
    if let Some(error) = calc.last_error() {
        println!("  Fault: {error}");
    }
    println!("  Operators are ignored until a digit or C:");
    run(&mut calc, "+ 7");
    println!();

    println!("Session 4: unknown labels are reported, not applied");
    match calc.press_label("MR") {
        Ok(()) => println!("  unexpected: MR accepted"),
        Err(error) => println!("  {error}"),
    }

    println!("\n=== Example Complete ===");
}

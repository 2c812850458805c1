//! Binary operators of the four-function keypad.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pending binary operation.
///
/// The enum is closed, so `apply` is total: there is no "unknown operator"
/// branch to fall back on. Unknown symbols are rejected at the text
/// boundary by [`Operator::from_symbol`].
///
/// # Example
///
/// ```rust
/// use tapcalc::core::Operator;
///
/// assert_eq!(Operator::Multiply.apply(6.0, 7.0), 42.0);
/// assert_eq!(Operator::from_symbol("÷"), Some(Operator::Divide));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Every operator in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Apply the operator with `a` as the left-hand operand.
    ///
    /// Division does not check for a zero divisor; the caller decides how a
    /// non-finite result is presented.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }

    /// The keypad symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Parse a keypad symbol. ASCII `*`, `x` and `/` are accepted as
    /// aliases for `×` and `÷`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "×" | "*" | "x" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_covers_four_functions() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), 8.0);
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), 2.0);
        assert_eq!(Operator::Multiply.apply(5.0, 3.0), 15.0);
        assert_eq!(Operator::Divide.apply(6.0, 3.0), 2.0);
    }

    #[test]
    fn subtraction_keeps_operand_order() {
        assert_eq!(Operator::Subtract.apply(3.0, 5.0), -2.0);
        assert_eq!(Operator::Divide.apply(1.0, 4.0), 0.25);
    }

    #[test]
    fn divide_by_zero_is_unchecked() {
        assert!(Operator::Divide.apply(9.0, 0.0).is_infinite());
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn symbols_parse_back() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn ascii_aliases_are_accepted() {
        assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("/"), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol("^"), None);
        assert_eq!(Operator::from_symbol(""), None);
    }
}

//! Context provided to entry checks.

use crate::core::Token;

/// A proposed `digit_entry`, as seen by entry checks.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryContext {
    pub display: String,
    pub token: Token,
    pub awaiting_new_entry: bool,
}

impl EntryContext {
    /// Whether the token extends the operand already on the display,
    /// as opposed to starting a new one or replacing a lone `0`.
    pub fn extends_operand(&self) -> bool {
        !self.awaiting_new_entry && !(self.display == "0" && !self.token.is_point())
    }

    /// Number of typed digits in the operand on the display.
    ///
    /// Exponent digits and the `0` of a `0.` prefix are not counted.
    pub fn digit_count(&self) -> usize {
        let mantissa = self
            .display
            .split(['e', 'E'])
            .next()
            .unwrap_or_default()
            .trim_start_matches(['-', '+']);
        let mantissa = mantissa.strip_prefix("0.").unwrap_or(mantissa);
        mantissa.chars().filter(char::is_ascii_digit).count()
    }
}

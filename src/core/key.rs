//! Keypad input events.

use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A digit payload outside `0..=9`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Digit {0} is out of range 0..=9")]
pub struct DigitOutOfRange(pub u8);

/// A token typed into the current operand: a decimal digit or the point.
///
/// Deserialization rejects digits outside `0..=9`. A `Digit` built directly
/// with a larger payload is dropped by the calculator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "TokenRepr")]
pub enum Token {
    Digit(u8),
    Point,
}

#[derive(Deserialize)]
enum TokenRepr {
    Digit(u8),
    Point,
}

impl TryFrom<TokenRepr> for Token {
    type Error = DigitOutOfRange;

    fn try_from(repr: TokenRepr) -> Result<Self, Self::Error> {
        match repr {
            TokenRepr::Digit(value) => Self::digit(value).ok_or(DigitOutOfRange(value)),
            TokenRepr::Point => Ok(Self::Point),
        }
    }
}

impl Token {
    /// Build a digit token, returning `None` outside `0..=9`.
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self::Digit(value))
    }

    /// The character this token appends to the display, or `None` for a
    /// digit outside `0..=9`.
    pub fn as_char(self) -> Option<char> {
        match self {
            Self::Digit(value) => char::from_digit(u32::from(value), 10),
            Self::Point => Some('.'),
        }
    }

    /// Read a token from a single display character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Point),
            // `to_digit(10)` is at most 9, so the cast cannot truncate.
            _ => c.to_digit(10).map(|value| Self::Digit(value as u8)),
        }
    }

    pub fn is_point(self) -> bool {
        matches!(self, Self::Point)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_char() {
            Some(c) => write!(f, "{c}"),
            None => write!(f, "{self:?}"),
        }
    }
}

/// One activation of a keypad button.
///
/// # Example
///
/// ```rust
/// use tapcalc::core::{Key, Operator, Token};
///
/// assert_eq!(Key::from_label("7"), Some(Key::Token(Token::Digit(7))));
/// assert_eq!(Key::from_label("×"), Some(Key::Operator(Operator::Multiply)));
/// assert_eq!(Key::from_label("±"), Some(Key::Negate));
/// assert_eq!(Key::from_label("sqrt"), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Key {
    Token(Token),
    Operator(Operator),
    Equals,
    Clear,
    Negate,
    Percent,
}

impl Key {
    /// Parse a keypad label such as `"7"`, `"."`, `"÷"`, `"="`, `"C"`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(token) = Token::from_char(c) {
                return Some(Self::Token(token));
            }
        }

        if let Some(op) = Operator::from_symbol(label) {
            return Some(Self::Operator(op));
        }

        match label {
            "=" => Some(Self::Equals),
            "C" | "c" | "AC" => Some(Self::Clear),
            "±" | "+/-" => Some(Self::Negate),
            "%" => Some(Self::Percent),
            _ => None,
        }
    }

    /// The canonical keypad label.
    pub fn label(self) -> String {
        match self {
            Self::Token(token) => token.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Negate => "±".to_string(),
            Self::Percent => "%".to_string(),
        }
    }
}

impl From<Token> for Key {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl From<Operator> for Key {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_constructor_rejects_out_of_range() {
        assert_eq!(Token::digit(0), Some(Token::Digit(0)));
        assert_eq!(Token::digit(9), Some(Token::Digit(9)));
        assert_eq!(Token::digit(10), None);
    }

    #[test]
    fn tokens_map_to_display_chars() {
        assert_eq!(Token::Digit(5).as_char(), Some('5'));
        assert_eq!(Token::Point.as_char(), Some('.'));
        assert_eq!(Token::Digit(12).as_char(), None);
        assert_eq!(Token::from_char('3'), Some(Token::Digit(3)));
        assert_eq!(Token::from_char('a'), None);
    }

    #[test]
    fn every_keypad_label_parses() {
        let labels = [
            "C", "±", "%", "÷", "7", "8", "9", "×", "4", "5", "6", "-", "1", "2", "3", "+", "0",
            ".", "=",
        ];
        for label in labels {
            let key = Key::from_label(label);
            assert!(key.is_some(), "label {label:?} should parse");
            assert_eq!(key.map(Key::label).as_deref(), Some(label));
        }
    }

    #[test]
    fn minus_is_an_operator_not_a_sign() {
        assert_eq!(
            Key::from_label("-"),
            Some(Key::Operator(Operator::Subtract))
        );
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(Key::from_label(""), None);
        assert_eq!(Key::from_label("12"), None);
        assert_eq!(Key::from_label("MR"), None);
    }

    #[test]
    fn keys_serialize_for_transport() {
        let key = Key::Operator(Operator::Divide);
        let json = serde_json::to_string(&key).unwrap();
        let back: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn out_of_range_digit_does_not_deserialize() {
        let result = serde_json::from_str::<Key>(r#"{"Token":{"Digit":12}}"#);
        assert!(result.is_err());

        let key: Key = serde_json::from_str(r#"{"Token":{"Digit":9}}"#).unwrap();
        assert_eq!(key, Key::Token(Token::Digit(9)));
    }
}

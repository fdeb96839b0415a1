//! The digit being practiced.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Digit construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigitError {
    #[error("digit out of range: {0} (expected 0-9)")]
    OutOfRange(u8),
}

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// All selectable digits in display order.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Create a digit, rejecting values above 9.
    pub fn new(value: u8) -> Result<Self, DigitError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(DigitError::OutOfRange(value))
        }
    }

    /// The numeric value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The digit as a display character.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl Default for Digit {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_range() {
        assert_eq!(Digit::new(0).unwrap().value(), 0);
        assert_eq!(Digit::new(9).unwrap().value(), 9);
        assert_eq!(Digit::new(10), Err(DigitError::OutOfRange(10)));
    }

    #[test]
    fn test_all_digits_in_order() {
        let values: Vec<u8> = Digit::ALL.iter().map(|d| d.value()).collect();
        assert_eq!(values, (0..=9).collect::<Vec<u8>>());
    }

    #[test]
    fn test_display_and_char() {
        let seven = Digit::new(7).unwrap();
        assert_eq!(seven.to_string(), "7");
        assert_eq!(seven.as_char(), '7');
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let digit: Digit = serde_json::from_str("3").unwrap();
        assert_eq!(digit.value(), 3);
        assert!(serde_json::from_str::<Digit>("12").is_err());
    }
}

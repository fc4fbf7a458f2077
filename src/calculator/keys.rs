//! Keypad key parsing.
//!
//! Turns a typed key sequence such as `"12+3="` into calculator keys.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::evaluation::Operator;
use super::store::Digit;
use crate::error::CalcError;

lazy_static! {
    /// Matches strings made only of keypad characters and whitespace.
    static ref KEY_SEQUENCE: Regex = Regex::new(r"^[0-9\s\.\+\-\*/=cC]*$").unwrap();
}

/// A single press on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(Digit),
    Operator(Operator),
    Equals,
    Clear,
}

impl Key {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            _ => Operator::from_symbol(c)
                .map(Self::Operator)
                .or_else(|| Digit::try_from(c).ok().map(Self::Digit)),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "{}", digit.as_char()),
            Self::Operator(operator) => write!(f, "{}", operator),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("c"),
        }
    }
}

/// Check if input consists only of keypad characters.
///
/// This is a fast pre-check before mapping each character.
pub fn looks_like_key_sequence(input: &str) -> bool {
    KEY_SEQUENCE.is_match(input)
}

/// Parse a key sequence, ignoring whitespace.
///
/// Fails on the first character that is not a keypad key, reporting its
/// character position.
pub fn parse_keys(input: &str) -> Result<Vec<Key>, CalcError> {
    if looks_like_key_sequence(input) {
        return Ok(input.chars().filter_map(Key::from_char).collect());
    }

    input
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, key)| {
            Key::from_char(key).ok_or(CalcError::InvalidKey { key, position })
        })
        .collect()
}

//! Expression evaluation using an operator stack and an operand stack.
//!
//! Expressions arrive as a flat token sequence alternating operands and
//! operators (`[12, +, 3, *, 4]`). Evaluation never fails loudly: malformed
//! sequences and arithmetic faults come back as NaN or infinite values, and
//! [`Outcome`] maps NaN and positive infinity to the "Undefined" display state.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::display::{UNDEFINED_TEXT, format_number};

/// One of the four keypad operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// Map a keypad symbol to its operator.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Get the keypad symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Precedence rank. Lower ranks bind tighter: `*` and `/` are 0,
    /// `+` and `-` are 1.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Multiply | Self::Divide => 0,
            Self::Add | Self::Subtract => 1,
        }
    }

    /// Apply the operator with IEEE-754 semantics, so `x / 0` yields an
    /// infinity or NaN rather than panicking.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single entry of an expression sequence.
///
/// Serializes untagged, so a sequence reads as `[12.0, "+", 3.0]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
    Operand(f64),
    Operator(Operator),
}

/// Result of evaluating a completed expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A usable result. Negative infinity lands here and shows as `-Infinity`.
    Value {
        /// The numeric value.
        value: f64,
        /// The value as shown on the calculator.
        text: String,
    },
    /// Evaluation produced NaN or positive infinity.
    Undefined {
        /// The raw value.
        value: f64,
    },
}

impl Outcome {
    /// Classify an evaluated value. Only NaN and positive infinity are undefined.
    pub fn from_value(value: f64) -> Self {
        if value.is_nan() || value == f64::INFINITY {
            Self::Undefined { value }
        } else {
            Self::Value {
                text: format_number(value),
                value,
            }
        }
    }

    /// Check if this is a usable result.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value { .. })
    }

    /// Get the raw numeric value.
    pub fn value(&self) -> f64 {
        match self {
            Self::Value { value, .. } | Self::Undefined { value } => *value,
        }
    }

    /// Get the text shown for this outcome.
    pub fn text(&self) -> &str {
        match self {
            Self::Value { text, .. } => text,
            Self::Undefined { .. } => UNDEFINED_TEXT,
        }
    }
}

/// Get the precedence rank of an operator.
pub fn precedence(operator: Operator) -> u8 {
    operator.precedence()
}

/// Evaluate `lhs operator rhs`.
pub fn apply_operator(operator: Operator, lhs: f64, rhs: f64) -> f64 {
    operator.apply(lhs, rhs)
}

/// Evaluate an alternating operand/operator sequence.
///
/// Operators of equal rank are reduced left to right. Whatever is left on
/// the operator stack after the walk is drained from the top. A sequence
/// that does not alternate, or that ends on an operator, evaluates to NaN.
pub fn evaluate(tokens: &[Token]) -> f64 {
    let mut operands: Vec<f64> = Vec::with_capacity(tokens.len() / 2 + 1);
    let mut operators: Vec<Operator> = Vec::with_capacity(tokens.len() / 2);

    for (idx, token) in tokens.iter().enumerate() {
        match (idx % 2, token) {
            (0, Token::Operand(value)) => operands.push(*value),
            (1, Token::Operator(incoming)) => {
                while let Some(&top) = operators.last() {
                    if incoming.precedence() < top.precedence() {
                        break;
                    }
                    operators.pop();
                    reduce(&mut operands, top);
                }
                operators.push(*incoming);
            }
            _ => return f64::NAN,
        }
    }

    while let Some(operator) = operators.pop() {
        reduce(&mut operands, operator);
    }

    operands.pop().unwrap_or(f64::NAN)
}

/// Pop rhs then lhs, push `lhs op rhs`. Missing operands read as NaN.
fn reduce(operands: &mut Vec<f64>, operator: Operator) {
    let rhs = operands.pop().unwrap_or(f64::NAN);
    let lhs = operands.pop().unwrap_or(f64::NAN);
    operands.push(operator.apply(lhs, rhs));
}

/// Check whether the operator ranks never decrease from left to right.
///
/// Only then does evaluating a prefix of the expression give the same
/// running value a user expects to see before the expression is finished.
pub fn can_incrementally_evaluate(tokens: &[Token]) -> bool {
    let ranks: Vec<u8> = tokens
        .iter()
        .filter_map(|token| match token {
            Token::Operator(op) => Some(op.precedence()),
            Token::Operand(_) => None,
        })
        .collect();

    ranks.windows(2).all(|pair| pair[1] >= pair[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: f64) -> Token {
        Token::Operand(value)
    }

    fn op(symbol: char) -> Token {
        Token::Operator(Operator::from_symbol(symbol).unwrap())
    }

    #[test]
    fn test_single_operand() {
        assert_eq!(evaluate(&[n(42.0)]), 42.0);
        assert_eq!(evaluate(&[n(-0.5)]), -0.5);
    }

    #[test]
    fn test_binary_operations() {
        assert_eq!(evaluate(&[n(6.0), op('+'), n(3.0)]), 9.0);
        assert_eq!(evaluate(&[n(6.0), op('-'), n(3.0)]), 3.0);
        assert_eq!(evaluate(&[n(6.0), op('*'), n(3.0)]), 18.0);
        assert_eq!(evaluate(&[n(6.0), op('/'), n(3.0)]), 2.0);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate(&[n(2.0), op('+'), n(3.0), op('*'), n(4.0)]), 14.0);
        assert_eq!(evaluate(&[n(2.0), op('*'), n(3.0), op('+'), n(4.0)]), 10.0);
        assert_eq!(
            evaluate(&[n(2.0), op('+'), n(3.0), op('*'), n(4.0), op('*'), n(5.0)]),
            62.0
        );
        assert_eq!(
            evaluate(&[n(10.0), op('-'), n(2.0), op('*'), n(3.0), op('-'), n(1.0)]),
            3.0
        );
    }

    #[test]
    fn test_equal_precedence_is_left_to_right() {
        assert_eq!(evaluate(&[n(8.0), op('-'), n(3.0), op('-'), n(2.0)]), 3.0);
        assert_eq!(evaluate(&[n(8.0), op('/'), n(4.0), op('/'), n(2.0)]), 1.0);
        assert_eq!(evaluate(&[n(8.0), op('/'), n(4.0), op('*'), n(2.0)]), 4.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate(&[n(5.0), op('/'), n(0.0)]), f64::INFINITY);
        assert_eq!(evaluate(&[n(-5.0), op('/'), n(0.0)]), f64::NEG_INFINITY);
        assert!(evaluate(&[n(0.0), op('/'), n(0.0)]).is_nan());
    }

    #[test]
    fn test_malformed_sequences_are_nan() {
        assert!(evaluate(&[]).is_nan());
        assert!(evaluate(&[n(1.0), op('+')]).is_nan());
        assert!(evaluate(&[op('+'), n(1.0)]).is_nan());
        assert!(evaluate(&[n(1.0), n(2.0)]).is_nan());
    }

    #[test]
    fn test_nan_operand_propagates() {
        assert!(evaluate(&[n(f64::NAN), op('*'), n(2.0)]).is_nan());
    }

    #[test]
    fn test_can_incrementally_evaluate() {
        assert!(!can_incrementally_evaluate(&[n(1.0), op('+'), n(2.0), op('*')]));
        assert!(can_incrementally_evaluate(&[n(1.0), op('*'), n(2.0), op('+')]));
        assert!(can_incrementally_evaluate(&[n(1.0), op('-'), n(2.0), op('+')]));
        assert!(can_incrementally_evaluate(&[n(1.0), op('/')]));
        assert!(can_incrementally_evaluate(&[n(1.0)]));
        assert!(can_incrementally_evaluate(&[]));
    }

    #[test]
    fn test_operator_symbols() {
        for symbol in ['+', '-', '*', '/'] {
            let operator = Operator::from_symbol(symbol).unwrap();
            assert_eq!(operator.symbol(), symbol);
            assert_eq!(operator.to_string(), symbol.to_string());
        }
        assert_eq!(Operator::from_symbol('^'), None);
        assert_eq!(precedence(Operator::Divide), 0);
        assert_eq!(precedence(Operator::Subtract), 1);
        assert_eq!(apply_operator(Operator::Subtract, 1.0, 4.0), -3.0);
    }

    #[test]
    fn test_outcome() {
        let outcome = Outcome::from_value(15.0);
        assert!(outcome.is_value());
        assert_eq!(outcome.text(), "15");

        let outcome = Outcome::from_value(f64::INFINITY);
        assert!(!outcome.is_value());
        assert_eq!(outcome.text(), "Undefined");
        assert!(Outcome::from_value(f64::NAN).value().is_nan());
    }

    #[test]
    fn test_negative_infinity_is_a_value() {
        let outcome = Outcome::from_value(f64::NEG_INFINITY);
        assert!(outcome.is_value());
        assert_eq!(outcome.text(), "-Infinity");
    }
}

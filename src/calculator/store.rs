//! The running expression and the operand being typed.

use serde::Serialize;
use tracing::debug;

use super::evaluation::{Operator, Outcome, Token, evaluate};
use crate::error::CalcError;

/// A single keypad digit: `0`-`9` or the decimal point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    pub const DECIMAL_POINT: Self = Self('.');

    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_digit() || c == '.' {
            Ok(Self(c))
        } else {
            Err(CalcError::InvalidDigit(c))
        }
    }
}

/// Read-only copy of the calculator state.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Snapshot {
    /// Committed tokens, each operand followed by its operator.
    pub expression: Vec<Token>,
    /// The operand being typed.
    pub current_number: String,
}

/// Convert typed operand text to a number.
///
/// Empty text counts as 0 and anything unparseable as NaN, so a stray second
/// decimal point or an "Undefined" left on screen silently poisons the
/// expression rather than failing.
pub fn coerce_operand(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // `f64::from_str` also accepts "inf" and "nan", which are not numbers here.
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Holds the operator-terminated expression and the pending operand.
#[derive(Clone, Debug, Default)]
pub struct ExpressionStore {
    expression: Vec<Token>,
    current_number: String,
    strict: bool,
}

impl ExpressionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject operators and evaluation while no operand has been typed,
    /// instead of treating the empty operand as 0.
    pub fn with_strict_operands(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Get the committed tokens.
    pub fn expression(&self) -> &[Token] {
        &self.expression
    }

    /// Get the operand being typed.
    pub fn current_number(&self) -> &str {
        &self.current_number
    }

    /// Get a copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            expression: self.expression.clone(),
            current_number: self.current_number.clone(),
        }
    }

    /// Append a digit or decimal point to the pending operand.
    pub fn append_digit(&mut self, digit: Digit) {
        self.current_number.push(digit.as_char());
        debug!(current_number = %self.current_number, "appended digit");
    }

    /// Commit the pending operand together with `operator`.
    pub fn commit_operator(&mut self, operator: Operator) -> Result<(), CalcError> {
        let operand = self.pending_operand()?;
        self.expression.push(Token::Operand(operand));
        self.expression.push(Token::Operator(operator));
        self.current_number.clear();
        debug!(expression = ?self.expression, "committed operator");
        Ok(())
    }

    /// Evaluate the expression completed by the pending operand.
    ///
    /// The result text becomes the new pending operand. The expression is
    /// cleared even when the result is undefined.
    pub fn finalize_and_evaluate(&mut self) -> Result<Outcome, CalcError> {
        let operand = self.pending_operand()?;
        let mut completed = self.expression.clone();
        completed.push(Token::Operand(operand));

        let outcome = Outcome::from_value(evaluate(&completed));
        self.current_number = outcome.text().to_string();
        self.expression.clear();

        debug!(expression = ?completed, result = %self.current_number, "evaluated expression");
        Ok(outcome)
    }

    /// Clear the expression and the pending operand.
    pub fn reset(&mut self) {
        self.expression.clear();
        self.current_number.clear();
        debug!("reset expression store");
    }

    fn pending_operand(&self) -> Result<f64, CalcError> {
        if self.strict && self.current_number.is_empty() {
            return Err(CalcError::EmptyOperand);
        }
        Ok(coerce_operand(&self.current_number))
    }
}

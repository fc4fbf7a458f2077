//! Errors raised at the edges of the calculator core.
//!
//! Arithmetic failures never show up here: the evaluator reports them as
//! NaN or infinite values, which the display maps to "Undefined".

use thiserror::Error;

/// Rejected input for the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// An operator or evaluation was requested with nothing typed, and
    /// strict operands are enabled.
    #[error("no operand entered before operator or evaluation")]
    EmptyOperand,

    /// A character that is neither a decimal digit nor a decimal point.
    #[error("'{0}' is not a digit or decimal point")]
    InvalidDigit(char),

    /// A character in a key sequence that maps to no calculator key.
    #[error("unrecognised key '{key}' at position {position}")]
    InvalidKey { key: char, position: usize },
}

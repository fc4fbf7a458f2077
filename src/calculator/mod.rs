//! Calculator module for keypad-driven arithmetic.
//!
//! This module provides functionality to:
//! - Hold the running expression and the operand being typed
//! - Evaluate expressions with operator precedence
//! - Format live and final results for a fixed-width screen
//! - Map typed characters to keypad keys

mod display;
mod evaluation;
mod keys;
mod session;
mod store;

pub use display::{
    DEFAULT_DISPLAY_WIDTH, ERROR_TEXT, UNDEFINED_TEXT, format_number, render,
};
pub use evaluation::{
    Operator, Outcome, Token, apply_operator, can_incrementally_evaluate, evaluate, precedence,
};
pub use keys::{Key, looks_like_key_sequence, parse_keys};
pub use session::Calculator;
pub use store::{Digit, ExpressionStore, Snapshot, coerce_operand};

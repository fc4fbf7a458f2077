//! # calcpad
//!
//! The core of a keypad calculator. Keys feed an [`ExpressionStore`] that
//! keeps the committed expression and the operand being typed. The
//! evaluator reduces the expression with an operator stack and an operand
//! stack, so `*` and `/` bind tighter than `+` and `-`. The display shows
//! either the operand being typed, a running total while operator
//! precedence allows one, or the final result.
//!
//! ```
//! use calcpad::{Calculator, parse_keys};
//!
//! let mut calculator = Calculator::default();
//! for key in parse_keys("2+3*4=").unwrap() {
//!     calculator.press(key).unwrap();
//! }
//! assert_eq!(calculator.display_string(), "14");
//! ```

pub mod calculator;
pub mod config;
pub mod error;

pub use calculator::{
    Calculator, Digit, ExpressionStore, Key, Operator, Outcome, Snapshot, Token, evaluate,
    parse_keys,
};
pub use config::Config;
pub use error::CalcError;

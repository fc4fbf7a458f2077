//! Display formatting for the calculator screen.

use super::evaluation::{Token, can_incrementally_evaluate, evaluate};
use super::store::Snapshot;

/// Shown when an evaluation produces NaN or positive infinity.
pub const UNDEFINED_TEXT: &str = "Undefined";

/// Shown when the text would not fit on the screen.
pub const ERROR_TEXT: &str = "Error";

/// Screen width in characters.
pub const DEFAULT_DISPLAY_WIDTH: usize = 9;

/// Format a number the way the keypad shows it.
///
/// Shortest round-trip digits, no trailing `.0` on integers, and exponent
/// form (`1e+21`, `1.5e-7`) for very large or very small magnitudes.
/// The output parses back to the same value.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    // Also folds -0 into 0.
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }

    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Render the text for a state snapshot.
///
/// Returns `None` when nothing new should be shown, in which case the caller
/// keeps whatever is already on screen.
pub fn render(snapshot: &Snapshot, width: usize) -> Option<String> {
    let candidate = if !snapshot.current_number.is_empty() {
        snapshot.current_number.clone()
    } else if snapshot.expression.is_empty() {
        return None;
    } else if can_incrementally_evaluate(&snapshot.expression) {
        // A trailing operator has no right-hand side yet.
        let completed = match snapshot.expression.split_last() {
            Some((Token::Operator(_), rest)) => rest,
            _ => &snapshot.expression[..],
        };
        format_number(evaluate(completed))
    } else {
        return None;
    };

    if candidate.chars().count() > width {
        Some(ERROR_TEXT.to_string())
    } else {
        Some(candidate)
    }
}

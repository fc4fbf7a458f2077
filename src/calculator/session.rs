//! A calculator session: the expression store plus what is on screen.

use tracing::{trace, warn};

use super::display::render;
use super::evaluation::{Operator, Outcome};
use super::keys::Key;
use super::store::{Digit, ExpressionStore, Snapshot};
use crate::config::Config;
use crate::error::CalcError;

/// One calculator, owned by whatever drives the keypad.
///
/// Every entry point refreshes the display. When the new state has nothing
/// to show (an expression whose precedence prevents a running total), the
/// previous text stays on screen.
#[derive(Clone, Debug)]
pub struct Calculator {
    store: ExpressionStore,
    display_width: usize,
    display: String,
}

impl Calculator {
    /// Create a calculator with an empty screen.
    pub fn new(config: &Config) -> Self {
        Self {
            store: ExpressionStore::new().with_strict_operands(config.strict_operands),
            display_width: config.display_width,
            display: String::new(),
        }
    }

    /// Type a digit or decimal point.
    pub fn append_digit(&mut self, digit: Digit) {
        self.store.append_digit(digit);
        self.refresh();
    }

    /// Press an operator key.
    pub fn commit_operator(&mut self, operator: Operator) -> Result<(), CalcError> {
        self.store.commit_operator(operator)?;
        self.refresh();
        Ok(())
    }

    /// Press `=`.
    pub fn evaluate_and_finalize(&mut self) -> Result<Outcome, CalcError> {
        let outcome = self.store.finalize_and_evaluate()?;
        if !outcome.is_value() {
            warn!(value = outcome.value(), "expression evaluated to an undefined value");
        }
        self.refresh();
        Ok(outcome)
    }

    /// Clear the expression, the pending operand and the screen.
    pub fn reset(&mut self) {
        self.store.reset();
        self.display.clear();
    }

    /// Dispatch a single key press.
    pub fn press(&mut self, key: Key) -> Result<(), CalcError> {
        match key {
            Key::Digit(digit) => self.append_digit(digit),
            Key::Operator(operator) => self.commit_operator(operator)?,
            Key::Equals => {
                self.evaluate_and_finalize()?;
            }
            Key::Clear => self.reset(),
        }
        Ok(())
    }

    /// The text currently on screen.
    pub fn display_string(&self) -> &str {
        &self.display
    }

    /// Get a copy of the expression state.
    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    fn refresh(&mut self) {
        if let Some(text) = render(&self.store.snapshot(), self.display_width) {
            self.display = text;
        }
        trace!(display = %self.display, "refreshed display");
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

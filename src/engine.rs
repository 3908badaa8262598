//! The calculator engine: applies input tokens to calculator state.

use crate::core::{parse_operand, CalculatorState, DisplayFormat, Entry, Operator, Phase, Token};
use crate::snapshot::{Snapshot, SnapshotError};
use serde::Serialize;
use tracing::{debug, warn};

/// The two formatted lines a view shows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Readout {
    /// Previous operand and pending operator symbol, or empty.
    pub previous: String,
    /// Current operand or the error sentinel.
    pub current: String,
}

/// Stateful reducer over calculator input.
///
/// No operation fails: a division by zero is stored as an error entry and
/// malformed operands make `compute` a no-op.
///
/// # Example
///
/// ```rust
/// use abacus::core::Operator;
/// use abacus::engine::Calculator;
///
/// let mut calculator = Calculator::new();
/// calculator.append_digit('5');
/// calculator.choose_operation(Operator::Add);
/// calculator.append_digit('3');
/// calculator.compute();
/// assert_eq!(calculator.display().current, "8");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
    format: DisplayFormat,
}

impl Calculator {
    /// Create a cleared calculator with default formatting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cleared calculator with the given formatting hook.
    pub fn with_format(format: DisplayFormat) -> Self {
        Self {
            state: CalculatorState::default(),
            format,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Get current phase (pure)
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn format(&self) -> &DisplayFormat {
        &self.format
    }

    /// Dispatch one token.
    pub fn apply(&mut self, token: Token) {
        let from = self.phase();
        match token {
            Token::Digit(c) => self.append_digit(c),
            Token::Operator(op) => self.choose_operation(op),
            Token::Equals => self.compute(),
            Token::AllClear => self.clear(),
            Token::Delete => self.delete_last_char(),
        }
        let to = self.phase();
        if from != to {
            debug!(from = from.name(), to = to.name(), ?token, "phase changed");
        }
    }

    /// Reset to `"0"`, no previous operand, no operator.
    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
        debug!("cleared");
    }

    /// Remove the last character of the current operand.
    pub fn delete_last_char(&mut self) {
        self.restart_unusable_entry();
        let Entry::Input(text) = &mut self.state.current else {
            return;
        };
        if text.as_str() == "0" || text.is_empty() {
            return;
        }
        text.pop();
        if text.is_empty() {
            text.push('0');
        }
    }

    /// Append a digit or the decimal point to the current operand.
    pub fn append_digit(&mut self, digit: char) {
        if !(digit.is_ascii_digit() || digit == '.') {
            warn!(%digit, "ignoring non-digit input");
            return;
        }
        self.restart_unusable_entry();
        let Entry::Input(text) = &mut self.state.current else {
            return;
        };
        if digit == '.' && text.contains('.') {
            return;
        }
        if text.as_str() == "0" && digit != '.' {
            text.clear();
        }
        text.push(digit);
    }

    /// Select the pending operator, reducing any earlier pending operation first.
    pub fn choose_operation(&mut self, operator: Operator) {
        self.clear_if_errored();
        if self.state.is_blank() {
            return;
        }
        if !self.state.previous.is_empty() {
            self.compute();
        }
        // a division by zero while reducing leaves nothing to carry forward
        if self.state.current.is_error() {
            return;
        }
        let current = std::mem::take(&mut self.state.current);
        self.state.previous = current.as_text().to_string();
        self.state.operator = Some(operator);
        debug!(previous = %self.state.previous, %operator, "operator chosen");
    }

    /// Resolve the pending operation into the current operand.
    pub fn compute(&mut self) {
        let Some(previous) = parse_operand(&self.state.previous) else {
            return;
        };
        let Some(current) = self.state.current.value() else {
            return;
        };
        let Some(operator) = self.state.operator else {
            return;
        };

        let result = operator.apply(previous, current);
        if let Err(error) = &result {
            warn!(%previous, %operator, %current, %error, "arithmetic error");
        }
        self.state.current = Entry::from_result(result);
        self.state.operator = None;
        self.state.previous.clear();
        debug!(result = %self.state.current, "computed");
    }

    /// Format operand text with this calculator's formatting hook (pure).
    pub fn format_for_display(&self, operand: &str) -> String {
        self.format.format_operand(operand)
    }

    /// Both display lines for the current state (pure).
    pub fn display(&self) -> Readout {
        let previous = match self.state.operator {
            Some(operator) => format!(
                "{} {}",
                self.format_for_display(&self.state.previous),
                operator.symbol()
            ),
            None => String::new(),
        };
        Readout {
            previous,
            current: self.format_for_display(self.state.current.as_text()),
        }
    }

    /// Capture the state for export.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.state.clone())
    }

    /// Replace the state with a validated snapshot.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<(), SnapshotError> {
        snapshot.validate()?;
        self.state = snapshot.state;
        debug!(phase = self.phase().name(), "state restored");
        Ok(())
    }

    fn clear_if_errored(&mut self) {
        if self.state.current.is_error() {
            debug!("input after error, clearing first");
            self.clear();
        }
    }

    // editing `inf` or `NaN` would produce text that is neither a number nor a result
    fn restart_unusable_entry(&mut self) {
        self.clear_if_errored();
        if self.state.current.is_non_finite() {
            debug!(entry = %self.state.current, "editing non-finite result, restarting entry");
            self.state.current = Entry::zero();
        }
    }
}

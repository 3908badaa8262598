//! Calculator state and the phase it is in.
//!
//! `CalculatorState` is plain data. The rules that move it between phases
//! live in the engine; this module only describes and inspects it.

use super::entry::Entry;
use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// Everything the calculator remembers between inputs.
///
/// # Example
///
/// ```rust
/// use abacus::core::{CalculatorState, Phase};
///
/// let state = CalculatorState::default();
/// assert_eq!(state.current.as_text(), "0");
/// assert!(state.previous.is_empty());
/// assert_eq!(state.operator, None);
/// assert_eq!(state.phase(), Phase::Idle);
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operand being typed, or the last result.
    pub current: Entry,
    /// Left operand captured when an operator was chosen; empty when none.
    pub previous: String,
    /// Operation waiting for its right operand.
    pub operator: Option<Operator>,
}

impl CalculatorState {
    /// Phase implied by the current contents.
    pub fn phase(&self) -> Phase {
        if self.current.is_error() {
            Phase::Errored
        } else if self.operator.is_some() {
            Phase::PendingOperation
        } else {
            Phase::Idle
        }
    }

    /// True when nothing has been typed and nothing is pending.
    pub fn is_blank(&self) -> bool {
        self.current.is_zero() && self.previous.is_empty()
    }
}

/// Coarse position of the calculator in its input cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// No operation is pending.
    Idle,
    /// An operator has been chosen and waits for the right operand.
    PendingOperation,
    /// A division by zero is displayed.
    Errored,
}

impl Phase {
    /// Name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::PendingOperation => "PendingOperation",
            Self::Errored => "Errored",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::PendingOperation)
    }

    /// Errored is terminal: only a clear leaves it.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Errored)
    }
}

//! Binary operators and their arithmetic.

use super::entry::ArithmeticError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four binary operations the calculator can hold pending.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol shown after the previous operand while the operation is pending.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Map a keyboard character to its operator.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operation to `lhs` and `rhs`.
    ///
    /// Pure. Division by zero is the only failure and is returned as a value
    /// so the caller can store it in the display rather than abort.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, ArithmeticError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(ArithmeticError::DivisionByZero),
            Self::Divide => Ok(lhs / rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

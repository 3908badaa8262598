//! The current operand: text being typed, or an arithmetic error.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Text shown in place of a result when a division by zero occurs.
pub const DIVISION_BY_ZERO_SENTINEL: &str = "Error: Div by 0";

/// How `f64` renders results that are not finite.
pub const NON_FINITE_RESULTS: [&str; 3] = ["inf", "-inf", "NaN"];

/// Arithmetic failures that are stored as calculator state.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArithmeticError {
    #[error("Error: Div by 0")]
    DivisionByZero,
}

/// Contents of the current operand line.
///
/// An `Input` always holds non-empty text with at most one `.`; the engine
/// maintains this. `Error` is terminal until the calculator is cleared.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entry {
    Input(String),
    Error(ArithmeticError),
}

impl Entry {
    /// The placeholder `"0"` a fresh calculator shows.
    pub fn zero() -> Self {
        Self::Input("0".to_string())
    }

    /// Entry holding the rendering of a computed value.
    pub fn from_result(result: Result<f64, ArithmeticError>) -> Self {
        match result {
            Ok(value) => Self::Input(value.to_string()),
            Err(error) => Self::Error(error),
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Input(text) if text == "0")
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// True for an overflowed or undefined result such as `inf`.
    pub fn is_non_finite(&self) -> bool {
        matches!(self, Self::Input(text) if NON_FINITE_RESULTS.contains(&text.as_str()))
    }

    /// Raw text of the entry; the sentinel for errors.
    pub fn as_text(&self) -> &str {
        match self {
            Self::Input(text) => text,
            Self::Error(ArithmeticError::DivisionByZero) => DIVISION_BY_ZERO_SENTINEL,
        }
    }

    /// Numeric value, if the text is a plain decimal number.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Input(text) => parse_operand(text),
            Self::Error(_) => None,
        }
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

/// Whether `text` has a shape the engine can hold as an operand.
///
/// That is a non-empty run of digits with at most one `.` and an optional
/// leading `-` (partial entries such as `"-"` or `"0."` included), or one of
/// [`NON_FINITE_RESULTS`].
pub fn is_operand_text(text: &str) -> bool {
    if NON_FINITE_RESULTS.contains(&text) {
        return true;
    }
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    !text.is_empty()
        && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
        && unsigned.matches('.').count() <= 1
}

/// Parse operand text written in plain decimal notation.
///
/// Accepts an optional leading `-`, digits and at most one `.`, with at least
/// one digit overall. `"5."` and `".5"` parse; `"."`, `"-"`, `""`, `"inf"`
/// and `"NaN"` do not.
pub fn parse_operand(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let mut digits = 0usize;
    let mut points = 0usize;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return None,
        }
    }
    if digits == 0 || points > 1 {
        return None;
    }
    text.parse().ok()
}

//! Core calculator types.
//!
//! This module holds the data the calculator works on:
//! - Operand entries and the division-by-zero error value
//! - Operators and their arithmetic
//! - The state record and its derived phase
//! - Input tokens and the keyboard table
//! - Display formatting
//!
//! Everything here is pure. Mutation happens only in [`crate::engine`].

mod entry;
mod format;
mod operator;
mod state;
mod token;

pub use entry::{
    is_operand_text, parse_operand, ArithmeticError, Entry, DIVISION_BY_ZERO_SENTINEL,
    NON_FINITE_RESULTS,
};
pub use format::DisplayFormat;
pub use operator::Operator;
pub use state::{CalculatorState, Phase};
pub use token::Token;

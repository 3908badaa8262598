//! Abacus: a keystroke-driven four-function calculator
//!
//! The calculator is a small state machine. Input arrives as discrete
//! tokens (digits, the decimal point, four operators, equals, clear and
//! delete) and each token is applied to completion before the next one.
//! Operations never fail; a division by zero is kept as an error value in
//! the display until the calculator is cleared.
//!
//! # Modules
//!
//! - [`core`]: state, operators, tokens and display formatting (pure)
//! - [`engine`]: the [`Calculator`] that applies tokens to state
//! - [`adapter`]: keyboard mapping, views and the interactive terminal
//! - [`config`]: TOML configuration for the display formatting hook
//! - [`snapshot`]: versioned JSON export and import of state
//!
//! # Example
//!
//! ```rust
//! use abacus::{Calculator, Token};
//!
//! let mut calculator = Calculator::new();
//! for key in ["5", "+", "3", "*", "2", "Enter"] {
//!     if let Some(token) = Token::from_key(key) {
//!         calculator.apply(token);
//!     }
//! }
//!
//! // strictly left to right: (5 + 3) * 2
//! assert_eq!(calculator.display().current, "16");
//! ```

pub mod adapter;
pub mod config;
pub mod core;
pub mod engine;
pub mod logging;
pub mod snapshot;

// Re-export commonly used types
pub use self::core::{ArithmeticError, CalculatorState, DisplayFormat, Entry, Operator, Phase, Token};
pub use engine::{Calculator, Readout};

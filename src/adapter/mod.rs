//! Presentation adapters.
//!
//! An adapter turns raw key input into [`Token`]s, drives a [`Calculator`]
//! and pushes the resulting [`Readout`] to a [`View`] after every recognized
//! key. Unrecognized keys leave both the calculator and the view untouched.

pub mod keyboard;
pub mod terminal;

use crate::core::Token;
use crate::engine::{Calculator, Readout};
use std::io::{self, Write};
use tracing::trace;

/// Named keys accepted as whole words; everything else is split into characters.
pub const NAMED_KEYS: [&str; 3] = ["Enter", "Backspace", "Escape"];

/// Something that can show the two display lines.
pub trait View {
    fn render(&mut self, readout: &Readout) -> io::Result<()>;
}

/// Discards every readout.
impl View for () {
    fn render(&mut self, _readout: &Readout) -> io::Result<()> {
        Ok(())
    }
}

/// Keeps every readout in order.
impl View for Vec<Readout> {
    fn render(&mut self, readout: &Readout) -> io::Result<()> {
        self.push(readout.clone());
        Ok(())
    }
}

/// Writes each readout as two plain text lines.
pub struct LineView<W: Write> {
    out: W,
}

impl<W: Write> LineView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> View for LineView<W> {
    fn render(&mut self, readout: &Readout) -> io::Result<()> {
        writeln!(self.out, "{}", readout.previous)?;
        writeln!(self.out, "{}", readout.current)?;
        self.out.flush()
    }
}

/// A calculator wired to a view.
pub struct Session<V: View> {
    calculator: Calculator,
    view: V,
}

impl<V: View> Session<V> {
    pub fn new(calculator: Calculator, view: V) -> Self {
        Self { calculator, view }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_parts(self) -> (Calculator, V) {
        (self.calculator, self.view)
    }

    /// Render the current state without applying input.
    pub fn refresh(&mut self) -> io::Result<()> {
        self.view.render(&self.calculator.display())
    }

    /// Apply a token and refresh the view.
    pub fn handle_token(&mut self, token: Token) -> io::Result<()> {
        self.calculator.apply(token);
        self.refresh()
    }

    /// Apply a key by name; returns whether it was recognized.
    pub fn handle_key(&mut self, key: &str) -> io::Result<bool> {
        match Token::from_key(key) {
            Some(token) => {
                self.handle_token(token)?;
                Ok(true)
            }
            None => {
                trace!(key, "ignoring unrecognized key");
                Ok(false)
            }
        }
    }
}

/// Split a command-line argument into key names.
///
/// A named key stays whole; any other argument is one key per character.
pub fn split_keys(arg: &str) -> Vec<String> {
    if NAMED_KEYS.contains(&arg) {
        vec![arg.to_string()]
    } else {
        arg.chars().map(String::from).collect()
    }
}

//! Interactive raw-mode terminal front end.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};
use tracing::debug;

use super::keyboard::{key_to_action, KeyAction};
use super::{Session, View};
use crate::engine::{Calculator, Readout};

const WIDTH: usize = 28;
const HELP: &str = "0-9 . + - * /   Enter =   Backspace   Esc AC   q quit";

/// Draws the readout right-aligned in a small frame.
pub struct TerminalView {
    out: Stdout,
}

impl TerminalView {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

/// Right-align `text` in the frame, keeping the tail if it is too long.
fn fit(text: &str) -> String {
    let len = text.chars().count();
    if len > WIDTH {
        text.chars().skip(len - WIDTH).collect()
    } else {
        format!("{text:>WIDTH$}")
    }
}

impl View for TerminalView {
    fn render(&mut self, readout: &Readout) -> io::Result<()> {
        let border = "─".repeat(WIDTH + 2);
        queue!(
            self.out,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            Print(format!("┌{border}┐")),
            cursor::MoveTo(0, 1),
            Print(format!("│ {} │", fit(&readout.previous))),
            cursor::MoveTo(0, 2),
            Print(format!("│ {} │", fit(&readout.current))),
            cursor::MoveTo(0, 3),
            Print(format!("└{border}┘")),
            cursor::MoveTo(0, 5),
            Print(HELP),
        )?;
        self.out.flush()
    }
}

/// Run the calculator interactively until the user quits.
/// Returns the calculator in its final state.
pub fn run_interactive(calculator: Calculator) -> io::Result<Calculator> {
    terminal::enable_raw_mode()?;
    let mut session = Session::new(calculator, TerminalView::new());
    execute!(io::stdout(), cursor::Hide)?;

    let result = event_loop(&mut session);

    execute!(
        io::stdout(),
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    terminal::disable_raw_mode()?;

    result?;
    let (calculator, _) = session.into_parts();
    Ok(calculator)
}

fn event_loop(session: &mut Session<TerminalView>) -> io::Result<()> {
    session.refresh()?;
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        match key_to_action(key) {
            Some(KeyAction::Quit) => {
                debug!("quit requested");
                return Ok(());
            }
            Some(KeyAction::Input(token)) => session.handle_token(token)?,
            None => {}
        }
    }
}

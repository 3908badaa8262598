//! Abacus CLI - keystroke-driven calculator
//!
//! Usage: abacus [OPTIONS] [KEYS]...
//!
//! With no keys on a terminal, starts an interactive session. Otherwise the
//! keys (from arguments, or whitespace-separated on stdin) are replayed and
//! the final display is printed.

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use abacus::adapter::{split_keys, terminal, LineView, Session, View};
use abacus::config::Config;
use abacus::logging;
use abacus::snapshot::Snapshot;
use abacus::Calculator;

/// Abacus - keystroke-driven four-function calculator
#[derive(Parser, Debug)]
#[command(name = "abacus")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Keys: 0-9 . + - * / = Enter Backspace Escape. Put keys starting with '-' after '--'. Run without keys for interactive mode.")]
struct Cli {
    /// Keys to replay; named keys (Enter, Backspace, Escape) or runs of characters like 12+3
    keys: Vec<String>,

    /// Print the display after every recognized key
    #[arg(long)]
    trace: bool,

    /// Print the final state as a JSON snapshot
    #[arg(long)]
    json: bool,

    /// Start from a JSON snapshot instead of a cleared calculator
    #[arg(long, value_name = "JSON")]
    state: Option<String>,

    /// Config file (defaults to <config dir>/abacus/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = cli.keys.is_empty() && io::stdin().is_terminal();

    if interactive {
        logging::init_file(cli.verbose);
    } else {
        logging::init_stderr(cli.verbose);
    }

    let calculator = build_calculator(&cli)?;

    let calculator = if interactive {
        info!("starting interactive session");
        terminal::run_interactive(calculator).context("Terminal session failed")?
    } else {
        let keys = if cli.keys.is_empty() {
            read_stdin_keys()?
        } else {
            cli.keys.clone()
        };
        if cli.trace {
            replay(Session::new(calculator, LineView::new(io::stdout())), &keys)?
        } else {
            replay(Session::new(calculator, ()), &keys)?
        }
    };

    if cli.json {
        println!("{}", calculator.snapshot().to_json()?);
    } else if !cli.trace || interactive {
        let readout = calculator.display();
        println!("{}", readout.previous);
        println!("{}", readout.current);
    }

    Ok(())
}

fn build_calculator(cli: &Cli) -> Result<Calculator> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let mut calculator = Calculator::with_format(config.display_format());
    if let Some(json) = &cli.state {
        let snapshot = Snapshot::from_json(json).context("Invalid --state snapshot")?;
        calculator
            .restore(snapshot)
            .context("Invalid --state snapshot")?;
    }
    Ok(calculator)
}

fn read_stdin_keys() -> Result<Vec<String>> {
    let mut keys = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read keys from stdin")?;
        keys.extend(line.split_whitespace().map(String::from));
    }
    Ok(keys)
}

fn replay<V: View>(mut session: Session<V>, args: &[String]) -> Result<Calculator> {
    for arg in args {
        for key in split_keys(arg) {
            if !session.handle_key(&key)? {
                warn!(%key, "unrecognized key");
            }
        }
    }
    let (calculator, _) = session.into_parts();
    Ok(calculator)
}

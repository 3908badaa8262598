//! Tracing subscriber setup for the two front ends.
//!
//! Scripted runs log to stderr. The interactive terminal logs only to a file,
//! since anything written to the terminal would land on the raw-mode display.

use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file for interactive sessions.
pub const LOG_FILE_ENV: &str = "ABACUS_LOG";

/// Filter directive for a `-v` count; `RUST_LOG` wins when set.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Initialize tracing to stderr for scripted runs.
pub fn init_stderr(verbose: u8) {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .init();
}

/// Initialize tracing for the interactive terminal.
///
/// Logging is disabled unless `ABACUS_LOG` names a file, so log lines never
/// land on the raw-mode display.
pub fn init_file(verbose: u8) {
    let Ok(log_path) = std::env::var(LOG_FILE_ENV) else {
        return;
    };

    let file = match std::fs::File::create(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to create log file {log_path}: {e}");
            return;
        }
    };

    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_level(true),
        )
        .init();
}

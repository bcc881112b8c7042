//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr so stdout only ever carries `Success`/`Fail`
//! and report rows.

use crate::LOG_ENV_VAR;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Filter used when `STREAMDB_LOG` is unset, by `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use std::io::Write;
use streamdb::{
    cli::StreamCli,
    commands::run,
    core::{init_logging, resolve_database_path},
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = StreamCli::parse();
    init_logging(app.verbose);

    let db_path = resolve_database_path(app.db)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    run(&mut out, &db_path, app.command)?;

    out.flush()?;
    Ok(())
}

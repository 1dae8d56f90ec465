//! Testgen CLI entry point.
//!
//! Parses arguments, loads the config, dispatches to the command handler,
//! and maps errors to exit codes.

use std::process::ExitCode;
use testgen::cli::Cli;
use testgen::config::Config;
use testgen::error::Result;
use testgen::{commands, exit_codes, logging};
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    debug!(?config, "resolved config");
    commands::dispatch(cli.command, &config)
}

//! Logging setup for the testgen CLI.
//!
//! Logs go to stderr so stdout carries only the rendered prompt. `RUST_LOG`
//! overrides the level chosen from `-v` flags.

use tracing_subscriber::EnvFilter;

/// Default filter for a given `-v` count.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

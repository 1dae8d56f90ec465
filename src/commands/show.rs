//! Implementation of the `testgen show` command.
//!
//! Prints a template exactly as registered, placeholders intact.

use super::output::write_stdout;
use crate::cli::ShowArgs;
use crate::error::Result;
use crate::prompt::PromptKey;

/// Execute the `testgen show` command.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    write_stdout(show_output(&args.key)?)
}

/// The raw template for a key or display name.
fn show_output(key: &str) -> Result<&'static str> {
    let key: PromptKey = key.parse()?;
    Ok(key.template())
}

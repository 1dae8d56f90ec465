//! Writing command output to stdout.
//!
//! A reader that closes the pipe early (`testgen render ... | head`) is not
//! an error: output stops and the command still succeeds.

use crate::error::{PromptError, Result};
use std::io::{self, Write};

/// Write `text` to stdout.
pub fn write_stdout(text: &str) -> Result<()> {
    let stdout = io::stdout();
    write_to(&mut stdout.lock(), text)
}

/// Write `text` and flush, treating `BrokenPipe` as success.
pub(crate) fn write_to<W: Write>(out: &mut W, text: &str) -> Result<()> {
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(PromptError::UserError(format!(
            "failed to write output: {}",
            e
        ))),
    }
}

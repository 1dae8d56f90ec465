//! DOM input for `testgen render`.

use crate::cli::RenderArgs;
use crate::error::{PromptError, Result};
use std::io::Read;
use std::path::PathBuf;

/// Where the page DOM comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomSource {
    /// No DOM given; `${domContent}` stays unbound.
    None,
    /// DOM passed inline with `--dom`.
    Inline(String),
    /// DOM read from a file.
    File(PathBuf),
    /// DOM read from stdin (`--dom-file -`).
    Stdin,
}

impl DomSource {
    /// Determine the DOM source from command-line arguments.
    pub fn from_args(args: &RenderArgs) -> Self {
        match (&args.dom, &args.dom_file) {
            (Some(dom), _) => DomSource::Inline(dom.clone()),
            (None, Some(path)) if path.as_os_str() == "-" => DomSource::Stdin,
            (None, Some(path)) => DomSource::File(path.clone()),
            (None, None) => DomSource::None,
        }
    }

    /// Read the DOM. Returns `None` when no source was given.
    pub fn read<R: Read>(self, mut stdin: R) -> Result<Option<String>> {
        match self {
            DomSource::None => Ok(None),
            DomSource::Inline(dom) => Ok(Some(dom)),
            DomSource::File(path) => std::fs::read_to_string(&path).map(Some).map_err(|e| {
                PromptError::UserError(format!(
                    "failed to read DOM file '{}': {}",
                    path.display(),
                    e
                ))
            }),
            DomSource::Stdin => {
                let mut dom = String::new();
                stdin.read_to_string(&mut dom).map_err(|e| {
                    PromptError::UserError(format!("failed to read DOM from stdin: {}", e))
                })?;
                Ok(Some(dom))
            }
        }
    }
}

//! Config struct definition and default implementation.

use crate::prompt::PromptKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// File name looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "testgen.yaml";

/// Configuration for prompt rendering.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prompt rendered when `render` is called without a key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_prompt: Option<PromptKey>,

    /// Escape ``` in every binding value before rendering.
    #[serde(default)]
    pub escape_code_blocks: bool,

    /// Extra bindings applied to every render. Command-line values win.
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

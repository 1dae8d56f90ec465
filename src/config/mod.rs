//! Configuration model for testgen.
//!
//! This module defines the Config struct that represents `testgen.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of config values.
//!
//! # File Format
//!
//! ```yaml
//! default_prompt: CUCUMBER_ONLY
//! escape_code_blocks: false
//! variables:
//!   author: QA Team
//! ```

mod model;
mod operations;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{Config, DEFAULT_CONFIG_FILE};

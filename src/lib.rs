//! Testgen: prompt catalog for generating test-automation code.
//!
//! Holds a fixed set of prompt templates that ask a text-generation model
//! for page objects, Cucumber feature files, step definitions, or test data,
//! given a page's DOM and URL. See [`prompt`] for the registry, key catalog
//! and renderer.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod prompt;

pub use error::{PromptError, Result};
pub use prompt::{PromptKey, render};

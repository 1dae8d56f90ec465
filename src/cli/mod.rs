//! CLI argument parsing for testgen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::exit_codes;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Testgen: prompt catalog for generating test-automation code from a page DOM.
///
/// Renders prompts that ask a text-generation model for page objects,
/// Cucumber feature files, step definitions, or test data.
#[derive(Parser, Debug)]
#[command(name = "testgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the config file (default: ./testgen.yaml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for testgen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the prompts in the catalog.
    ///
    /// Prints each symbolic key with its display name and placeholders.
    #[command(alias = "ls")]
    List(ListArgs),

    /// Print the raw, unrendered template for a prompt.
    Show(ShowArgs),

    /// Render a prompt for a page and print it to stdout.
    ///
    /// The DOM is bound to `${domContent}` and the URL to `${pageUrl}`.
    /// Placeholders left without a value stay in the output verbatim.
    Render(RenderArgs),
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Emit the catalog as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Prompt key or display name (e.g., CUCUMBER_ONLY or Cucumber-Only).
    pub key: String,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Prompt key or display name. Defaults to `default_prompt` from config.
    pub key: Option<String>,

    /// File containing the page DOM ("-" reads stdin).
    #[arg(long, conflicts_with = "dom")]
    pub dom_file: Option<PathBuf>,

    /// Page DOM given inline.
    #[arg(long)]
    pub dom: Option<String>,

    /// URL of the page.
    #[arg(long)]
    pub url: Option<String>,

    /// Extra template variable as name=value (repeatable).
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,

    /// Escape ``` in all values before rendering.
    #[arg(long)]
    pub escape_fences: bool,
}

/// Parse a `name=value` pair. The value may itself contain `=`.
fn parse_var(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!(
            "invalid variable name '{}': names may only contain letters, digits and '_'",
            name
        ));
    }
    Ok((name.to_string(), value.to_string()))
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// Argument errors exit with `USER_ERROR` rather than clap's default of 2,
    /// which is reserved for unknown prompt keys. `--help` and `--version`
    /// exit with `SUCCESS`.
    pub fn parse_args() -> Self {
        match Cli::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                let _ = err.print();
                std::process::exit(parse_error_exit_code(&err));
            }
        }
    }
}

/// Exit code for a clap parse outcome that did not produce a `Cli`.
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        exit_codes::USER_ERROR
    } else {
        exit_codes::SUCCESS
    }
}

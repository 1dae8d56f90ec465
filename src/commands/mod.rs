//! Command implementations for testgen.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod list;
mod output;
mod render;
mod show;

use crate::cli::Command;
use crate::config::Config;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::List(args) => list::cmd_list(args),
        Command::Show(args) => show::cmd_show(args),
        Command::Render(args) => render::cmd_render(args, config),
    }
}

//! Implementation of the `testgen render` command.
//!
//! Resolves the prompt key, assembles bindings from config, flags and the
//! DOM source, renders the prompt, and prints it to stdout.
//!
//! Binding precedence (later wins): config `variables`, `--var`, then
//! `--url` and the DOM.

mod input;


use super::output::write_stdout;
use crate::cli::RenderArgs;
use crate::config::Config;
use crate::error::{PromptError, Result};
use crate::prompt::{DOM_CONTENT, PageContext, PromptKey, render_prompt, unbound_placeholders};
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, warn};

pub use input::DomSource;

/// Execute the `testgen render` command.
pub fn cmd_render(args: RenderArgs, config: &Config) -> Result<()> {
    let stdin = std::io::stdin();
    let mut prompt = render_output(&args, config, stdin.lock())?;
    prompt.push('\n');
    write_stdout(&prompt)
}

/// Render the requested prompt. `stdin` is only read for `--dom-file -`.
pub(crate) fn render_output<R: Read>(
    args: &RenderArgs,
    config: &Config,
    stdin: R,
) -> Result<String> {
    let key = resolve_key(args.key.as_deref(), config)?;
    let dom = DomSource::from_args(args).read(stdin)?;
    let bindings = build_bindings(args, config, dom);

    for name in unbound_placeholders(key.template(), &bindings) {
        warn!(prompt = %key, placeholder = %name, "placeholder left unbound");
    }

    render_prompt(key, &bindings)
}

/// Pick the key from the argument, falling back to the configured default.
fn resolve_key(arg: Option<&str>, config: &Config) -> Result<PromptKey> {
    match arg {
        Some(key) => key.parse(),
        None => config.default_prompt.ok_or_else(|| {
            PromptError::UserError(
                "no prompt key given and no default_prompt configured.\n\n\
                 Use `testgen list` to see available keys."
                    .to_string(),
            )
        }),
    }
}

fn build_bindings(
    args: &RenderArgs,
    config: &Config,
    dom: Option<String>,
) -> HashMap<String, String> {
    let has_dom = dom.is_some();
    let mut ctx = PageContext::new(dom.unwrap_or_default());
    ctx.extra = config.variables.clone();
    for (name, value) in &args.vars {
        ctx.extra.insert(name.clone(), value.clone());
    }
    if let Some(url) = &args.url {
        ctx = ctx.with_url(url.clone());
    }
    if args.escape_fences || config.escape_code_blocks {
        debug!("escaping code fences in binding values");
        ctx = ctx.escaped();
    }

    let mut bindings = ctx.to_bindings();
    if !has_dom {
        // A `--var domContent=...` still applies when no DOM source was given.
        match ctx.extra.get(DOM_CONTENT) {
            Some(value) => bindings.insert(DOM_CONTENT.to_string(), value.clone()),
            None => bindings.remove(DOM_CONTENT),
        };
    }
    bindings
}

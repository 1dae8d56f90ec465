//! Placeholder substitution for prompt templates.
//!
//! # Syntax
//!
//! - `${name}` - Replaced by the binding for `name`, where `name` matches
//!   `[A-Za-z0-9_]+`
//!
//! Substitution is a single literal pass over the template text. Values are
//! inserted verbatim and never rescanned, so a value containing `${...}` is
//! not expanded. Placeholders without a binding are left in the output as-is
//! and bindings that match no placeholder are ignored; neither is an error.

use super::catalog;
use super::key::PromptKey;
use crate::error::Result;
use regex::{Captures, Regex};
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;
use tracing::debug;

/// Regex pattern for a `${name}` placeholder.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z0-9_]+)\}").expect("Invalid placeholder regex")
});

/// Markdown code-fence delimiter.
const CODE_FENCE: &str = "```";

/// Render the template registered under `key`.
///
/// Every `${name}` with a binding is replaced by its value; the result is
/// trimmed of leading and trailing whitespace.
///
/// # Returns
///
/// * `Ok(String)` - The rendered prompt
/// * `Err(PromptError::TemplateNotFound)` - If `key` is not registered
///
/// # Examples
///
/// ```
/// use testgen::prompt::{render, vars};
///
/// let bindings = vars([("domContent", "<input id='name'/>")]);
/// let prompt = render("TESTDATA_JSON_ONLY", &bindings).unwrap();
/// assert!(prompt.contains("<input id='name'/>"));
/// assert!(!prompt.contains("${domContent}"));
/// ```
pub fn render(key: &str, bindings: &HashMap<String, String>) -> Result<String> {
    let template = catalog::template(key)?;
    debug!(key, bindings = bindings.len(), "rendering prompt");
    Ok(substitute(template, bindings).trim().to_string())
}

/// Render the template for a catalog key.
pub fn render_prompt(key: PromptKey, bindings: &HashMap<String, String>) -> Result<String> {
    render(key.as_str(), bindings)
}

/// Replace every bound `${name}` in `template`, without trimming.
pub fn substitute(template: &str, bindings: &HashMap<String, String>) -> String {
    if bindings.is_empty() {
        return template.to_string();
    }

    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| match bindings.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Names of all placeholders that appear in `template`.
pub fn placeholders(template: &str) -> BTreeSet<String> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Placeholders in `template` that have no entry in `bindings`.
pub fn unbound_placeholders(template: &str, bindings: &HashMap<String, String>) -> Vec<String> {
    placeholders(template)
        .into_iter()
        .filter(|name| !bindings.contains_key(name))
        .collect()
}

/// Escape markdown code fences so a value cannot close a fence in the template.
///
/// Each ```` ``` ```` becomes `` \`\`\` ``. Not applied by [`render`]; callers
/// run it over binding values when they need it.
pub fn escape_code_blocks(text: &str) -> String {
    text.replace(CODE_FENCE, r"\`\`\`")
}

/// Helper to create a bindings map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

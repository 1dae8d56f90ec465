//! Template registry.
//!
//! Templates are compiled into the binary and indexed once, on first use,
//! into a process-wide map from symbolic key to template text. The map is
//! never mutated afterwards, so concurrent readers need no locking.

use super::key::PromptKey;
use super::template::placeholders;
use crate::error::{PromptError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

const SELENIUM_JAVA_PAGE_ONLY: &str = include_str!("templates/selenium_java_page_only.md");
const CUCUMBER_ONLY: &str = include_str!("templates/cucumber_only.md");
const CUCUMBER_WITH_SELENIUM_JAVA_STEPS: &str =
    include_str!("templates/cucumber_with_selenium_java_steps.md");
const PW_TYPESCRIPT_PAGE_ONLY: &str = include_str!("templates/pw_typescript_page_only.md");
const TESTDATA_JSON_ONLY: &str = include_str!("templates/testdata_json_only.md");
const CUCUMBER_WITH_PLAYWRIGHT_TYPESCRIPT_STEPS: &str =
    include_str!("templates/cucumber_with_playwright_typescript_steps.md");

static REGISTRY: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    PromptKey::ALL
        .into_iter()
        .map(|key| (key.as_str(), key.template()))
        .collect()
});

impl PromptKey {
    /// Raw template text for this key.
    pub fn template(&self) -> &'static str {
        match self {
            PromptKey::SeleniumJavaPageOnly => SELENIUM_JAVA_PAGE_ONLY,
            PromptKey::CucumberOnly => CUCUMBER_ONLY,
            PromptKey::CucumberWithSeleniumJavaSteps => CUCUMBER_WITH_SELENIUM_JAVA_STEPS,
            PromptKey::PwTypescriptPageOnly => PW_TYPESCRIPT_PAGE_ONLY,
            PromptKey::TestdataJsonOnly => TESTDATA_JSON_ONLY,
            PromptKey::CucumberWithPlaywrightTypescriptSteps => {
                CUCUMBER_WITH_PLAYWRIGHT_TYPESCRIPT_STEPS
            }
        }
    }
}

/// Raw template for a symbolic key, or `None` if no such template exists.
pub fn get(key: &str) -> Option<&'static str> {
    REGISTRY.get(key).copied()
}

/// Raw template for a symbolic key.
///
/// # Returns
///
/// * `Ok(&str)` - The unrendered template text
/// * `Err(PromptError::TemplateNotFound)` - If `key` is not registered
pub fn template(key: &str) -> Result<&'static str> {
    get(key).ok_or_else(|| PromptError::TemplateNotFound {
        key: key.to_string(),
    })
}

/// Registered symbolic keys, sorted.
pub fn keys() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}

/// One row of the exported catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Symbolic key accepted by `render`.
    pub key: PromptKey,
    /// Human-readable identifier.
    pub display_name: &'static str,
    /// Placeholder names the template declares.
    pub placeholders: Vec<String>,
}

/// Export every catalog entry in catalog order, for menus and `list --json`.
pub fn catalog() -> Vec<CatalogEntry> {
    PromptKey::ALL
        .into_iter()
        .map(|key| CatalogEntry {
            key,
            display_name: key.display_name(),
            placeholders: placeholders(key.template()).into_iter().collect(),
        })
        .collect()
}

//! Page context for prompt rendering.
//!
//! Collects the conventional template variables (`domContent`, `pageUrl`)
//! plus any caller-defined extras into a `PageContext` that converts to a
//! bindings map for [`render`](super::render).

use super::template::escape_code_blocks;
use std::collections::{BTreeMap, HashMap};

/// Variable name for the captured DOM snapshot.
pub const DOM_CONTENT: &str = "domContent";

/// Variable name for the page URL.
pub const PAGE_URL: &str = "pageUrl";

/// The page a prompt is generated for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    /// HTML snapshot of the page (or a fragment of it).
    pub dom_content: String,
    /// URL the page was captured from, if known.
    pub page_url: Option<String>,
    /// Additional bindings for templates that define their own placeholders.
    pub extra: BTreeMap<String, String>,
}

impl PageContext {
    /// Create a context for a DOM snapshot with no URL.
    pub fn new(dom_content: impl Into<String>) -> Self {
        Self {
            dom_content: dom_content.into(),
            ..Self::default()
        }
    }

    /// Set the page URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.page_url = Some(url.into());
        self
    }

    /// Add an extra binding. `domContent` and `pageUrl` always win over extras.
    pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Escape code fences in every value so none can close a fence early.
    pub fn escaped(mut self) -> Self {
        self.dom_content = escape_code_blocks(&self.dom_content);
        self.page_url = self.page_url.map(|url| escape_code_blocks(&url));
        for value in self.extra.values_mut() {
            *value = escape_code_blocks(value);
        }
        self
    }

    /// Convert the context to template bindings.
    ///
    /// `pageUrl` is only bound when a URL is set, so templates that reference
    /// it keep the literal placeholder otherwise.
    pub fn to_bindings(&self) -> HashMap<String, String> {
        let mut vars: HashMap<String, String> = self
            .extra
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        vars.insert(DOM_CONTENT.to_string(), self.dom_content.clone());
        if let Some(url) = &self.page_url {
            vars.insert(PAGE_URL.to_string(), url.clone());
        }

        vars
    }
}

//! Prompt catalog for test-automation code generation.
//!
//! This module provides:
//!
//! - **Catalog**: The fixed registry of prompt templates, keyed by symbolic name
//! - **Key**: Symbolic keys and their human-readable display names
//! - **Template**: `${name}` substitution and the code-fence escape helper
//! - **Context**: Typed page context (`domContent`, `pageUrl`) for bindings
//!
//! # Template Syntax
//!
//! Templates use `${name}` placeholders:
//!
//! ~~~text
//! Context:
//! DOM:
//! ```html
//! ${domContent}
//! ```
//! URL: ${pageUrl}
//! ~~~
//!
//! Unbound placeholders are left in the output literally.

mod catalog;
mod context;
mod key;
mod template;


pub use catalog::{CatalogEntry, catalog, get, keys, template};
pub use context::{DOM_CONTENT, PAGE_URL, PageContext};
pub use key::{PromptKey, display_name};
pub use template::{
    escape_code_blocks, placeholders, render, render_prompt, substitute, unbound_placeholders,
    vars,
};

//! Error types for testgen.
//!
//! Uses thiserror for derive macros. Only `TemplateNotFound` can come out of
//! the registry and renderer; the other variants belong to the CLI and
//! config layers.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for testgen operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// No template is registered under the given key.
    #[error("prompt template not found: {key}")]
    TemplateNotFound {
        /// The key that was looked up.
        key: String,
    },

    /// A key or display name could not be resolved to a catalog entry.
    #[error("unknown prompt key '{0}' (run `testgen list` to see available keys)")]
    UnknownKey(String),

    /// User provided invalid arguments or unreadable input.
    #[error("{0}")]
    UserError(String),

    /// Config file could not be read, parsed or validated.
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::TemplateNotFound { .. } => exit_codes::NOT_FOUND,
            PromptError::UnknownKey(_) => exit_codes::NOT_FOUND,
            PromptError::UserError(_) => exit_codes::USER_ERROR,
            PromptError::ConfigError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for testgen operations.
pub type Result<T> = std::result::Result<T, PromptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_not_found_names_the_key() {
        let err = PromptError::TemplateNotFound {
            key: "NONEXISTENT_KEY".to_string(),
        };
        assert_eq!(err.to_string(), "prompt template not found: NONEXISTENT_KEY");
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn unknown_key_has_not_found_exit_code() {
        let err = PromptError::UnknownKey("nope".to_string());
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
        assert!(err.to_string().contains("'nope'"));
    }

    #[test]
    fn user_and_config_errors_are_user_errors() {
        let err = PromptError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(err.to_string(), "bad argument");

        let err = PromptError::ConfigError("bad yaml".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(err.to_string(), "Config error: bad yaml");
    }
}

//! Config loading, validation, and serialization.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{PromptError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// Valid placeholder identifier.
static VARIABLE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("Invalid variable name regex"));

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Config))` - Successfully loaded and validated config
    /// * `Ok(None)` - The file does not exist
    /// * `Err(PromptError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();

        if !path.exists() {
            debug!(path = %path.display(), "no config file");
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_yaml(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(Some(config))
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path (`--config`) must exist. Without one, `testgen.yaml`
    /// in the working directory is used if present, otherwise defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        Self::resolve_with_default(explicit, Path::new(DEFAULT_CONFIG_FILE))
    }

    /// [`Config::resolve`] with the implicit config path given.
    pub fn resolve_with_default(explicit: Option<&Path>, default_path: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path)?.ok_or_else(|| {
                PromptError::ConfigError(format!("config file '{}' not found", path.display()))
            }),
            None => Ok(Self::load(default_path)?.unwrap_or_default()),
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Every key in `variables` must be a valid placeholder name
    /// (`[A-Za-z0-9_]+`), otherwise it could never match a template.
    pub fn validate(&self) -> Result<()> {
        for name in self.variables.keys() {
            if !VARIABLE_NAME_REGEX.is_match(name) {
                return Err(PromptError::ConfigError(format!(
                    "invalid variable name '{}': names may only contain letters, digits and '_'",
                    name
                )));
            }
        }

        Ok(())
    }
}

//! Key catalog: symbolic prompt keys and their display names.
//!
//! Every catalog entry has a stable symbolic key (`CUCUMBER_ONLY`) that
//! selects a template in the registry, and a human-readable display name
//! (`Cucumber-Only`) used by selection menus and logs.

use crate::error::{PromptError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A prompt in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PromptKey {
    /// Selenium Java page object class, no test code.
    SeleniumJavaPageOnly,
    /// Cucumber feature file only.
    CucumberOnly,
    /// Cucumber feature file plus Selenium Java step definitions.
    CucumberWithSeleniumJavaSteps,
    /// Playwright TypeScript page object class, no test code.
    PwTypescriptPageOnly,
    /// Realistic test data for the page's input fields as JSON.
    TestdataJsonOnly,
    /// Cucumber feature file plus Playwright TypeScript step definitions.
    CucumberWithPlaywrightTypescriptSteps,
}

impl PromptKey {
    /// All catalog keys, in catalog order.
    pub const ALL: [PromptKey; 6] = [
        PromptKey::SeleniumJavaPageOnly,
        PromptKey::CucumberOnly,
        PromptKey::CucumberWithSeleniumJavaSteps,
        PromptKey::PwTypescriptPageOnly,
        PromptKey::TestdataJsonOnly,
        PromptKey::CucumberWithPlaywrightTypescriptSteps,
    ];

    /// The symbolic key used to look the template up in the registry.
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKey::SeleniumJavaPageOnly => "SELENIUM_JAVA_PAGE_ONLY",
            PromptKey::CucumberOnly => "CUCUMBER_ONLY",
            PromptKey::CucumberWithSeleniumJavaSteps => "CUCUMBER_WITH_SELENIUM_JAVA_STEPS",
            PromptKey::PwTypescriptPageOnly => "PW_TYPESCRIPT_PAGE_ONLY",
            PromptKey::TestdataJsonOnly => "TESTDATA_JSON_ONLY",
            PromptKey::CucumberWithPlaywrightTypescriptSteps => {
                "CUCUMBER_WITH_PLAYWRIGHT_TYPESCRIPT_STEPS"
            }
        }
    }

    /// The human-readable identifier shown to users.
    pub fn display_name(&self) -> &'static str {
        match self {
            PromptKey::SeleniumJavaPageOnly => "Selenium-Java-Page-Only",
            PromptKey::CucumberOnly => "Cucumber-Only",
            PromptKey::CucumberWithSeleniumJavaSteps => "Cucumber-With-Selenium-Java-Steps",
            PromptKey::PwTypescriptPageOnly => "Playwright-TypeScript-Page-Only",
            PromptKey::TestdataJsonOnly => "TestData-JSON-Only",
            PromptKey::CucumberWithPlaywrightTypescriptSteps => {
                "Cucumber-With-Playwright-TypeScript-Steps"
            }
        }
    }

    /// Look a key up by its exact symbolic name.
    pub fn from_symbol(symbol: &str) -> Option<PromptKey> {
        Self::ALL.into_iter().find(|k| k.as_str() == symbol)
    }

    /// Look a key up by its display name, ignoring ASCII case.
    pub fn from_display_name(name: &str) -> Option<PromptKey> {
        Self::ALL
            .into_iter()
            .find(|k| k.display_name().eq_ignore_ascii_case(name))
    }
}

/// Display name for a symbolic key, or `None` if the key is not in the catalog.
pub fn display_name(key: &str) -> Option<&'static str> {
    PromptKey::from_symbol(key).map(|k| k.display_name())
}

impl fmt::Display for PromptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts either the symbolic key or the display name, case-insensitively.
impl FromStr for PromptKey {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        PromptKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(trimmed))
            .or_else(|| PromptKey::from_display_name(trimmed))
            .ok_or_else(|| PromptError::UnknownKey(s.to_string()))
    }
}

impl Serialize for PromptKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PromptKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

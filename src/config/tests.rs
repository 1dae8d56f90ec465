//! Tests for config functionality.

use crate::config::Config;
use crate::error::PromptError;
use crate::prompt::PromptKey;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.default_prompt, None);
    assert!(!config.escape_code_blocks);
    assert!(config.variables.is_empty());
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
default_prompt: TESTDATA_JSON_ONLY
escape_code_blocks: true
variables:
  author: QA Team
  suite_name: smoke
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.default_prompt, Some(PromptKey::TestdataJsonOnly));
    assert!(config.escape_code_blocks);
    assert_eq!(config.variables.get("author").unwrap(), "QA Team");
    assert_eq!(config.variables.get("suite_name").unwrap(), "smoke");
}

#[test]
fn test_default_prompt_accepts_display_name() {
    let config = Config::from_yaml("default_prompt: Cucumber-Only\n").unwrap();
    assert_eq!(config.default_prompt, Some(PromptKey::CucumberOnly));
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
escape_code_blocks: true
future_option: 42
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert!(config.escape_code_blocks);
}

#[test]
fn test_unknown_default_prompt_rejected() {
    let err = Config::from_yaml("default_prompt: NOT_A_PROMPT\n").unwrap_err();
    assert!(matches!(err, PromptError::ConfigError(_)));
    assert!(err.to_string().contains("NOT_A_PROMPT"));
}

#[test]
fn test_invalid_variable_name_rejected() {
    let yaml = r#"
variables:
  "page url": x
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("invalid variable name 'page url'"));
}

#[test]
fn test_malformed_yaml_rejected() {
    let err = Config::from_yaml("variables: [unterminated").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_yaml_round_trip() {
    let mut config = Config {
        default_prompt: Some(PromptKey::CucumberWithSeleniumJavaSteps),
        escape_code_blocks: true,
        ..Config::default()
    };
    config
        .variables
        .insert("author".to_string(), "QA Team".to_string());

    let yaml = config.to_yaml().unwrap();
    assert!(yaml.contains("default_prompt: CUCUMBER_WITH_SELENIUM_JAVA_STEPS"));
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_load_missing_file_is_none() {
    let temp_dir = TempDir::new().unwrap();
    let loaded = Config::load(temp_dir.path().join("testgen.yaml")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("testgen.yaml");
    fs::write(&path, "default_prompt: CUCUMBER_ONLY\n").unwrap();

    let loaded = Config::load(&path).unwrap().unwrap();
    assert_eq!(loaded.default_prompt, Some(PromptKey::CucumberOnly));
}

#[test]
fn test_load_invalid_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("testgen.yaml");
    fs::write(&path, "variables:\n  bad-name: x\n").unwrap();

    assert!(Config::load(&path).is_err());
}

#[test]
fn test_resolve_explicit_path_must_exist() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("custom.yaml");
    let implicit = temp_dir.path().join("testgen.yaml");
    fs::write(&implicit, "escape_code_blocks: true\n").unwrap();

    let err = Config::resolve_with_default(Some(missing.as_path()), &implicit).unwrap_err();
    assert!(matches!(err, PromptError::ConfigError(_)));
    assert!(err.to_string().contains("not found"));
    assert!(err.to_string().contains("custom.yaml"));
}

#[test]
fn test_resolve_explicit_path_wins_over_implicit() {
    let temp_dir = TempDir::new().unwrap();
    let explicit = temp_dir.path().join("custom.yaml");
    let implicit = temp_dir.path().join("testgen.yaml");
    fs::write(&explicit, "default_prompt: CUCUMBER_ONLY\n").unwrap();
    fs::write(&implicit, "default_prompt: TESTDATA_JSON_ONLY\n").unwrap();

    let config = Config::resolve_with_default(Some(explicit.as_path()), &implicit).unwrap();
    assert_eq!(config.default_prompt, Some(PromptKey::CucumberOnly));
}

#[test]
fn test_resolve_implicit_path_is_optional() {
    let temp_dir = TempDir::new().unwrap();
    let implicit = temp_dir.path().join("testgen.yaml");

    let config = Config::resolve_with_default(None, &implicit).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_resolve_implicit_path_is_loaded_when_present() {
    let temp_dir = TempDir::new().unwrap();
    let implicit = temp_dir.path().join("testgen.yaml");
    fs::write(&implicit, "default_prompt: TESTDATA_JSON_ONLY\n").unwrap();

    let config = Config::resolve_with_default(None, &implicit).unwrap();
    assert_eq!(config.default_prompt, Some(PromptKey::TestdataJsonOnly));
}

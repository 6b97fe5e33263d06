//! Configuration file support for maven-dependency-explorer.
//!
//! Provides YAML-based configuration through
//! `maven-dependency-explorer.config.yml` files, including data structures,
//! file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::dependency_graph::services::FoldStrategy;
use crate::shared::error::ExplorerError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "maven-dependency-explorer.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub fold: Option<String>,
    pub maven: Option<MavenConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// How Maven is invoked.
#[derive(Debug, Deserialize, Default)]
pub struct MavenConfig {
    pub executable: Option<String>,
    /// Extra arguments, as typed on a command line (e.g. `-o -s settings.xml`).
    pub options: Option<String>,
    pub prefer_maven_wrapper: Option<bool>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to `null`.
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let invalid = |message: String| anyhow::Error::from(ExplorerError::Validation { message });

    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            return Err(invalid(format!(
                "Invalid config: format: {}\n\n💡 Hint: Use 'json' or 'tree'.",
                e
            )));
        }
    }

    if let Some(ref fold) = config.fold {
        if let Err(e) = FoldStrategy::from_str(fold) {
            return Err(invalid(format!(
                "Invalid config: fold: {}\n\n💡 Hint: Use 'reverse', 'forward' or 'linked'.",
                e
            )));
        }
    }

    if let Some(executable) = config.maven.as_ref().and_then(|m| m.executable.as_deref()) {
        if executable.trim().is_empty() {
            return Err(invalid(
                "Invalid config: maven.executable must not be empty.\n\n\
                 💡 Hint: Remove the field to use 'mvn', or give a path such as /opt/maven/bin/mvn."
                    .to_string(),
            ));
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
    if let Some(ref maven) = config.maven {
        for key in maven.unknown_fields.keys() {
            eprintln!(
                "⚠️  Warning: Unknown config field 'maven.{}' will be ignored.",
                key
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
format: tree
fold: linked
maven:
  executable: /opt/maven/bin/mvn
  options: "-o -s settings.xml"
  prefer_maven_wrapper: true
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format.as_deref(), Some("tree"));
        assert_eq!(config.fold.as_deref(), Some("linked"));
        let maven = config.maven.unwrap();
        assert_eq!(maven.executable.as_deref(), Some("/opt/maven/bin/mvn"));
        assert_eq!(maven.options.as_deref(), Some("-o -s settings.xml"));
        assert_eq!(maven.prefer_maven_wrapper, Some(true));
        assert!(maven.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        assert_eq!(config.unwrap().format.as_deref(), Some("json"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_empty_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "\n");

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.format.is_none());
        assert!(config.maven.is_none());
    }

    #[test]
    fn test_invalid_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "format: markdown\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid config: format"));
        assert!(err.contains("markdown"));
    }

    #[test]
    fn test_invalid_fold_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "fold: sideways\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid config: fold"));
    }

    #[test]
    fn test_whitespace_only_executable_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "maven:\n  executable: \"   \"\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("must not be empty"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
format: json
unknown_field: true
maven:
  goals: install
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 1);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.maven.unwrap().unknown_fields.contains_key("goals"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.format.is_none());
        assert!(config.fold.is_none());
        assert!(config.maven.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}

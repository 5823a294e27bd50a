use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::Deserialize;

use crate::engine::{ExtensionEntry, ExtensionRegistry};
use crate::reporter::ReporterKind;

pub const CONFIG_FILE_NAME: &str = ".tagscanrc.json";

/// Project configuration, loaded from [`CONFIG_FILE_NAME`] when present.
///
/// Every field is optional; CLI flags override config values. Extension
/// associations declared here are registered into the global registry at
/// startup, which is the recommended place for them (registration is
/// process-wide, so per-call registration offers no isolation anyway).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Additional recognized tags for every scan.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Glob patterns for paths to skip.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Default output format.
    #[serde(default)]
    pub reporter: Option<ReporterKind>,
    /// Run embedded-language parsers by default.
    #[serde(default)]
    pub inline_files: bool,
    /// Extra extension associations, same shape as the registry's entries.
    #[serde(default)]
    pub associations: HashMap<String, ExtensionEntry>,
}

impl Config {
    /// Load the config file from `dir`, if one exists.
    pub fn load(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(config))
    }

    /// Validate configuration values.
    ///
    /// Returns an error for malformed glob patterns in `ignores` or
    /// malformed extension associations.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Dry-run the associations against a scratch registry so config
        // errors surface at startup rather than mid-scan.
        if !self.associations.is_empty() {
            ExtensionRegistry::empty()
                .register(&self.associations)
                .context("Invalid entry in 'associations'")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.tags.is_empty());
        assert!(config.reporter.is_none());
        assert!(!config.inline_files);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parses_full_config() {
        let json = r#"{
            "tags": ["review"],
            "ignores": ["**/node_modules/**"],
            "reporter": "json",
            "inlineFiles": true,
            "associations": { ".cls": { "parserName": "defaultParser" } }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.tags, vec!["review"]);
        assert_eq!(config.reporter, Some(ReporterKind::Json));
        assert!(config.inline_files);
        assert_eq!(
            config.associations[".cls"],
            ExtensionEntry::new("defaultParser")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_glob() {
        let config = Config {
            ignores: vec!["[".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_association() {
        let json = r#"{ "associations": { "cls": { "parserName": "defaultParser" } } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{ "tags": ["hack"] }"#).unwrap();
        let config = Config::load(dir.path()).unwrap().unwrap();
        assert_eq!(config.tags, vec!["hack"]);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }
}

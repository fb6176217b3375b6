//! Size bot configuration.
//!
//! Loads thresholds and the critical allow-list from TOML. Every field has a
//! default, so an empty file (or no file at all) yields the stock policy.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::config::{
    DEFAULT_CRITICAL_ARTIFACTS, DEFAULT_CRITICAL_THRESHOLD, DEFAULT_EXTENSION,
    DEFAULT_LINK_TEMPLATE, DEFAULT_SIGNIFICANCE_THRESHOLD, DEFAULT_SKIP_PATH_PATTERNS,
};
use super::error::ConfigError;

/// Complete size bot configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SizeBotConfig {
    /// Fractional raw change above which an artifact is critical
    pub critical_threshold: f64,

    /// Fractional raw change above which an artifact is significant
    pub significance_threshold: f64,

    /// Artifacts that are always reported, in display order
    pub allow_list: Vec<String>,

    /// Deep-link template with `{head}`, `{base}` and `{path}` placeholders
    pub link_template: String,

    /// Artifact file extension, without the leading dot
    pub extension: String,

    /// Skip the report when every changed source file contains one of these
    pub skip_path_patterns: Vec<String>,
}

impl Default for SizeBotConfig {
    fn default() -> Self {
        Self {
            critical_threshold: DEFAULT_CRITICAL_THRESHOLD,
            significance_threshold: DEFAULT_SIGNIFICANCE_THRESHOLD,
            allow_list: DEFAULT_CRITICAL_ARTIFACTS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            link_template: DEFAULT_LINK_TEMPLATE.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            skip_path_patterns: DEFAULT_SKIP_PATH_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl SizeBotConfig {
    /// Check the semantic rules TOML cannot express
    ///
    /// # Errors
    /// * `ConfigError::Invalid` - non-positive or non-finite threshold,
    ///   empty extension, or a duplicated allow-list entry
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("critical_threshold", self.critical_threshold),
            ("significance_threshold", self.significance_threshold),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if self.extension.trim_start_matches('.').is_empty() {
            return Err(ConfigError::Invalid("extension must not be empty".to_string()));
        }

        let mut seen = HashSet::new();
        for path in &self.allow_list {
            if !seen.insert(path.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "allow_list contains {} more than once",
                    path
                )));
            }
        }

        Ok(())
    }

    /// Whether a change set only touches paths matching `skip_path_patterns`
    ///
    /// An empty change set never qualifies: it means the caller did not
    /// say what changed.
    pub fn only_touches_skipped_paths(&self, changed_files: &[String]) -> bool {
        !changed_files.is_empty()
            && !self.skip_path_patterns.is_empty()
            && changed_files.iter().all(|file| {
                self.skip_path_patterns
                    .iter()
                    .any(|pattern| file.contains(pattern.as_str()))
            })
    }

    /// Extension without a leading dot (`.js` and `js` are both accepted)
    pub fn normalized_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    /// Render the effective configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Load a configuration from a TOML file and validate it
///
/// # Errors
/// * `ConfigError::Io` - If file cannot be read
/// * `ConfigError::Parse` - If TOML is invalid
/// * `ConfigError::Invalid` - If values break a semantic rule
///
/// # Example
/// ```ignore
/// let config = load_config("sizebot.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SizeBotConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: SizeBotConfig = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: SizeBotConfig = toml::from_str("").unwrap();
        assert_eq!(config, SizeBotConfig::default());
        assert_eq!(config.allow_list.len(), 4);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: SizeBotConfig = toml::from_str(
            r#"
            critical_threshold = 0.05
            allow_list = ["main.js"]
            "#,
        )
        .unwrap();

        assert_eq!(config.critical_threshold, 0.05);
        assert_eq!(config.significance_threshold, DEFAULT_SIGNIFICANCE_THRESHOLD);
        assert_eq!(config.allow_list, vec!["main.js".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_threshold() {
        let config = SizeBotConfig {
            significance_threshold: 0.0,
            ..SizeBotConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_duplicate_allow_list_entry() {
        let config = SizeBotConfig {
            allow_list: vec!["a.js".to_string(), "a.js".to_string()],
            ..SizeBotConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_extension_normalization() {
        let config = SizeBotConfig {
            extension: ".mjs".to_string(),
            ..SizeBotConfig::default()
        };
        assert_eq!(config.normalized_extension(), "mjs");

        let empty = SizeBotConfig {
            extension: ".".to_string(),
            ..SizeBotConfig::default()
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_only_touches_skipped_paths() {
        let config = SizeBotConfig::default();
        let devtools = vec![
            "packages/react-devtools-shared/src/backend.js".to_string(),
            "packages/react-devtools/README.md".to_string(),
        ];
        assert!(config.only_touches_skipped_paths(&devtools));

        let mixed = vec![
            "packages/react-devtools/README.md".to_string(),
            "packages/react-dom/src/client/ReactDOM.js".to_string(),
        ];
        assert!(!config.only_touches_skipped_paths(&mixed));
        assert!(!config.only_touches_skipped_paths(&[]));

        let no_patterns = SizeBotConfig {
            skip_path_patterns: Vec::new(),
            ..SizeBotConfig::default()
        };
        assert!(!no_patterns.only_touches_skipped_paths(&devtools));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sizebot.toml");
        fs::write(&path, "significance_threshold = 0.01\nextension = \"mjs\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.significance_threshold, 0.01);
        assert_eq!(config.extension, "mjs");
    }

    #[test]
    fn test_load_config_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sizebot.toml");
        fs::write(&path, "critical_threshold = \"lots\"").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let text = SizeBotConfig::default().to_toml_string().unwrap();
        let parsed: SizeBotConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, SizeBotConfig::default());
    }
}

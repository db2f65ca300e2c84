// Runtime configuration for the demo binaries.
// Every field has a default, so an empty TOML document is a valid config.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::data::{MAX_BASE, MIN_BASE};
use crate::error::{ExerciseError, Result};
use crate::stats::SAMPLE_DATA;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExerciseConfig {
    /// Print arrays and statistics through the `Reporter`.
    pub verbose: bool,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Base used when the demos print numbers as text.
    pub base: u32,
    /// Samples fed to the statistics demo.
    pub dataset: Vec<u8>,
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        ExerciseConfig {
            verbose: true,
            log_filter: "info".to_string(),
            base: 10,
            dataset: SAMPLE_DATA.to_vec(),
        }
    }
}

impl ExerciseConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ExerciseConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` when given, otherwise fall back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_BASE..=MAX_BASE).contains(&self.base) {
            return Err(ExerciseError::invalid_config(
                "base",
                format!("{} is outside {}..={}", self.base, MIN_BASE, MAX_BASE),
            ));
        }
        if self.dataset.is_empty() {
            return Err(ExerciseError::invalid_config("dataset", "must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ExerciseConfig::from_toml_str("").unwrap();
        assert_eq!(config, ExerciseConfig::default());
        assert_eq!(config.dataset.len(), 40);
    }

    #[test]
    fn test_partial_document() {
        let config = ExerciseConfig::from_toml_str(
            r#"
            verbose = false
            base = 16
            dataset = [1, 2, 3]
            "#,
        )
        .unwrap();

        assert!(!config.verbose);
        assert_eq!(config.base, 16);
        assert_eq!(config.dataset, vec![1, 2, 3]);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_validation_errors() {
        let err = ExerciseConfig::from_toml_str("base = 17").unwrap_err();
        assert!(matches!(err, ExerciseError::InvalidConfig { ref field, .. } if field == "base"));

        let err = ExerciseConfig::from_toml_str("dataset = []").unwrap_err();
        assert!(matches!(err, ExerciseError::InvalidConfig { ref field, .. } if field == "dataset"));
    }

    #[test]
    fn test_parse_errors() {
        // 300 does not fit in a u8 sample
        assert!(matches!(
            ExerciseConfig::from_toml_str("dataset = [300]"),
            Err(ExerciseError::Config(_))
        ));
        assert!(matches!(
            ExerciseConfig::from_toml_str("colour = true"),
            Err(ExerciseError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = \"debug\"").unwrap();
        writeln!(file, "dataset = [9, 8]").unwrap();

        let config = ExerciseConfig::load_or_default(Some(file.path())).unwrap();
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.dataset, vec![9, 8]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ExerciseConfig::load(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ExerciseError::Io(_))));
    }
}

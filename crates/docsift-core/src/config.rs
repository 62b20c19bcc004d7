/// Analyzer configuration — every tunable constant in one value.
///
/// Defaults are fixed throughput guesses (17 files/min and
/// 6.5 MiB/min locally, 50 files/min and 20 MiB/min in the cloud), the
/// 30/180/365-day age tiers and the 10 MiB large-file threshold. None of
/// these numbers is calibrated at runtime.
///
/// A TOML file only needs the keys it changes:
///
/// ```toml
/// supported_extensions = [".pdf", ".md"]
///
/// [estimate.local]
/// files_per_minute = 25.0
/// ```
use crate::analysis::age::AgeThresholds;
use crate::analysis::file_types::SupportedSet;
use crate::error::ConfigError;
use crate::estimate::recommend::RecommendConfig;
use crate::estimate::EstimateConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Supported files strictly larger than this are reported as large.
pub const DEFAULT_LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

/// Complete configuration for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Extensions the downstream indexing pipeline can parse.
    pub supported_extensions: SupportedSet,
    /// Size in bytes above which a supported file is flagged as large.
    pub large_file_threshold: u64,
    pub age: AgeThresholds,
    pub estimate: EstimateConfig,
    pub recommend: RecommendConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            supported_extensions: SupportedSet::default(),
            large_file_threshold: DEFAULT_LARGE_FILE_THRESHOLD,
            age: AgeThresholds::default(),
            estimate: EstimateConfig::default(),
            recommend: RecommendConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Load a config file, layering its keys over the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Parse TOML text, layering its keys over the defaults, and validate
    /// the result.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let overrides: toml::Table = toml::from_str(text)?;
        let mut merged = toml::Value::try_from(Self::default())?;
        merge_values(&mut merged, toml::Value::Table(overrides));

        let config: Self = merged.try_into()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the estimates meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.supported_extensions.is_empty() {
            return Err(ConfigError::Invalid(
                "supported_extensions must not be empty".into(),
            ));
        }
        self.age.validate()?;
        self.estimate.validate()?;
        self.recommend.validate()?;
        Ok(())
    }
}

/// Recursively overlay `overlay` onto `base`. Tables merge key by key;
/// any other value replaces what was there.
fn merge_values(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        AnalyzerConfig::default()
            .validate()
            .expect("defaults must validate");
    }

    /// An empty file is the default config.
    #[test]
    fn empty_toml_yields_defaults() {
        let config = AnalyzerConfig::from_toml_str("").unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }

    /// Overriding one nested key keeps every sibling at its default.
    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = AnalyzerConfig::from_toml_str(
            r#"
            large_file_threshold = 1024

            [estimate.local]
            files_per_minute = 25.0
            "#,
        )
        .unwrap();

        let defaults = AnalyzerConfig::default();
        assert_eq!(config.large_file_threshold, 1024);
        assert_eq!(config.estimate.local.files_per_minute, 25.0);
        assert_eq!(
            config.estimate.local.mib_per_minute,
            defaults.estimate.local.mib_per_minute
        );
        assert_eq!(config.estimate.cloud, defaults.estimate.cloud);
        assert_eq!(config.age, defaults.age);
    }

    /// Extensions from a config file are normalised like any other input.
    #[test]
    fn supported_extensions_are_normalised() {
        let config =
            AnalyzerConfig::from_toml_str(r#"supported_extensions = ["PDF", ".Md"]"#).unwrap();
        assert!(config.supported_extensions.contains(".pdf"));
        assert!(config.supported_extensions.contains(".md"));
        assert!(!config.supported_extensions.contains(".txt"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AnalyzerConfig::from_toml_str("large_file_treshold = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn wrong_types_are_rejected() {
        let err = AnalyzerConfig::from_toml_str(r#"large_file_threshold = "big""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn non_positive_throughput_is_invalid() {
        let err = AnalyzerConfig::from_toml_str(
            r#"
            [estimate.cloud]
            mib_per_minute = 0.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn unordered_age_thresholds_are_invalid() {
        let err = AnalyzerConfig::from_toml_str(
            r#"
            [age]
            last_month_days = 200
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn oversized_age_threshold_is_invalid() {
        let err = AnalyzerConfig::from_toml_str(
            r#"
            [age]
            last_year_days = 300000000000000
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn empty_supported_set_is_invalid() {
        let err = AnalyzerConfig::from_toml_str("supported_extensions = []").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[recommend]\nmanageable_below = 50").unwrap();

        let config = AnalyzerConfig::load(file.path()).unwrap();
        assert_eq!(config.recommend.manageable_below, 50);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = AnalyzerConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        match err {
            ConfigError::Read { path, .. } => {
                assert_eq!(path, Path::new("/definitely/not/here.toml"))
            }
            other => panic!("expected Read error, got {other:?}"),
        }
    }
}

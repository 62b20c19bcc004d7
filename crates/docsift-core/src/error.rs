/// Error types for the core crate.
///
/// Only conditions that abort a whole run live here. Per-entry scan
/// failures are ordinary data ([`crate::model::SkippedEntry`]).
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors of an analysis run.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The folder to analyse does not exist.
    #[error("folder '{}' not found", .0.display())]
    RootNotFound(PathBuf),

    /// The supplied configuration was rejected.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while loading or validating an [`crate::AnalyzerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is not valid TOML or does not match the schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The defaults could not be converted into a TOML document for merging.
    #[error("failed to encode default config: {0}")]
    Encode(#[from] toml::ser::Error),

    /// A value is syntactically fine but semantically unusable.
    #[error("invalid config: {0}")]
    Invalid(String),
}

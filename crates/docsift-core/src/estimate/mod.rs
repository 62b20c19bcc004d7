/// Processing-time and cost projections for the two embedding backends.
///
/// The estimator is a pure function of the supported file count and size.
/// Each backend is a fixed throughput profile: the slower of its files/min
/// and MiB/min rates bounds the indexing time. Cost is proportional to the
/// file count through a flat tokens-per-file guess.
pub mod recommend;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

const MIB: f64 = 1024.0 * 1024.0;

/// A fixed throughput-and-price model for one embedding backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendProfile {
    pub name: String,
    /// Short qualifier shown next to the name, e.g. "local, free".
    pub description: String,
    pub files_per_minute: f64,
    pub mib_per_minute: f64,
    /// Embedding price per 1 000 tokens. Zero for a free backend.
    pub price_per_1k_tokens: f64,
    /// The displayed time range runs from the estimate to estimate × spread.
    pub time_spread: f64,
    /// Typical answer latency in seconds, low and high.
    pub query_seconds: (u32, u32),
    /// Subjective answer quality, 1 to 5.
    pub quality: u8,
}

impl BackendProfile {
    /// Ollama embeddings on the local machine.
    pub fn local() -> Self {
        Self {
            name: "Ollama".into(),
            description: "local, free".into(),
            files_per_minute: 17.0,
            mib_per_minute: 6.5,
            price_per_1k_tokens: 0.0,
            time_spread: 1.3,
            query_seconds: (5, 8),
            quality: 4,
        }
    }

    /// OpenAI embeddings in the cloud.
    pub fn cloud() -> Self {
        Self {
            name: "OpenAI".into(),
            description: "cloud, paid".into(),
            files_per_minute: 50.0,
            mib_per_minute: 20.0,
            price_per_1k_tokens: 0.0001,
            time_spread: 1.2,
            query_seconds: (2, 4),
            quality: 5,
        }
    }

    /// Indexing minutes for `files` documents totalling `size_bytes`.
    pub fn minutes(&self, files: u64, size_bytes: u64) -> f64 {
        let by_files = files as f64 / self.files_per_minute;
        let by_size = size_bytes as f64 / MIB / self.mib_per_minute;
        by_files.max(by_size)
    }

    /// Minutes for `files` documents judged by the file-count rate alone.
    pub fn minutes_for_files(&self, files: u64) -> f64 {
        files as f64 / self.files_per_minute
    }

    fn validate(&self, which: &str) -> Result<(), ConfigError> {
        let positive = self.files_per_minute > 0.0
            && self.mib_per_minute > 0.0
            && self.time_spread >= 1.0
            && self.price_per_1k_tokens >= 0.0;
        if !positive {
            return Err(ConfigError::Invalid(format!(
                "{which} profile needs positive throughput, a spread of at least 1 and a non-negative price"
            )));
        }
        if !(1..=5).contains(&self.quality) {
            return Err(ConfigError::Invalid(format!(
                "{which} profile quality must be between 1 and 5"
            )));
        }
        Ok(())
    }
}

/// Estimation constants shared by both profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EstimateConfig {
    /// Rough token count per document (~500 tokens × ~10 pages).
    pub tokens_per_file: u64,
    /// Multipliers applied to the cost for the displayed range.
    pub cost_range: (f64, f64),
    /// Vector database size as a fraction of the supported document size.
    pub vector_db_ratio: f64,
    /// Projected database size above which a disk-space warning is shown.
    pub vector_db_warning_bytes: u64,
    pub currency: String,
    pub local: BackendProfile,
    pub cloud: BackendProfile,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            tokens_per_file: 5_000,
            cost_range: (1.1, 1.5),
            vector_db_ratio: 0.2,
            vector_db_warning_bytes: 1024 * 1024 * 1024,
            currency: "$".into(),
            local: BackendProfile::local(),
            cloud: BackendProfile::cloud(),
        }
    }
}

impl EstimateConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        self.local.validate("local")?;
        self.cloud.validate("cloud")?;
        let (low, high) = self.cost_range;
        if !(low > 0.0 && low <= high) {
            return Err(ConfigError::Invalid(format!(
                "cost_range must satisfy 0 < low <= high, got ({low}, {high})"
            )));
        }
        if self.vector_db_ratio.is_nan() || self.vector_db_ratio < 0.0 {
            return Err(ConfigError::Invalid(
                "vector_db_ratio must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// Projection for one backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileEstimate {
    pub name: String,
    pub description: String,
    pub minutes: f64,
    /// Upper end of the displayed time range.
    pub minutes_high: f64,
    pub cost: f64,
    pub cost_low: f64,
    pub cost_high: f64,
    pub query_seconds: (u32, u32),
    pub quality: u8,
}

impl ProfileEstimate {
    fn new(profile: &BackendProfile, files: u64, size_bytes: u64, config: &EstimateConfig) -> Self {
        let minutes = profile.minutes(files, size_bytes);
        let tokens = files as f64 * config.tokens_per_file as f64;
        let cost = tokens / 1000.0 * profile.price_per_1k_tokens;
        Self {
            name: profile.name.clone(),
            description: profile.description.clone(),
            minutes,
            minutes_high: minutes * profile.time_spread,
            cost,
            cost_low: cost * config.cost_range.0,
            cost_high: cost * config.cost_range.1,
            query_seconds: profile.query_seconds,
            quality: profile.quality,
        }
    }

    pub fn is_free(&self) -> bool {
        self.cost == 0.0
    }

    /// The cost scaled by a quoting multiplier.
    pub fn quote(&self, multiplier: f64) -> f64 {
        self.cost * multiplier
    }
}

/// Projections for both backends plus the vector database footprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateResult {
    pub local: ProfileEstimate,
    pub cloud: ProfileEstimate,
    pub vector_db_bytes: u64,
    /// True when the projected database exceeds the warning size.
    pub vector_db_warning: bool,
    pub currency: String,
}

/// Project indexing time and cost for `supported_files` documents
/// totalling `supported_size` bytes.
pub fn estimate(supported_files: u64, supported_size: u64, config: &EstimateConfig) -> EstimateResult {
    // Zero files is zero work, whatever the byte count says.
    let size = if supported_files == 0 { 0 } else { supported_size };

    let vector_db_bytes = (size as f64 * config.vector_db_ratio).round() as u64;
    EstimateResult {
        local: ProfileEstimate::new(&config.local, supported_files, size, config),
        cloud: ProfileEstimate::new(&config.cloud, supported_files, size, config),
        vector_db_bytes,
        vector_db_warning: vector_db_bytes > config.vector_db_warning_bytes,
        currency: config.currency.clone(),
    }
}

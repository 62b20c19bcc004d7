/// The assembled analysis result and the pipeline that produces it.
///
/// `analyse_folder` runs scan → aggregate → estimate → recommend in order
/// and hands back a [`Report`] for a renderer to format. It performs no
/// output of its own beyond `tracing` events.
use crate::analysis::file_types::SupportedSet;
use crate::analysis::stats::{aggregate, AggregateStats};
use crate::config::AnalyzerConfig;
use crate::error::AnalyzeError;
use crate::estimate::recommend::{recommend, Recommendation};
use crate::estimate::{estimate, EstimateResult};
use crate::scanner::scan;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime};
use tracing::info;

/// Everything a renderer needs for one folder.
#[derive(Debug, Clone)]
pub struct Report {
    pub root: PathBuf,
    /// The instant age tiers were measured from.
    pub generated_at: DateTime<Local>,
    pub supported: SupportedSet,
    /// Supported files above this size were collected as large.
    pub large_file_threshold: u64,
    pub stats: AggregateStats,
    pub estimates: EstimateResult,
    pub recommendation: Recommendation,
}

impl Report {
    /// Derive estimates and advice from already-aggregated statistics.
    pub fn from_stats(
        root: PathBuf,
        now: SystemTime,
        stats: AggregateStats,
        config: &AnalyzerConfig,
    ) -> Self {
        let estimates = estimate(stats.supported_files, stats.supported_size, &config.estimate);
        let recommendation = recommend(&stats, &estimates, config);
        Self {
            root,
            generated_at: DateTime::<Local>::from(now),
            supported: config.supported_extensions.clone(),
            large_file_threshold: config.large_file_threshold,
            stats,
            estimates,
            recommendation,
        }
    }
}

/// Analyse the folder at `root`.
///
/// Fails only when the configuration is invalid or `root` does not exist;
/// unreadable entries inside the folder are counted in
/// [`AggregateStats::skipped`].
pub fn analyse_folder(root: &Path, config: &AnalyzerConfig) -> Result<Report, AnalyzeError> {
    config.validate()?;

    let start = Instant::now();
    let now = SystemTime::now();
    let entries = scan(root)?;
    let stats = aggregate(entries, config, now);

    info!(
        "Scan of {} complete: {} files, {} skipped in {:?}",
        root.display(),
        stats.total_files,
        stats.skipped.len(),
        start.elapsed()
    );

    Ok(Report::from_stats(root.to_path_buf(), now, stats, config))
}

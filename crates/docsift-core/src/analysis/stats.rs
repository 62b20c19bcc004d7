/// Statistics aggregation — one pass over the scan stream.
///
/// The [`Aggregator`] keeps running totals only. The sole per-file state it
/// retains is the list of oversized supported files and the skip records,
/// both of which are small in practice.
use super::age::{AgeBreakdown, AgeCutoffs};
use super::file_types::{top_extensions, ExtensionBucket, SupportedSet};
use super::top_files::{top_large_files, LargeFile};
use crate::config::AnalyzerConfig;
use crate::model::{FileRecord, ScanEntry, SkippedEntry};
use compact_str::CompactString;
use std::collections::HashMap;
use std::time::SystemTime;
use tracing::debug;

/// Totals for one analysed folder. Immutable once produced.
#[derive(Debug, Clone, Default)]
pub struct AggregateStats {
    pub total_files: u64,
    pub total_size: u64,
    pub supported_files: u64,
    pub supported_size: u64,
    /// Keyed by lower-cased extension; `""` for files without one.
    pub by_extension: HashMap<CompactString, ExtensionBucket>,
    pub by_age: AgeBreakdown,
    /// Every supported file above the large-file threshold, unsorted.
    pub large_files: Vec<LargeFile>,
    pub skipped: Vec<SkippedEntry>,
}

impl AggregateStats {
    /// Mean file size in bytes, 0 for an empty folder.
    pub fn average_file_size(&self) -> u64 {
        self.total_size.checked_div(self.total_files).unwrap_or(0)
    }

    pub fn unsupported_files(&self) -> u64 {
        self.total_files - self.supported_files
    }

    /// Share of supported files in percent, 0 for an empty folder.
    pub fn supported_percent(&self) -> f64 {
        percent(self.supported_files, self.total_files)
    }

    /// Share of unsupported files in percent, 0 for an empty folder.
    pub fn unsupported_percent(&self) -> f64 {
        percent(self.unsupported_files(), self.total_files)
    }

    /// The `n` most common extensions by file count.
    pub fn top_extensions(&self, n: usize) -> Vec<(&str, ExtensionBucket)> {
        top_extensions(&self.by_extension, n)
    }

    /// The `n` largest oversized supported files, biggest first.
    pub fn top_large_files(&self, n: usize) -> Vec<LargeFile> {
        top_large_files(&self.large_files, n)
    }

    pub fn skipped_count(&self) -> u64 {
        self.skipped.len() as u64
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Consumes scan entries and maintains running totals.
pub struct Aggregator<'a> {
    supported: &'a SupportedSet,
    large_file_threshold: u64,
    cutoffs: AgeCutoffs,
    stats: AggregateStats,
}

impl<'a> Aggregator<'a> {
    /// Age cut-offs are fixed here from `now`, not re-read per file.
    pub fn new(config: &'a AnalyzerConfig, now: SystemTime) -> Self {
        Self {
            supported: &config.supported_extensions,
            large_file_threshold: config.large_file_threshold,
            cutoffs: AgeCutoffs::new(now, &config.age),
            stats: AggregateStats::default(),
        }
    }

    pub fn record(&mut self, entry: ScanEntry) {
        match entry {
            ScanEntry::File(file) => self.record_file(file),
            ScanEntry::Skipped(skipped) => self.stats.skipped.push(skipped),
        }
    }

    fn record_file(&mut self, file: FileRecord) {
        let stats = &mut self.stats;
        stats.total_files += 1;
        stats.total_size += file.size;

        let tier = self.cutoffs.classify(file.modified);
        stats.by_age.add(tier, file.size);

        let supported = self.supported.contains(&file.extension);
        let bucket = stats.by_extension.entry(file.extension).or_default();
        bucket.count += 1;
        bucket.total_size += file.size;

        if supported {
            stats.supported_files += 1;
            stats.supported_size += file.size;

            if file.size > self.large_file_threshold {
                let name = file
                    .path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| file.path.display().to_string());
                stats.large_files.push(LargeFile {
                    path: file.path,
                    name,
                    size: file.size,
                });
            }
        }
    }

    pub fn finish(self) -> AggregateStats {
        debug!(
            "Aggregated {} files ({} supported, {} large, {} skipped)",
            self.stats.total_files,
            self.stats.supported_files,
            self.stats.large_files.len(),
            self.stats.skipped.len()
        );
        self.stats
    }
}

/// Aggregate a whole scan stream in one call.
pub fn aggregate<I>(entries: I, config: &AnalyzerConfig, now: SystemTime) -> AggregateStats
where
    I: IntoIterator<Item = ScanEntry>,
{
    let mut aggregator = Aggregator::new(config, now);
    for entry in entries {
        aggregator.record(entry);
    }
    aggregator.finish()
}

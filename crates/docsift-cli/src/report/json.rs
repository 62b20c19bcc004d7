/// JSON report renderer.
///
/// Serialises a flattened view of the [`Report`]: derived totals and
/// percentages are computed here so consumers never redo the arithmetic,
/// the extension table is a sorted array, and the large-file list is capped
/// at [`ReportStyle::top_large_files`].
use super::ReportStyle;
use chrono::{DateTime, Local};
use docsift_core::analysis::{AgeBreakdown, LargeFile};
use docsift_core::estimate::recommend::Recommendation;
use docsift_core::estimate::EstimateResult;
use docsift_core::model::SkippedEntry;
use docsift_core::Report;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a Path,
    generated_at: &'a DateTime<Local>,
    supported_extensions: Vec<&'a str>,
    large_file_threshold: u64,
    totals: Totals,
    by_extension: Vec<ExtensionRow<'a>>,
    by_age: &'a AgeBreakdown,
    large_files: Vec<LargeFile>,
    skipped: &'a [SkippedEntry],
    estimates: &'a EstimateResult,
    recommendation: &'a Recommendation,
}

#[derive(Serialize)]
struct Totals {
    total_files: u64,
    total_size: u64,
    average_file_size: u64,
    supported_files: u64,
    supported_size: u64,
    supported_percent: f64,
    unsupported_files: u64,
    unsupported_percent: f64,
    skipped: u64,
}

#[derive(Serialize)]
struct ExtensionRow<'a> {
    /// Empty for files without an extension.
    extension: &'a str,
    count: u64,
    total_size: u64,
    supported: bool,
}

impl<'a> JsonReport<'a> {
    fn new(report: &'a Report, style: &ReportStyle) -> Self {
        let stats = &report.stats;
        let by_extension = stats
            .top_extensions(usize::MAX)
            .into_iter()
            .map(|(extension, bucket)| ExtensionRow {
                extension,
                count: bucket.count,
                total_size: bucket.total_size,
                supported: report.supported.contains(extension),
            })
            .collect();

        Self {
            root: &report.root,
            generated_at: &report.generated_at,
            supported_extensions: report.supported.iter().collect(),
            large_file_threshold: report.large_file_threshold,
            totals: Totals {
                total_files: stats.total_files,
                total_size: stats.total_size,
                average_file_size: stats.average_file_size(),
                supported_files: stats.supported_files,
                supported_size: stats.supported_size,
                supported_percent: stats.supported_percent(),
                unsupported_files: stats.unsupported_files(),
                unsupported_percent: stats.unsupported_percent(),
                skipped: stats.skipped_count(),
            },
            by_extension,
            by_age: &stats.by_age,
            large_files: stats.top_large_files(style.top_large_files),
            skipped: &stats.skipped,
            estimates: &report.estimates,
            recommendation: &report.recommendation,
        }
    }
}

/// Write `report` to `out` as pretty-printed JSON followed by a newline.
pub fn render_json<W: Write>(report: &Report, style: &ReportStyle, out: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport::new(report, style))?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Console report renderer.
///
/// Produces the sectioned, human-readable report: general statistics,
/// distribution by type and age, large files, per-backend estimates,
/// recommendations and the disk-space projection. Every ratio is guarded so
/// an empty folder renders without dividing by zero.
use super::ReportStyle;
use docsift_core::analysis::extension_label;
use docsift_core::estimate::recommend::{Recommendation, RecommendationTier};
use docsift_core::estimate::{EstimateResult, ProfileEstimate};
use docsift_core::model::size::{format_count, format_minutes, format_size, truncate_name};
use docsift_core::Report;
use std::io::{self, Write};
use std::path::Path;

/// Formats a [`Report`] as console text.
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    style: ReportStyle,
}

impl ReportRenderer {
    pub fn new(style: ReportStyle) -> Self {
        Self { style }
    }

    /// The title block printed before a scan starts.
    pub fn render_banner<W: Write>(&self, root: &Path, out: &mut W) -> io::Result<()> {
        self.banner(out, "📊", &format!("FOLDER ANALYSIS: {}", root.display()))?;
        writeln!(out, "{}Scanning...", self.icon("⏳"))?;
        out.flush()
    }

    /// The "folder not found" line shown instead of a report.
    pub fn render_missing<W: Write>(&self, root: &Path, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}Folder '{}' not found!", self.icon("❌"), root.display())
    }

    /// The full report, from general statistics to the closing rule.
    pub fn render<W: Write>(&self, report: &Report, out: &mut W) -> io::Result<()> {
        self.banner(out, "📈", "ANALYSIS RESULTS")?;
        self.write_general(report, out)?;
        self.write_extensions(report, out)?;
        self.write_ages(report, out)?;
        self.write_large_files(report, out)?;
        self.write_estimates(&report.estimates, out)?;
        self.write_recommendation(&report.recommendation, out)?;
        self.write_disk_space(&report.estimates, out)?;

        self.rule(out, '=')?;
        writeln!(out, "{}Analysis complete!", self.icon("✅"))?;
        self.rule(out, '=')?;
        out.flush()
    }

    // ── Sections ─────────────────────────────────────────────────────────

    fn write_general<W: Write>(&self, report: &Report, out: &mut W) -> io::Result<()> {
        let stats = &report.stats;
        self.section(out, "📁", "GENERAL STATISTICS")?;
        writeln!(out, "Total files found:      {}", format_count(stats.total_files))?;
        writeln!(out, "Total size:             {}", format_size(stats.total_size))?;
        writeln!(
            out,
            "Average size per file:  {}",
            format_size(stats.average_file_size())
        )?;
        if stats.skipped_count() > 0 {
            writeln!(
                out,
                "Unreadable entries:     {} (skipped)",
                format_count(stats.skipped_count())
            )?;
        }
        writeln!(out)?;

        writeln!(
            out,
            "{}Supported files ({}):",
            self.icon("✅"),
            report.supported.label()
        )?;
        writeln!(
            out,
            "   Count: {} ({:.1}% of total)",
            format_count(stats.supported_files),
            stats.supported_percent()
        )?;
        writeln!(out, "   Size:  {}", format_size(stats.supported_size))?;
        writeln!(out)?;

        writeln!(out, "{}Unsupported files (ignored):", self.icon("⏭️"))?;
        writeln!(
            out,
            "   Count: {} ({:.1}% of total)",
            format_count(stats.unsupported_files()),
            stats.unsupported_percent()
        )?;
        writeln!(out)
    }

    fn write_extensions<W: Write>(&self, report: &Report, out: &mut W) -> io::Result<()> {
        self.section(out, "📊", "DISTRIBUTION BY TYPE")?;
        let rows = report.stats.top_extensions(self.style.top_extensions);
        if rows.is_empty() {
            writeln!(out, "   No files found.")?;
        }
        for (ext, bucket) in rows {
            let marker = match (report.supported.contains(ext), self.style.emoji) {
                (true, true) => "✅",
                (false, true) => "⏭️",
                (true, false) => "+",
                (false, false) => "-",
            };
            writeln!(
                out,
                "{marker} {:<15} {:>6} file(s)  {:>10}",
                extension_label(ext),
                format_count(bucket.count),
                format_size(bucket.total_size)
            )?;
        }
        writeln!(out)
    }

    fn write_ages<W: Write>(&self, report: &Report, out: &mut W) -> io::Result<()> {
        self.section(out, "📅", "DISTRIBUTION BY AGE")?;
        for (tier, bucket) in report.stats.by_age.iter() {
            if bucket.count == 0 {
                continue;
            }
            writeln!(
                out,
                "   {:<16} {:>6} file(s)  {:>10}",
                tier.label(),
                format_count(bucket.count),
                format_size(bucket.total_size)
            )?;
        }
        writeln!(out)
    }

    fn write_large_files<W: Write>(&self, report: &Report, out: &mut W) -> io::Result<()> {
        let large = report.stats.top_large_files(self.style.top_large_files);
        if large.is_empty() {
            return Ok(());
        }
        self.section(
            out,
            "⚠️",
            &format!(
                "LARGE FILES (> {}) - these slow processing down",
                format_size(report.large_file_threshold)
            ),
        )?;
        for file in &large {
            writeln!(
                out,
                "   {:>10}  {}",
                format_size(file.size),
                truncate_name(&file.name, self.style.name_width)
            )?;
        }
        writeln!(out)
    }

    fn write_estimates<W: Write>(&self, estimates: &EstimateResult, out: &mut W) -> io::Result<()> {
        self.banner(out, "⏱️", "PROCESSING TIME ESTIMATES")?;
        self.write_profile(out, "🏠", &estimates.local, &estimates.currency)?;
        self.write_profile(out, "☁️", &estimates.cloud, &estimates.currency)
    }

    fn write_profile<W: Write>(
        &self,
        out: &mut W,
        icon: &str,
        est: &ProfileEstimate,
        currency: &str,
    ) -> io::Result<()> {
        self.section(
            out,
            icon,
            &format!("{} ({})", est.name.to_uppercase(), est.description),
        )?;
        writeln!(
            out,
            "{}First indexing:  {} - {} minutes ({})",
            self.icon("⏰"),
            est.minutes as u64,
            est.minutes_high as u64,
            format_minutes(est.minutes)
        )?;
        if est.is_free() {
            writeln!(out, "{}Cost:            {currency}0 (free)", self.icon("💰"))?;
        } else {
            writeln!(
                out,
                "{}Estimated cost:  {currency}{:.2} - {currency}{:.2}",
                self.icon("💰"),
                est.cost_low,
                est.cost_high
            )?;
        }
        let (fast, slow) = est.query_seconds;
        writeln!(out, "{}Time per query:  {fast}-{slow} seconds", self.icon("🔍"))?;
        writeln!(out, "{}Answer quality:  {}", self.icon("📊"), self.stars(est.quality))?;
        writeln!(out)
    }

    fn write_recommendation<W: Write>(&self, rec: &Recommendation, out: &mut W) -> io::Result<()> {
        self.banner(out, "💡", "RECOMMENDATIONS")?;
        let marker = match rec.tier {
            RecommendationTier::NoSupportedFiles => "❌",
            RecommendationTier::Manageable => "✅",
            RecommendationTier::Moderate => "👍",
            RecommendationTier::Attention => "⚠️",
            RecommendationTier::TooMany => "🚨",
        };
        if self.style.emoji {
            writeln!(out, "{marker} {}", rec.headline)?;
        } else if rec.tier.is_warning() {
            writeln!(out, "WARNING: {}", rec.headline)?;
        } else {
            writeln!(out, "{}", rec.headline)?;
        }
        for line in &rec.lines {
            if line.is_empty() {
                writeln!(out)?;
            } else {
                writeln!(out, "   {line}")?;
            }
        }
        writeln!(out)
    }

    fn write_disk_space<W: Write>(&self, estimates: &EstimateResult, out: &mut W) -> io::Result<()> {
        self.section(out, "💾", "DISK SPACE NEEDED")?;
        writeln!(
            out,
            "   Estimated vector database: {}",
            format_size(estimates.vector_db_bytes)
        )?;
        if estimates.vector_db_warning {
            writeln!(
                out,
                "   {}Large database! Make sure there is enough free space.",
                self.icon("⚠️")
            )?;
        }
        writeln!(out)
    }

    // ── Layout helpers ───────────────────────────────────────────────────

    /// `emoji` plus a space, or nothing in plain mode.
    fn icon(&self, emoji: &str) -> String {
        if self.style.emoji {
            format!("{emoji} ")
        } else {
            String::new()
        }
    }

    fn stars(&self, quality: u8) -> String {
        if self.style.emoji {
            "⭐".repeat(quality as usize)
        } else {
            format!("{quality}/5")
        }
    }

    fn rule<W: Write>(&self, out: &mut W, ch: char) -> io::Result<()> {
        let line: String = std::iter::repeat(ch).take(self.style.width).collect();
        writeln!(out, "{line}")
    }

    fn banner<W: Write>(&self, out: &mut W, icon: &str, title: &str) -> io::Result<()> {
        writeln!(out)?;
        self.rule(out, '=')?;
        writeln!(out, "{}{title}", self.icon(icon))?;
        self.rule(out, '=')?;
        writeln!(out)
    }

    fn section<W: Write>(&self, out: &mut W, icon: &str, title: &str) -> io::Result<()> {
        writeln!(out, "{}{title}", self.icon(icon))?;
        self.rule(out, '-')
    }
}

/// docsift CLI — terminal frontend over `docsift-core`.
///
/// This crate owns everything that touches the terminal: argument parsing,
/// the folder prompt, logging setup and report rendering. Business logic
/// lives in `docsift-core`.
pub mod args;
pub mod logging;
pub mod prompt;
pub mod report;

pub use args::{Cli, OutputFormat};
pub use report::{render_json, ReportRenderer, ReportStyle};

use anyhow::{Context, Result};
use docsift_core::{analyse_folder, AnalyzeError, AnalyzerConfig};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Run one analysis as described by `cli`, writing the report to stdout.
pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AnalyzerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };

    let folder = prompt::resolve_folder(cli.folder, &mut io::stdin().lock(), &mut io::stderr())
        .context("failed to read the folder path")?;
    debug!("Analysing {} as {:?}", folder.display(), cli.format);

    let style = if cli.plain {
        ReportStyle::plain()
    } else {
        ReportStyle::default()
    };

    analyse_and_render(
        &folder,
        &config,
        cli.format,
        &style,
        &mut io::stdout().lock(),
        &mut io::stderr(),
    )
}

/// Analyse `folder` and render the report to `out`.
///
/// A missing folder is not an error: a one-line notice goes to `out` in text
/// mode (to `err` in JSON mode, keeping `out` parseable) and the call
/// returns `Ok`.
pub fn analyse_and_render<W: Write, E: Write>(
    folder: &Path,
    config: &AnalyzerConfig,
    format: OutputFormat,
    style: &ReportStyle,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    let renderer = ReportRenderer::new(style.clone());

    let report_missing = |out: &mut W, err: &mut E| -> Result<()> {
        warn!("Folder {} not found", folder.display());
        match format {
            OutputFormat::Text => renderer.render_missing(folder, out)?,
            OutputFormat::Json => renderer.render_missing(folder, err)?,
        }
        Ok(())
    };

    if !folder.exists() {
        return report_missing(out, err);
    }
    if format == OutputFormat::Text {
        renderer.render_banner(folder, out)?;
    }

    let report = match analyse_folder(folder, config) {
        Ok(report) => report,
        // Removed between the check above and the scan.
        Err(AnalyzeError::RootNotFound(_)) => return report_missing(out, err),
        Err(e) => return Err(e).context("analysis failed"),
    };

    match format {
        OutputFormat::Text => renderer.render(&report, out)?,
        OutputFormat::Json => render_json(&report, style, out)?,
    }
    Ok(())
}

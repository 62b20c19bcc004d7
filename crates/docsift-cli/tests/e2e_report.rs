/// End-to-end rendering tests.
///
/// Each test builds a real directory tree with `tempfile`, runs the full
/// analyse-and-render path and inspects the bytes that would reach stdout
/// and stderr.
use docsift_cli::{analyse_and_render, OutputFormat, ReportStyle};
use docsift_core::AnalyzerConfig;
use serde_json::Value;
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;

const MIB: u64 = 1024 * 1024;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn make_file(path: &Path, size: u64) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    File::create(path).unwrap().set_len(size).unwrap();
}

/// Run the analysis and return (stdout, stderr) as strings.
fn run(folder: &Path, format: OutputFormat, style: &ReportStyle) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    analyse_and_render(
        folder,
        &AnalyzerConfig::default(),
        format,
        style,
        &mut out,
        &mut err,
    )
    .unwrap();
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

fn sample_tree(root: &Path) {
    make_file(&root.join("contracts/2024.pdf"), 15 * MIB);
    make_file(&root.join("contracts/draft.docx"), 40_000);
    make_file(&root.join("notes/todo.txt"), 120);
    make_file(&root.join("images/logo.png"), 8_000);
}

// ── Text output ──────────────────────────────────────────────────────────────

/// An empty folder renders every section without panicking.
#[test]
fn empty_folder_text_report() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let (out, err) = run(tmp.path(), OutputFormat::Text, &ReportStyle::default());

    assert!(out.contains("FOLDER ANALYSIS"));
    assert!(out.contains("Average size per file:  0 B"));
    assert!(out.contains("NO SUPPORTED FILES FOUND!"));
    assert!(out.contains("Analysis complete!"));
    assert!(err.is_empty());
}

#[test]
fn populated_folder_text_report() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    sample_tree(tmp.path());
    let (out, _) = run(tmp.path(), OutputFormat::Text, &ReportStyle::plain());

    assert!(out.contains("Total files found:      4"));
    assert!(out.contains("Supported files (DOC/DOCX/PDF/TXT):"));
    assert!(out.contains("(75.0% of total)"));
    assert!(out.contains("+ .pdf"));
    assert!(out.contains("- .png"));
    assert!(out.contains("2024.pdf"));
    assert!(out.contains("GREAT! A manageable number of files"));
}

/// A missing folder prints a notice and still succeeds.
#[test]
fn missing_folder_text_notice() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let missing = tmp.path().join("absent");
    let (out, _) = run(&missing, OutputFormat::Text, &ReportStyle::default());

    assert!(out.contains("not found!"));
    assert!(!out.contains("FOLDER ANALYSIS"), "no banner for a missing folder");
    assert!(!out.contains("GENERAL STATISTICS"));
}

// ── JSON output ──────────────────────────────────────────────────────────────

#[test]
fn json_report_parses() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    sample_tree(tmp.path());
    let (out, _) = run(tmp.path(), OutputFormat::Json, &ReportStyle::default());

    let json: Value = serde_json::from_str(&out).expect("stdout must be pure JSON");
    assert_eq!(json["totals"]["total_files"], 4);
    assert_eq!(json["totals"]["supported_files"], 3);
    assert_eq!(json["large_files"].as_array().unwrap().len(), 1);
    assert_eq!(json["large_files"][0]["name"], "2024.pdf");
    assert_eq!(json["recommendation"]["tier"], "manageable");
}

/// In JSON mode the missing-folder notice goes to stderr, leaving stdout empty.
#[test]
fn missing_folder_json_notice_on_stderr() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let missing = tmp.path().join("absent");
    let (out, err) = run(&missing, OutputFormat::Json, &ReportStyle::default());

    assert!(out.is_empty());
    assert!(err.contains("not found!"));
}

/// A user config narrows the supported set end to end.
#[test]
fn config_file_changes_supported_set() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    sample_tree(tmp.path());
    let cfg_path = tmp.path().join("docsift.toml");
    fs::write(&cfg_path, "supported_extensions = [\".png\"]\n").unwrap();
    let config = AnalyzerConfig::load(&cfg_path).unwrap();

    let mut out = Vec::new();
    let mut err = Vec::new();
    analyse_and_render(
        tmp.path(),
        &config,
        OutputFormat::Json,
        &ReportStyle::default(),
        &mut out,
        &mut err,
    )
    .unwrap();

    let json: Value = serde_json::from_slice(&out).unwrap();
    // The config file itself is scanned too.
    assert_eq!(json["totals"]["total_files"], 5);
    assert_eq!(json["totals"]["supported_files"], 1);
    assert_eq!(json["supported_extensions"][0], ".png");
}

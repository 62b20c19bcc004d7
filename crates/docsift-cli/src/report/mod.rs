/// Report rendering for the command-line frontend.
///
/// Two renderers share one [`ReportStyle`]: a sectioned console report
/// ([`text`]) and a JSON document ([`json`]). Neither touches the filesystem;
/// they format an already-built [`Report`](docsift_core::Report) into any
/// `io::Write`.
pub mod json;
pub mod text;

pub use json::render_json;
pub use text::ReportRenderer;

/// Layout knobs shared by both renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStyle {
    /// Width of the `=` and `-` rules.
    pub width: usize,
    /// Prefix headings and markers with emoji.
    pub emoji: bool,
    /// Rows in the by-extension table.
    pub top_extensions: usize,
    /// Rows in the large-files list (also caps the JSON list).
    pub top_large_files: usize,
    /// File names longer than this are cut.
    pub name_width: usize,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            width: 80,
            emoji: true,
            top_extensions: 10,
            top_large_files: 10,
            name_width: 60,
        }
    }
}

impl ReportStyle {
    /// The default style without emoji.
    pub fn plain() -> Self {
        Self {
            emoji: false,
            ..Self::default()
        }
    }
}

/// Extension bucketing and the supported-document set.
///
/// Extensions are stored lower-cased with their leading dot (".pdf"). A file
/// whose name has no suffix is keyed by the empty string and displayed as
/// [`NO_EXTENSION_LABEL`].
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Display name for the bucket of files without a suffix.
pub const NO_EXTENSION_LABEL: &str = "(no extension)";

/// Extensions the downstream indexing pipeline knows how to load.
pub const DEFAULT_SUPPORTED: [&str; 4] = [".pdf", ".txt", ".docx", ".doc"];

/// Extract the lower-cased extension of `path`, including the leading dot.
///
/// Follows the last dot of the file name: `report.tar.gz` is `.gz`. Dot-files
/// without another dot (`.bashrc`) and names ending in a dot have none.
pub fn extension_of(path: &Path) -> CompactString {
    match path.extension() {
        Some(ext) if !ext.is_empty() => {
            let lower = ext.to_string_lossy().to_lowercase();
            let mut key = CompactString::with_capacity(lower.len() + 1);
            key.push('.');
            key.push_str(&lower);
            key
        }
        _ => CompactString::default(),
    }
}

/// Display form of an extension key.
pub fn extension_label(ext: &str) -> &str {
    if ext.is_empty() {
        NO_EXTENSION_LABEL
    } else {
        ext
    }
}

/// The set of extensions counted as processable.
///
/// Entries are normalised on construction, so `"PDF"`, `"pdf"` and `".pdf"`
/// are the same member. Serialises as a plain list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SupportedSet(BTreeSet<CompactString>);

impl SupportedSet {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            extensions
                .into_iter()
                .filter_map(|ext| normalise(ext.as_ref()))
                .collect(),
        )
    }

    /// PDF, plain text and Word documents.
    pub fn documents() -> Self {
        Self::new(DEFAULT_SUPPORTED)
    }

    /// `ext` must already be in key form (lower-case, leading dot).
    pub fn contains(&self, ext: &str) -> bool {
        self.0.contains(ext)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(CompactString::as_str)
    }

    /// Short upper-case listing for headings, e.g. `DOC/DOCX/PDF/TXT`.
    pub fn label(&self) -> String {
        self.iter()
            .map(|ext| ext.trim_start_matches('.').to_uppercase())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for SupportedSet {
    fn default() -> Self {
        Self::documents()
    }
}

impl From<Vec<String>> for SupportedSet {
    fn from(extensions: Vec<String>) -> Self {
        Self::new(extensions)
    }
}

impl From<SupportedSet> for Vec<String> {
    fn from(set: SupportedSet) -> Self {
        set.0.into_iter().map(String::from).collect()
    }
}

fn normalise(ext: &str) -> Option<CompactString> {
    let trimmed = ext.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    let mut key = CompactString::with_capacity(trimmed.len() + 1);
    key.push('.');
    key.push_str(&trimmed.to_lowercase());
    Some(key)
}

/// Count and size totals for one extension.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtensionBucket {
    pub count: u64,
    pub total_size: u64,
}

/// The `n` most frequent extensions, by file count descending.
///
/// Ties are broken alphabetically so output is stable across runs.
pub fn top_extensions(
    buckets: &HashMap<CompactString, ExtensionBucket>,
    n: usize,
) -> Vec<(&str, ExtensionBucket)> {
    let mut rows: Vec<(&str, ExtensionBucket)> = buckets
        .iter()
        .map(|(ext, bucket)| (ext.as_str(), *bucket))
        .collect();
    rows.sort_by(|a, b| b.1.count.cmp(&a.1.count).then_with(|| a.0.cmp(b.0)));
    rows.truncate(n);
    rows
}

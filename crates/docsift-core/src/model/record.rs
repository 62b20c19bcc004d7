/// Per-entry scan records.
///
/// The scanner never swallows a failure silently: every entry it visits is
/// reported either as a [`FileRecord`] or as a [`SkippedEntry`] carrying the
/// reason, so callers can count and log what could not be read.
use compact_str::CompactString;
use serde::Serialize;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::SystemTime;

/// Metadata for one regular file, produced by the scanner and consumed
/// immediately by the aggregator.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    /// Logical file size in bytes.
    pub size: u64,
    /// Lower-cased suffix including the leading dot, or empty when the file
    /// name has no extension.
    pub extension: CompactString,
    pub modified: SystemTime,
}

/// Why an entry could not be turned into a [`FileRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// The process lacks permission to read the entry or its directory.
    PermissionDenied,
    /// The entry vanished mid-scan, or a symbolic link points nowhere.
    NotFound,
    /// Any other OS-level failure.
    Other(String),
}

impl SkipReason {
    /// Classify an I/O error into a skip reason.
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::NotFound => Self::NotFound,
            _ => Self::Other(err.to_string()),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PermissionDenied => f.write_str("permission denied"),
            Self::NotFound => f.write_str("not found"),
            Self::Other(message) => f.write_str(message),
        }
    }
}

/// An entry the scanner visited but could not read.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedEntry {
    /// `None` when the walker could not attribute the error to a path.
    pub path: Option<PathBuf>,
    pub reason: SkipReason,
}

/// One item of the scan stream.
#[derive(Debug, Clone)]
pub enum ScanEntry {
    File(FileRecord),
    Skipped(SkippedEntry),
}

/// Scanner module — enumerates the files of the folder under analysis.
///
/// The scan is a single serial pass with one `stat` per entry. It never
/// aborts on an individual entry: unreadable directories, vanished files
/// and dangling links come out of the stream as
/// [`ScanEntry::Skipped`](crate::model::ScanEntry::Skipped) values. The only
/// fatal condition is a root that does not exist, checked before any
/// traversal starts.
pub mod walk;

use crate::error::AnalyzeError;
use crate::model::ScanEntry;
use std::path::Path;
use tracing::info;

/// Start scanning `root`, returning a lazy stream of entries.
pub fn scan(root: &Path) -> Result<impl Iterator<Item = ScanEntry>, AnalyzeError> {
    if !root.exists() {
        return Err(AnalyzeError::RootNotFound(root.to_path_buf()));
    }

    info!("Starting scan of {}", root.display());
    Ok(walk::walk(root))
}

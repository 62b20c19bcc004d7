/// Top-N largest supported files.
///
/// The aggregator collects every oversized supported file without a cap;
/// this module picks the largest few for display.
use serde::Serialize;
use std::cmp::Ordering;
use std::path::PathBuf;

/// A supported file above the large-file threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LargeFile {
    pub path: PathBuf,
    /// Final path component, for display.
    pub name: String,
    /// File size in bytes.
    pub size: u64,
}

/// Size descending, then path ascending so equal sizes have a stable order.
fn by_size_desc(a: &LargeFile, b: &LargeFile) -> Ordering {
    b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path))
}

/// Return the `n` largest files, sorted by size descending.
///
/// Uses `select_nth_unstable_by` (O(n) average) to bring the top-N to the
/// front, then sorts only those N elements.
pub fn top_large_files(files: &[LargeFile], n: usize) -> Vec<LargeFile> {
    if n == 0 {
        return Vec::new();
    }

    let mut top: Vec<LargeFile> = files.to_vec();
    if top.len() > n {
        top.select_nth_unstable_by(n - 1, by_size_desc);
        top.truncate(n);
    }
    top.sort_unstable_by(by_size_desc);
    top
}

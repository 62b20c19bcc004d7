/// Data model for a docsift scan.
///
/// Re-exports the per-entry scan records and the display helpers.
pub mod record;
pub mod size;

pub use record::{FileRecord, ScanEntry, SkipReason, SkippedEntry};

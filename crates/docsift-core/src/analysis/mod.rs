/// Analysis modules — bucketing scanned files into aggregate statistics.

pub mod age;
pub mod file_types;
pub mod stats;
pub mod top_files;

pub use age::{AgeBreakdown, AgeBucket, AgeThresholds, AgeTier};
pub use file_types::{extension_label, extension_of, ExtensionBucket, SupportedSet};
pub use stats::{aggregate, AggregateStats, Aggregator};
pub use top_files::{top_large_files, LargeFile};

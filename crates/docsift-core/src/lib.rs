/// docsift Core — scanning, aggregation, estimation and recommendations.
///
/// This crate contains all business logic with zero terminal dependencies.
/// Frontends (the CLI, tests) drive it through [`analyse_folder`] or by
/// composing the individual stages.
///
/// # Modules
///
/// - [`model`] — Scan records, skip reasons and size/duration formatting.
/// - [`scanner`] — Serial recursive directory walk producing [`model::ScanEntry`] values.
/// - [`analysis`] — Extension, age and large-file bucketing into [`analysis::AggregateStats`].
/// - [`estimate`] — Time/cost projections per embedding backend and tier advice.
/// - [`config`] — Every tunable constant, loadable from TOML.
/// - [`report`] — The assembled result handed to renderers.
pub mod analysis;
pub mod config;
pub mod error;
pub mod estimate;
pub mod model;
pub mod report;
pub mod scanner;

pub use config::AnalyzerConfig;
pub use error::{AnalyzeError, ConfigError};
pub use report::{analyse_folder, Report};

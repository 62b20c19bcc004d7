//! Logging setup for the command-line frontend.
//!
//! Logs go to stderr so the report on stdout stays clean. `RUST_LOG` takes
//! precedence over the `-v` count:
//! ```bash
//! RUST_LOG=docsift_core=debug docsift ~/Documents
//! ```

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count. Quiet (`warn`) by default.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialise structured logging. Call once at startup.
pub fn init(verbosity: u8) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level_for(verbosity))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

//! Log output setup built on `tracing-subscriber`.
//!
//! Logs go to stderr so standard output only carries the reload report.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// The filter is read from `RUST_LOG` and falls back to `info`, for example
/// `RUST_LOG=femview=debug` to see each parsed section.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Install a debug level subscriber that writes through the test harness.
///
/// Safe to call from several tests; only the first call installs anything.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

//! `tracing` subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_LEVEL;

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins over `level` when set. Calling this twice is harmless;
/// the second subscriber is ignored.
pub fn init_logging(level: &str) {
    let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref(), level);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Pick the first parseable directive from `rust_log`, `level`, then the
/// built-in default.
pub fn build_filter(rust_log: Option<&str>, level: &str) -> EnvFilter {
    rust_log
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| EnvFilter::try_new(v).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

//! Logging bootstrap for embedding applications.
//!
//! The crate only emits `tracing` events; the presentation shell decides
//! where they go. [`init`] installs a stderr subscriber honoring the
//! configured level and is safe to call more than once.

use tracing_subscriber::filter::EnvFilter;

/// Install a global stderr `tracing` subscriber at the given level.
///
/// `level` accepts anything an [`EnvFilter`] directive accepts (`info`,
/// `debug`, `roster_core=trace`, ...); an unparsable value falls back to
/// `info`. Repeated calls after the first are no-ops, so library consumers
/// that already installed their own subscriber keep it.
pub fn init(level: &str) {
    let filter = level
        .parse::<EnvFilter>()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

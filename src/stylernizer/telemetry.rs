//! Tracing setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! whoever embeds it. The CLI calls [`init_tracing`] once at start-up.

/// Installs a compact `fmt` subscriber writing to stderr.
///
/// `RUST_LOG` wins when set, otherwise `level` (e.g. `"info"`, `"debug"`) is
/// used as the filter. Returns `false` if a global subscriber was already set.
#[must_use]
pub fn init_tracing(level: &str) -> bool {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

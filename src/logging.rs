//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "convo_view=info";

/// Build the env filter from `RUST_LOG`, or `fallback` when unset or invalid.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global fmt subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(verbose: bool) {
    let fallback = if verbose { "convo_view=debug" } else { DEFAULT_FILTER };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .with_target(false)
        .try_init();
}

//! Tracing setup for suite runs.
//!
//! Interaction primitives emit `debug`/`trace` events; opt in with
//! `RUST_LOG=vitrina=debug` (or finer) after calling [`init`].

use tracing_subscriber::{fmt, EnvFilter};

/// Install a global subscriber reading `RUST_LOG`. Safe to call more than
/// once; later calls are no-ops.
pub fn init() {
    let _ = try_init();
}

/// Like [`init`] but reports whether this call installed the subscriber.
pub fn try_init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

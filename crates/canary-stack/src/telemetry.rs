//! Tracing setup for deployment tooling
//!
//! Composition itself only emits `tracing` events; installing a
//! subscriber is left to the outermost caller, which can use this helper.

use tracing_subscriber::EnvFilter;

/// Install a formatted subscriber honoring `RUST_LOG`
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

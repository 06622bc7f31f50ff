//! Tracing setup for binaries and tests embedding the loader.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honoring `RUST_LOG`. Calling this more
/// than once is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

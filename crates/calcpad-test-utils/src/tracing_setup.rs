//! Tracing initialisation helpers for tests.
//!
//! The subscriber is installed at most once per process, so
//! [`init_test_tracing`] can be called from every test.

use tracing_subscriber::EnvFilter;

/// Install a subscriber that writes to the test-harness writer.
///
/// Honours `RUST_LOG`; without it, calcpad crates log at `debug` and
/// everything else at `warn`.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,calcpad_core=debug")),
        )
        .with_test_writer()
        .try_init();
}

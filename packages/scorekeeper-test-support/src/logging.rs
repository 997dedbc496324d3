//! Unified test logging initialization
//!
//! One-time guarded subscriber setup that works for unit and integration
//! tests alike and plays well with cargo/nextest output capture.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe. The filter is taken from, in order:
///
/// 1. `TEST_LOG` (test-only override)
/// 2. `SCOREKEEPER_LOG` (same directive the CLI reads)
/// 3. `RUST_LOG`
/// 4. `"warn"` (default, quiet)
///
/// ```bash
/// TEST_LOG=scorekeeper=debug cargo test -p scorekeeper
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = ["TEST_LOG", "SCOREKEEPER_LOG", "RUST_LOG"]
            .iter()
            .find_map(|name| std::env::var(name).ok().filter(|v| !v.trim().is_empty()))
            .map(EnvFilter::new)
            .unwrap_or_else(|| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // Critical for cargo/nextest capture
            .without_time()
            .try_init()
            .ok(); // Never panic if something else already initialized

        tracing::trace!("test logging initialized");
    });
}

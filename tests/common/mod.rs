use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INITIALIZE: Once = Once::new();

/// Installs a test-writer subscriber once per test binary.
///
/// `RUST_LOG` overrides the default `dslib=trace` filter.
pub fn initialize() {
    INITIALIZE.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dslib=trace"));

        let _ = tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .with(filter)
            .try_init();
    });
}

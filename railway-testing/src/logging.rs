//! Log output for test runs

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

static INIT: OnceCell<()> = OnceCell::new();

/// Default directives when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "railway_core=debug,railway_http=debug,railway_testing=debug";

/// Install a test-friendly fmt subscriber, once per process.
///
/// Filtering follows `RUST_LOG`, falling back to [`DEFAULT_FILTER`]. Output
/// goes through the test writer so it is captured per test. If another
/// subscriber is already installed it is left in place.
pub fn init_test_logging() {
    INIT.get_or_init(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let fmt_layer = fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_line_number(true);

        let installed = Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .is_ok();

        if installed {
            tracing::debug!("Test logging initialized");
        }
    });
}

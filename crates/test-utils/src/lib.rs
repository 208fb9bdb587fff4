pub mod builders;
pub mod invariants;

use std::sync::Once;

use stepdag::logging::{build_filter, LOG_ENV_VAR};
use tracing_subscriber::fmt;

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// Uses the same `STEPDAG_LOG` resolution as the binary, but writes through
/// `with_test_writer()` so output only shows for failing tests (unless run
/// with `-- --nocapture`).
///
/// `STEPDAG_LOG=stepdag::dag=trace cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let env_value = std::env::var(LOG_ENV_VAR).ok();

        fmt()
            .with_env_filter(build_filter(None, env_value.as_deref()))
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

//! Tracing subscriber setup

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the tracing filter
pub const LOG_ENV: &str = "BUDGETWISE_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global fmt subscriber; later calls are no-ops
///
/// `BUDGETWISE_LOG` takes precedence over `default_directive`. Output goes
/// to stderr so command output on stdout stays machine-readable.
pub fn init_tracing(default_directive: &str) {
    TRACING_INIT.call_once(|| {
        let filter = build_filter(default_directive);
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

fn build_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("budgetwise=info"))
}

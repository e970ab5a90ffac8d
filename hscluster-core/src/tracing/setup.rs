//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "HSCLUSTER_LOG";

/// Filter used when `HSCLUSTER_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "hscluster=info";

static INIT: Once = Once::new();

/// Initialize the hscluster tracing/logging system.
///
/// Reads `HSCLUSTER_LOG` for per-module log levels, e.g.
/// `HSCLUSTER_LOG=hscluster_analysis::outliers=debug,hscluster_core=warn`.
///
/// Falls back to `hscluster=info` if `HSCLUSTER_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // try_init: a host may already have installed a global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

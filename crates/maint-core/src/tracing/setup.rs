//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "MAINT_LOG";

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads `MAINT_LOG` for filter directives, e.g.
/// `MAINT_LOG=coverage_audit=debug,upstream_restore=info`.
/// Falls back to `warn` if unset or invalid.
///
/// Logs go to stderr so stdout stays reserved for report lines.
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}

//! Logging setup shared by the binaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV: &str = "PAWTRACK_LOG";

const DEFAULT_FILTER: &str = "pawtrack=info,warn";

/// Installs a stderr `fmt` subscriber filtered by `PAWTRACK_LOG`.
///
/// ```bash
/// PAWTRACK_LOG=pawtrack=debug pawtrack-gui
/// ```
pub fn init() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

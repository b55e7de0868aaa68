//! Installs the global `tracing` subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "MEMBENCH_LOG";

/// Install a stderr `fmt` subscriber. Safe to call more than once; later calls are no-ops.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(config.effective_filter()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if config.effective_json() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        ::tracing::debug!("tracing subscriber already installed");
    }
}

//! Process bootstrap: environment loading and tracing setup

use anyhow::Context;
use eh_shared::config::{AppConfig, LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, EnvFilter};

/// Load `.env` if present, then read [`AppConfig`] from the environment
pub fn load_config() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();
    AppConfig::from_env().context("failed to load configuration")
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .with_context(|| format!("invalid log level: {}", logging.level))?;

    let builder = fmt().with_env_filter(filter).with_target(true);
    let installed = match logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}

/// Log the effective configuration, without secrets
pub fn log_summary(config: &AppConfig) {
    tracing::info!(
        environment = %config.environment,
        bind = %config.server.bind_address(),
        workers = config.server.workers,
        database = %config.database.redacted_url(),
        max_connections = config.database.max_connections,
        error_format = %config.errors.format,
        "configuration loaded"
    );
}

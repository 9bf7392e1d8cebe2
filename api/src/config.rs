//! Process configuration and logging setup for the API binary

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tk_shared::{AppConfig, ConfigError, LogFormat, LoggingConfig};

/// Load `.env` (if present) and read the application configuration
pub fn load_config() -> Result<AppConfig, ConfigError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(ConfigError::Invalid {
                message: format!("failed to read .env file: {}", e),
            });
        }
    }

    AppConfig::from_env()
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Compact => registry.with(tracing_subscriber::fmt::layer().compact()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer().pretty()).init(),
    }
}

/// Emit startup warnings about weak but accepted settings
pub fn warn_on_weak_settings(config: &AppConfig) {
    if config.auth.jwt.is_using_default_secret() {
        tracing::warn!("SECRET_KEY is not set, using the development secret");
    }
    if config.server.trust_proxy_headers {
        tracing::info!("Client IPs are taken from Forwarded / X-Forwarded-For headers");
    }
    if !config.auth.enforce_ip_binding {
        tracing::info!("IP changes on token rotation are logged but not enforced");
    }
}

//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{env_flag, ConfigError};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Take the client IP from `Forwarded` / `X-Forwarded-For` instead of the peer address.
    /// Only safe behind a reverse proxy that overwrites these headers.
    #[serde(default)]
    pub trust_proxy_headers: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            trust_proxy_headers: false,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match std::env::var("PORT").or_else(|_| std::env::var("SERVER_PORT")) {
            Ok(raw) => parse_port(&raw).ok_or(ConfigError::InvalidValue {
                key: "PORT".to_string(),
                value: raw,
            })?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            host: std::env::var("SERVER_HOST").unwrap_or(defaults.host),
            port,
            trust_proxy_headers: env_flag("TRUST_PROXY_HEADERS", defaults.trust_proxy_headers)?,
        })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Accepts both `8080` and the listen-address shorthand `:8080`.
fn parse_port(raw: &str) -> Option<u16> {
    raw.trim().trim_start_matches(':').parse().ok()
}

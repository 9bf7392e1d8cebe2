//! Configuration for the token services

use chrono::Duration;
use tk_shared::config::auth::{DEVELOPMENT_SECRET, MAX_ACCESS_TOKEN_EXPIRY};
use tk_shared::{AuthConfig, RefreshTokenConfig};

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_BYTES};

/// Configuration for the token services
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HMAC signing secret
    pub jwt_secret: String,
    /// Access token lifetime
    pub access_token_ttl: Duration,
    /// Clock skew tolerated when checking expiry, in seconds
    pub leeway_seconds: u64,
    /// Raw entropy of each refresh secret
    pub refresh_token_bytes: usize,
    /// bcrypt cost factor for refresh secret hashing
    pub hash_cost: u32,
    /// Reject rotation from a different IP instead of only logging it
    pub enforce_ip_binding: bool,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEVELOPMENT_SECRET.to_string(),
            access_token_ttl: Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES),
            leeway_seconds: 0,
            refresh_token_bytes: REFRESH_TOKEN_BYTES,
            hash_cost: RefreshTokenConfig::default().hash_cost,
            enforce_ip_binding: false,
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            jwt_secret: config.jwt.secret.clone(),
            access_token_ttl: Duration::seconds(
                config.jwt.access_token_expiry.min(MAX_ACCESS_TOKEN_EXPIRY),
            ),
            leeway_seconds: config.jwt.leeway,
            refresh_token_bytes: config.refresh.byte_length,
            hash_cost: config.refresh.hash_cost,
            enforce_ip_binding: config.enforce_ip_binding,
        }
    }
}

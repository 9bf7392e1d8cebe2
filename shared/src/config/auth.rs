//! Token signing and refresh credential configuration

use serde::{Deserialize, Serialize};

use super::{env_flag, env_or, ConfigError};

/// Signing secret used when none is configured. Refused in production.
pub const DEVELOPMENT_SECRET: &str = "development-secret-please-change-in-production";

/// HS512 wants at least this many bytes of key material.
pub const RECOMMENDED_SECRET_BYTES: usize = 64;

/// Longest accepted access token lifetime in seconds (7 days)
pub const MAX_ACCESS_TOKEN_EXPIRY: i64 = 7 * 24 * 60 * 60;

/// Access token (JWT) configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Process-wide HMAC secret for signing access tokens
    pub secret: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Clock skew tolerated when checking `exp`, in seconds
    #[serde(default)]
    pub leeway: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEVELOPMENT_SECRET),
            access_token_expiry: 900, // 15 minutes
            leeway: 0,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEVELOPMENT_SECRET
    }
}

/// Refresh token generation and hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RefreshTokenConfig {
    /// Raw entropy of a refresh secret in bytes
    pub byte_length: usize,

    /// bcrypt cost factor for the stored hash
    pub hash_cost: u32,
}

impl Default for RefreshTokenConfig {
    fn default() -> Self {
        Self {
            byte_length: 32,
            hash_cost: 10,
        }
    }
}

/// Complete token configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Access token configuration
    pub jwt: JwtConfig,

    /// Refresh token configuration
    #[serde(default)]
    pub refresh: RefreshTokenConfig,

    /// Reject rotation when the request IP differs from the one in the access token.
    /// When off, the drift is only logged.
    #[serde(default)]
    pub enforce_ip_binding: bool,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let secret = std::env::var("SECRET_KEY")
            .or_else(|_| std::env::var("JWT_SECRET"))
            .unwrap_or(defaults.jwt.secret);

        Ok(Self {
            jwt: JwtConfig {
                secret,
                access_token_expiry: env_or(
                    "JWT_ACCESS_TOKEN_EXPIRY",
                    defaults.jwt.access_token_expiry,
                )?,
                leeway: env_or("JWT_LEEWAY", defaults.jwt.leeway)?,
            },
            refresh: RefreshTokenConfig {
                byte_length: env_or("REFRESH_TOKEN_BYTES", defaults.refresh.byte_length)?,
                hash_cost: env_or("REFRESH_TOKEN_HASH_COST", defaults.refresh.hash_cost)?,
            },
            enforce_ip_binding: env_flag("ENFORCE_IP_BINDING", defaults.enforce_ip_binding)?,
        })
    }

    /// Enable or disable IP binding enforcement
    pub fn with_ip_binding(mut self, enforce: bool) -> Self {
        self.enforce_ip_binding = enforce;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Missing {
                key: "SECRET_KEY".to_string(),
            });
        }
        if self.jwt.access_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                message: "access token expiry must be positive".to_string(),
            });
        }
        if self.jwt.access_token_expiry > MAX_ACCESS_TOKEN_EXPIRY {
            return Err(ConfigError::Invalid {
                message: format!(
                    "access token expiry {}s exceeds the maximum of {}s",
                    self.jwt.access_token_expiry, MAX_ACCESS_TOKEN_EXPIRY
                ),
            });
        }
        if self.refresh.byte_length < 16 {
            return Err(ConfigError::Invalid {
                message: "refresh tokens need at least 16 bytes of entropy".to_string(),
            });
        }
        if !(4..=31).contains(&self.refresh.hash_cost) {
            return Err(ConfigError::Invalid {
                message: format!("bcrypt cost {} is outside 4..=31", self.refresh.hash_cost),
            });
        }
        Ok(())
    }
}

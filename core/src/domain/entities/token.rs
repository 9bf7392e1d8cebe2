//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::errors::TokenError;

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Raw entropy of a refresh secret (32 bytes)
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Claims structure for the access token payload.
///
/// Signed, not encrypted: the holder can read these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Opaque user identifier
    pub user_id: String,

    /// IP address the token was issued to
    pub ip: String,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,
}

impl AccessClaims {
    /// Creates claims expiring `ttl` after `now`
    ///
    /// Fails with `TokenGenerationFailed` when the expiry is not representable.
    pub fn new(
        user_id: impl Into<String>,
        ip: IpAddr,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, TokenError> {
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or(TokenError::TokenGenerationFailed)?;

        Ok(Self {
            user_id: user_id.into(),
            ip: ip.to_string(),
            exp: expires_at.timestamp(),
        })
    }

    /// Expiry as a timestamp, if representable
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// The issuing IP parsed back into an address
    pub fn issued_ip(&self) -> Option<IpAddr> {
        self.ip.parse().ok()
    }

    /// Whether `client_ip` is the address this token was issued to.
    ///
    /// An unparseable `ip` claim never matches.
    pub fn is_bound_to(&self, client_ip: IpAddr) -> bool {
        self.issued_ip() == Some(client_ip)
    }
}

/// An access token and the transport-encoded refresh token issued with it
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed JWT access token
    pub access_token: String,

    /// Base64-encoded refresh secret. Only its hash is ever stored.
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

// Keep secrets out of logs and panic messages.
impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Outcome of a successful rotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotatedTokens {
    /// The new pair, bound to the rotating request's IP
    pub tokens: TokenPair,

    /// The rotating request came from a different IP than the one at issuance
    pub ip_changed: bool,
}

//! Minting of access/refresh token pairs

use chrono::Utc;
use std::net::IpAddr;
use std::sync::Arc;

use crate::domain::entities::token::TokenPair;
use crate::domain::value_objects::UserId;
use crate::errors::DomainError;
use crate::services::crypto::{
    BcryptRefreshTokenHasher, OsRandomSource, RefreshSecret, RefreshTokenHasher,
    SecureRandomSource,
};

use super::codec::AccessTokenCodec;
use super::config::TokenServiceConfig;

/// A freshly minted pair together with the digest to persist
#[derive(Debug, Clone)]
pub struct MintedPair {
    /// What the client receives
    pub tokens: TokenPair,
    /// What the store receives
    pub refresh_hash: String,
}

/// Produces token pairs and checks refresh secrets.
///
/// Shared by issuance and rotation so both flows mint pairs identically.
/// Hashing runs on the blocking pool since bcrypt is deliberately slow.
#[derive(Clone)]
pub struct TokenMinter {
    codec: Arc<AccessTokenCodec>,
    random: Arc<dyn SecureRandomSource>,
    hasher: Arc<dyn RefreshTokenHasher>,
    refresh_token_bytes: usize,
}

impl TokenMinter {
    pub fn new(
        codec: AccessTokenCodec,
        random: Arc<dyn SecureRandomSource>,
        hasher: Arc<dyn RefreshTokenHasher>,
        refresh_token_bytes: usize,
    ) -> Self {
        Self {
            codec: Arc::new(codec),
            random,
            hasher,
            refresh_token_bytes,
        }
    }

    /// Minter using the OS random source and bcrypt at the configured cost
    pub fn from_config(config: &TokenServiceConfig) -> Result<Self, DomainError> {
        Ok(Self::new(
            AccessTokenCodec::from_config(config)?,
            Arc::new(OsRandomSource),
            Arc::new(BcryptRefreshTokenHasher::new(config.hash_cost)),
            config.refresh_token_bytes,
        ))
    }

    pub fn codec(&self) -> &AccessTokenCodec {
        &self.codec
    }

    /// Mint a new access token and refresh secret for `user_id` at `ip`
    pub async fn mint(&self, user_id: &UserId, ip: IpAddr) -> Result<MintedPair, DomainError> {
        let access_token = self.codec.issue(user_id.as_str(), ip, Utc::now())?;
        let secret = RefreshSecret::generate(self.random.as_ref(), self.refresh_token_bytes)?;

        let hasher = Arc::clone(&self.hasher);
        let raw = secret.as_bytes().to_vec();
        let refresh_hash = tokio::task::spawn_blocking(move || hasher.hash(&raw))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("refresh token hashing task failed: {}", e),
            })??;

        Ok(MintedPair {
            tokens: TokenPair::new(access_token, secret.encode()),
            refresh_hash,
        })
    }

    /// Check a presented secret against a stored digest
    pub async fn verify_secret(
        &self,
        digest: String,
        secret: &RefreshSecret,
    ) -> Result<bool, DomainError> {
        let hasher = Arc::clone(&self.hasher);
        let raw = secret.as_bytes().to_vec();

        tokio::task::spawn_blocking(move || hasher.verify(&digest, &raw))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("refresh token verification task failed: {}", e),
            })
    }
}

//! Salted one-way hashing of refresh secrets

use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha256};

use crate::errors::CryptoError;

/// One-way salted hash and verification for refresh secrets
pub trait RefreshTokenHasher: Send + Sync {
    /// Hash `secret` with a fresh random salt embedded in the digest.
    ///
    /// Two calls on the same secret return different digests.
    fn hash(&self, secret: &[u8]) -> Result<String, CryptoError>;

    /// Check `secret` against a digest produced by [`hash`](Self::hash).
    ///
    /// A malformed digest and a wrong secret both yield `false`.
    fn verify(&self, digest: &str, secret: &[u8]) -> bool;
}

/// bcrypt-based hasher
///
/// bcrypt only reads the first 72 bytes of its input, so the secret is first
/// reduced to a base64 SHA-256 digest (44 bytes). Every input byte then
/// affects the result. The comparison inside `bcrypt::verify` is constant time.
#[derive(Debug, Clone)]
pub struct BcryptRefreshTokenHasher {
    cost: u32,
}

impl BcryptRefreshTokenHasher {
    /// Creates a hasher with the given bcrypt cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    fn prehash(secret: &[u8]) -> String {
        STANDARD.encode(Sha256::digest(secret))
    }
}

impl Default for BcryptRefreshTokenHasher {
    fn default() -> Self {
        Self::new(10)
    }
}

impl RefreshTokenHasher for BcryptRefreshTokenHasher {
    fn hash(&self, secret: &[u8]) -> Result<String, CryptoError> {
        bcrypt::hash(Self::prehash(secret), self.cost).map_err(|e| CryptoError::HashingFailure {
            message: e.to_string(),
        })
    }

    fn verify(&self, digest: &str, secret: &[u8]) -> bool {
        match bcrypt::verify(Self::prehash(secret), digest) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::debug!(error = %e, "stored refresh token digest could not be parsed");
                false
            }
        }
    }
}

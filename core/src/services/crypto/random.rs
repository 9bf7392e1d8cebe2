//! Secure random source for refresh secrets

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::CryptoError;

/// Source of cryptographically strong random bytes.
///
/// Implementations must fail rather than fall back to a non-cryptographic
/// generator, and must produce fresh output on every call.
pub trait SecureRandomSource: Send + Sync {
    /// Fill `dest` with random bytes
    fn fill(&self, dest: &mut [u8]) -> Result<(), CryptoError>;

    /// Generate `length` random bytes, base64-encoded for transport
    fn generate(&self, length: usize) -> Result<String, CryptoError> {
        let mut bytes = vec![0u8; length];
        self.fill(&mut bytes)?;
        Ok(STANDARD.encode(bytes))
    }
}

/// Random source backed by the operating system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandomSource;

impl SecureRandomSource for OsRandomSource {
    fn fill(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| CryptoError::EntropyUnavailable {
                message: e.to_string(),
            })
    }
}

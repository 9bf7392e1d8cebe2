//! Refresh secret and its transport encoding

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::errors::{CryptoError, TokenError};

use super::random::SecureRandomSource;

/// Raw bytes of a refresh secret.
///
/// Clients see it as standard base64; the store only ever sees its hash.
#[derive(Clone, PartialEq, Eq)]
pub struct RefreshSecret {
    bytes: Vec<u8>,
}

impl RefreshSecret {
    /// Draw a fresh secret of `length` bytes
    pub fn generate(source: &dyn SecureRandomSource, length: usize) -> Result<Self, CryptoError> {
        let mut bytes = vec![0u8; length];
        source.fill(&mut bytes)?;
        Ok(Self { bytes })
    }

    /// Decode a secret presented by a client
    pub fn decode(encoded: &str) -> Result<Self, TokenError> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|_| TokenError::MalformedRefreshToken)?;
        if bytes.is_empty() {
            return Err(TokenError::MalformedRefreshToken);
        }
        Ok(Self { bytes })
    }

    /// Transport encoding handed to the client
    pub fn encode(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for RefreshSecret {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl std::fmt::Debug for RefreshSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshSecret")
            .field("len", &self.bytes.len())
            .finish()
    }
}

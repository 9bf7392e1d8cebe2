//! Error types for token handling and the cryptographic primitives beneath it
//!
//! Variants are deliberately fine-grained for logging and tests. The HTTP layer
//! collapses them into a handful of client-facing codes.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Disallowed signing algorithm: {algorithm}")]
    DisallowedAlgorithm { algorithm: String },

    #[error("Refresh token is not valid base64")]
    MalformedRefreshToken,

    /// Unknown user, wrong secret and lost race all end up here.
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Client IP does not match the IP the token was issued to")]
    IpAddressMismatch,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    /// Whether this error is one of the reasons an access token gets rejected
    pub fn is_access_token_rejection(&self) -> bool {
        matches!(
            self,
            TokenError::TokenExpired
                | TokenError::InvalidTokenFormat
                | TokenError::InvalidSignature
                | TokenError::DisallowedAlgorithm { .. }
        )
    }
}

/// Failures of the random source or the refresh token hasher
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Secure random source unavailable: {message}")]
    EntropyUnavailable { message: String },

    #[error("Hashing failure: {message}")]
    HashingFailure { message: String },
}

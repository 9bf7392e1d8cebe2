//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{CryptoError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Missing or malformed caller input
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Credential store unavailable or failed
    #[error("Credential store failure: {message}")]
    Store { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

impl DomainError {
    /// Caller-caused failures (4xx) as opposed to server-side ones (5xx)
    pub fn is_client_error(&self) -> bool {
        match self {
            DomainError::Validation { .. } => true,
            DomainError::Token(TokenError::TokenGenerationFailed) => false,
            DomainError::Token(_) => true,
            DomainError::Store { .. } | DomainError::Internal { .. } | DomainError::Crypto(_) => {
                false
            }
        }
    }

    /// Shorthand for building a store failure from any displayable error
    pub fn store(error: impl std::fmt::Display) -> Self {
        DomainError::Store {
            message: error.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

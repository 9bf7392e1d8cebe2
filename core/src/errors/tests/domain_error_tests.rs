//! Unit tests for domain error types

use crate::errors::{CryptoError, DomainError, TokenError};

#[test]
fn test_token_error_conversion() {
    let error: DomainError = TokenError::InvalidRefreshToken.into();
    assert_eq!(error, DomainError::Token(TokenError::InvalidRefreshToken));
    assert_eq!(error.to_string(), "Invalid refresh token");
}

#[test]
fn test_client_error_classification() {
    assert!(DomainError::Validation {
        message: "user_id is required".to_string()
    }
    .is_client_error());
    assert!(DomainError::Token(TokenError::TokenExpired).is_client_error());
    assert!(DomainError::Token(TokenError::MalformedRefreshToken).is_client_error());
    assert!(DomainError::Token(TokenError::IpAddressMismatch).is_client_error());

    assert!(!DomainError::store("connection refused").is_client_error());
    assert!(!DomainError::Token(TokenError::TokenGenerationFailed).is_client_error());
    assert!(!DomainError::Crypto(CryptoError::EntropyUnavailable {
        message: "getrandom failed".to_string(),
    })
    .is_client_error());
}

#[test]
fn test_access_token_rejections() {
    assert!(TokenError::TokenExpired.is_access_token_rejection());
    assert!(TokenError::InvalidSignature.is_access_token_rejection());
    assert!(TokenError::InvalidTokenFormat.is_access_token_rejection());
    assert!(TokenError::DisallowedAlgorithm { algorithm: "HS256".to_string() }
        .is_access_token_rejection());

    assert!(!TokenError::InvalidRefreshToken.is_access_token_rejection());
    assert!(!TokenError::MalformedRefreshToken.is_access_token_rejection());
}

#[test]
fn test_store_error_message() {
    let error = DomainError::store("pool timed out");
    assert_eq!(error.to_string(), "Credential store failure: pool timed out");
}

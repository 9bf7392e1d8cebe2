//! # TokenKeeper Core
//!
//! Token lifecycle logic for the TokenKeeper service.
//! This crate contains the token entities, the access token codec, refresh
//! secret hashing, the credential store interface, and the issuance and
//! rotation services built on top of them.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::{AccessClaims, RotatedTokens, SessionRecord, TokenPair, UserId};
pub use errors::{CryptoError, DomainError, DomainResult, TokenError};
pub use repositories::{CredentialStore, InMemoryCredentialStore};
pub use services::{
    AccessTokenCodec, BcryptRefreshTokenHasher, OsRandomSource, RefreshSecret,
    RefreshTokenHasher, SecureRandomSource, TokenIssuanceService, TokenMinter,
    TokenRotationService, TokenServiceConfig,
};

//! Business services containing domain logic and use cases.

pub mod crypto;
pub mod token;

// Re-export commonly used types
pub use crypto::{
    BcryptRefreshTokenHasher, OsRandomSource, RefreshSecret, RefreshTokenHasher,
    SecureRandomSource,
};
pub use token::{
    AccessTokenCodec, TokenIssuanceService, TokenMinter, TokenRotationService,
    TokenServiceConfig,
};

//! Domain entities representing core business objects.

pub mod session;
pub mod token;


// Re-export commonly used types
pub use session::SessionRecord;
pub use token::{
    AccessClaims, RotatedTokens, TokenPair, ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_BYTES,
};

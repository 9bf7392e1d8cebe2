//! Cryptographic building blocks for refresh tokens
//!
//! - `random` - CSPRNG-backed secret generation
//! - `hasher` - salted, deliberately slow one-way hashing of refresh secrets
//! - `secret` - the refresh secret and its base64 transport encoding

mod hasher;
mod random;
mod secret;


pub use hasher::{BcryptRefreshTokenHasher, RefreshTokenHasher};
pub use random::{OsRandomSource, SecureRandomSource};
pub use secret::RefreshSecret;

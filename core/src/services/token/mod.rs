//! Token services
//!
//! This module handles the token lifecycle:
//! - HS512 access token signing and validation (`codec`)
//! - Minting of access/refresh pairs shared by both flows (`minter`)
//! - Issuing a fresh pair for a user (`issuance`)
//! - Rotating a pair with one-time-use refresh secrets (`rotation`)

mod codec;
mod config;
mod issuance;
mod minter;
mod rotation;

#[cfg(test)]
mod tests;

pub use codec::{AccessTokenCodec, ACCEPTED_ALGORITHM};
pub use config::TokenServiceConfig;
pub use issuance::TokenIssuanceService;
pub use minter::{MintedPair, TokenMinter};
pub use rotation::TokenRotationService;

//! Request and response bodies of the HTTP surface

pub mod auth;

pub use auth::{GenerateTokensQuery, RefreshTokensRequest, TokenPairResponse};
pub use tk_shared::ErrorResponse;

use serde::{Deserialize, Serialize};
use validator::Validate;

use tk_core::domain::entities::token::TokenPair;

/// Query string of `POST /auth/generate-tokens`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateTokensQuery {
    pub user_id: Option<String>,
}

/// Body of `POST /auth/refresh-tokens`
#[derive(Clone, Deserialize, Validate)]
pub struct RefreshTokensRequest {
    #[validate(length(min = 1))]
    pub access_token: String,
    /// Base64-encoded refresh secret
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

impl std::fmt::Debug for RefreshTokensRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTokensRequest").finish_non_exhaustive()
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    /// Base64-encoded refresh secret
    pub refresh_token: String,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_request_requires_both_tokens() {
        let request = RefreshTokensRequest {
            access_token: "eyJ...".to_string(),
            refresh_token: String::new(),
        };
        assert!(request.validate().is_err());

        let request = RefreshTokensRequest {
            access_token: "eyJ...".to_string(),
            refresh_token: "c2VjcmV0".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_refresh_request_debug_hides_tokens() {
        let request = RefreshTokensRequest {
            access_token: "access-secret".to_string(),
            refresh_token: "refresh-secret".to_string(),
        };
        let debug = format!("{:?}", request);

        assert!(!debug.contains("access-secret"));
        assert!(!debug.contains("refresh-secret"));
    }
}

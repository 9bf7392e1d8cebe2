//! Access token signing and validation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{
    decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use std::net::IpAddr;

use tk_shared::config::auth::RECOMMENDED_SECRET_BYTES;

use crate::domain::entities::token::AccessClaims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// The only signing algorithm accepted on validation
pub const ACCEPTED_ALGORITHM: Algorithm = Algorithm::HS512;

/// Signs and validates HS512 access tokens with a single shared secret
#[derive(Clone)]
pub struct AccessTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl AccessTokenCodec {
    /// Creates a codec for `secret`
    ///
    /// # Arguments
    ///
    /// * `secret` - HMAC key shared by signing and validation
    /// * `ttl` - Lifetime of issued tokens
    /// * `leeway_seconds` - Clock skew tolerated when checking `exp`
    ///
    /// # Returns
    ///
    /// The codec, or an internal error if the secret is empty
    pub fn new(secret: &[u8], ttl: Duration, leeway_seconds: u64) -> Result<Self, DomainError> {
        if secret.is_empty() {
            return Err(DomainError::Internal {
                message: "access token signing secret is empty".to_string(),
            });
        }
        if secret.len() < RECOMMENDED_SECRET_BYTES {
            tracing::warn!(
                secret_bytes = secret.len(),
                recommended = RECOMMENDED_SECRET_BYTES,
                "access token signing secret is shorter than recommended"
            );
        }

        let mut validation = Validation::new(ACCEPTED_ALGORITHM);
        validation.leeway = leeway_seconds;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        })
    }

    pub fn from_config(config: &TokenServiceConfig) -> Result<Self, DomainError> {
        Self::new(
            config.jwt_secret.as_bytes(),
            config.access_token_ttl,
            config.leeway_seconds,
        )
    }

    /// Signs an access token binding `user_id` to `ip`, expiring `ttl` after `now`
    pub fn issue(
        &self,
        user_id: &str,
        ip: IpAddr,
        now: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let claims = AccessClaims::new(user_id, ip, now, self.ttl).map_err(|e| {
            tracing::error!(ttl_seconds = self.ttl.num_seconds(), "access token expiry overflows");
            e
        })?;

        encode(&Header::new(ACCEPTED_ALGORITHM), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "failed to sign access token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    /// Verifies signature, algorithm and expiry, then returns the claims
    pub fn validate(&self, token: &str) -> Result<AccessClaims, TokenError> {
        // Check the declared algorithm before touching the signature.
        let header = decode_header(token).map_err(|_| TokenError::InvalidTokenFormat)?;
        if header.alg != ACCEPTED_ALGORITHM {
            return Err(TokenError::DisallowedAlgorithm {
                algorithm: format!("{:?}", header.alg),
            });
        }

        decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::InvalidAlgorithm => TokenError::DisallowedAlgorithm {
                    algorithm: format!("{:?}", header.alg),
                },
                _ => TokenError::InvalidTokenFormat,
            })
    }
}

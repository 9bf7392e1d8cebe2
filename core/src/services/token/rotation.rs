//! Rotate-on-refresh protocol

use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::domain::entities::token::RotatedTokens;
use crate::domain::value_objects::UserId;
use crate::errors::{DomainError, TokenError};
use crate::repositories::CredentialStore;
use crate::services::crypto::RefreshSecret;

use super::minter::TokenMinter;

/// Exchanges a valid access/refresh pair for a new one.
///
/// The presented refresh secret is single use: a successful rotation replaces
/// the stored digest, so the old secret stops verifying. A failed rotation
/// leaves the stored session untouched.
pub struct TokenRotationService<S: CredentialStore> {
    store: Arc<S>,
    minter: TokenMinter,
    /// Reject IP drift instead of only flagging it
    enforce_ip_binding: bool,
}

impl<S: CredentialStore> TokenRotationService<S> {
    pub fn new(store: Arc<S>, minter: TokenMinter, enforce_ip_binding: bool) -> Self {
        Self {
            store,
            minter,
            enforce_ip_binding,
        }
    }

    /// Rotate a token pair presented from `client_ip`
    ///
    /// # Arguments
    ///
    /// * `access_token` - Signed access token carrying the identity
    /// * `refresh_token` - Base64 refresh secret issued with it
    /// * `client_ip` - IP of the rotating request
    ///
    /// # Returns
    ///
    /// The new pair bound to `client_ip`, and whether the IP drifted
    ///
    /// # Errors
    ///
    /// * `Token(InvalidSignature | DisallowedAlgorithm | TokenExpired | InvalidTokenFormat)` -
    ///   the access token was rejected
    /// * `Token(MalformedRefreshToken)` - the refresh token is not base64
    /// * `Token(InvalidRefreshToken)` - unknown session, wrong secret, or a
    ///   concurrent rotation consumed the secret first
    /// * `Token(IpAddressMismatch)` - IP drift while binding is enforced
    /// * `Crypto` / `Store` / `Internal` - minting or persisting the new pair failed
    pub async fn rotate(
        &self,
        access_token: &str,
        refresh_token: &str,
        client_ip: IpAddr,
    ) -> Result<RotatedTokens, DomainError> {
        let claims = self.minter.codec().validate(access_token).map_err(|e| {
            debug!(error = %e, "Rejected access token on rotation");
            e
        })?;

        let user_id =
            UserId::parse(&claims.user_id).map_err(|_| TokenError::InvalidTokenFormat)?;

        let secret = RefreshSecret::decode(refresh_token)?;

        let stored_hash = match self.store.get_hash(user_id.as_str()).await {
            Ok(Some(hash)) => hash,
            Ok(None) => {
                debug!(user_id = %user_id, "No refresh session for user");
                return Err(TokenError::InvalidRefreshToken.into());
            }
            Err(e) => {
                error!(user_id = %user_id, error = %e, "Failed to load refresh session");
                return Err(TokenError::InvalidRefreshToken.into());
            }
        };

        if !self.minter.verify_secret(stored_hash.clone(), &secret).await? {
            warn!(user_id = %user_id, "Refresh token does not match stored session");
            return Err(TokenError::InvalidRefreshToken.into());
        }

        let ip_changed = !claims.is_bound_to(client_ip);
        if ip_changed {
            warn!(
                target: "security",
                user_id = %user_id,
                issued_ip = %claims.ip,
                client_ip = %client_ip,
                enforced = self.enforce_ip_binding,
                "Token rotation from a different IP than issuance"
            );
            if self.enforce_ip_binding {
                return Err(TokenError::IpAddressMismatch.into());
            }
        }

        let minted = self.minter.mint(&user_id, client_ip).await.map_err(|e| {
            error!(user_id = %user_id, error = %e, "Failed to mint rotated token pair");
            e
        })?;

        let swapped = self
            .store
            .swap_hash(
                user_id.as_str(),
                &stored_hash,
                &minted.refresh_hash,
                &client_ip.to_string(),
            )
            .await
            .map_err(|e| {
                error!(user_id = %user_id, error = %e, "Failed to persist rotated session");
                e
            })?;

        if !swapped {
            warn!(
                user_id = %user_id,
                "Refresh session changed during rotation, rejecting"
            );
            return Err(TokenError::InvalidRefreshToken.into());
        }

        info!(
            user_id = %user_id,
            client_ip = %client_ip,
            ip_changed = ip_changed,
            "Rotated token pair"
        );

        Ok(RotatedTokens {
            tokens: minted.tokens,
            ip_changed,
        })
    }
}

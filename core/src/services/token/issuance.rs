//! Issuing a fresh token pair for a user

use std::net::IpAddr;
use std::sync::Arc;
use tracing::{error, info};

use crate::domain::entities::token::TokenPair;
use crate::domain::value_objects::UserId;
use crate::errors::DomainError;
use crate::repositories::CredentialStore;

use super::minter::TokenMinter;

/// Issues a new access/refresh pair and replaces the user's stored session
pub struct TokenIssuanceService<S: CredentialStore> {
    /// Credential store holding one session per user
    store: Arc<S>,
    /// Shared pair minter
    minter: TokenMinter,
}

impl<S: CredentialStore> TokenIssuanceService<S> {
    /// Create a new issuance service
    ///
    /// # Arguments
    ///
    /// * `store` - Credential store for refresh secret digests
    /// * `minter` - Minter shared with the rotation service
    pub fn new(store: Arc<S>, minter: TokenMinter) -> Self {
        Self { store, minter }
    }

    /// Issue a token pair for `user_id` bound to `client_ip`
    ///
    /// Any previously issued refresh token for the user stops working once
    /// this returns successfully. Nothing is persisted unless minting
    /// succeeded, and nothing is returned unless persisting succeeded.
    ///
    /// # Errors
    ///
    /// * `Validation` - `user_id` is empty or too long
    /// * `Crypto` - the random source or hasher failed
    /// * `Store` - the session could not be saved
    pub async fn issue(&self, user_id: &str, client_ip: IpAddr) -> Result<TokenPair, DomainError> {
        let user_id = UserId::parse(user_id)?;

        let minted = self.minter.mint(&user_id, client_ip).await.map_err(|e| {
            error!(user_id = %user_id, error = %e, "Failed to mint token pair");
            e
        })?;

        self.store
            .save(user_id.as_str(), &minted.refresh_hash, &client_ip.to_string())
            .await
            .map_err(|e| {
                error!(user_id = %user_id, error = %e, "Failed to persist refresh session");
                e
            })?;

        info!(
            user_id = %user_id,
            client_ip = %client_ip,
            "Issued new token pair"
        );

        Ok(minted.tokens)
    }
}

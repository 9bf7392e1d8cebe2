//! Token route handlers
//!
//! - `POST /auth/generate-tokens?user_id=<id>` issues a fresh pair
//! - `POST /auth/refresh-tokens` rotates a pair

pub mod generate;
pub mod refresh;

use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::HttpResponse;
use std::sync::Arc;

use tk_core::domain::entities::token::TokenPair;
use tk_core::errors::DomainError;
use tk_core::repositories::CredentialStore;
use tk_core::services::token::{
    TokenIssuanceService, TokenMinter, TokenRotationService, TokenServiceConfig,
};

pub use generate::generate_tokens;
pub use refresh::refresh_tokens;

use crate::dto::auth::TokenPairResponse;

/// Application state that holds shared services
pub struct AppState<S: CredentialStore> {
    pub issuance: Arc<TokenIssuanceService<S>>,
    pub rotation: Arc<TokenRotationService<S>>,
}

impl<S: CredentialStore> AppState<S> {
    /// Wire both services to one store and one minter
    pub fn new(store: Arc<S>, config: &TokenServiceConfig) -> Result<Self, DomainError> {
        let minter = TokenMinter::from_config(config)?;

        Ok(Self {
            issuance: Arc::new(TokenIssuanceService::new(Arc::clone(&store), minter.clone())),
            rotation: Arc::new(TokenRotationService::new(
                store,
                minter,
                config.enforce_ip_binding,
            )),
        })
    }
}

/// 200 response carrying a token pair; never cached
pub(crate) fn token_response(pair: TokenPair) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(CacheControl(vec![CacheDirective::NoStore]))
        .json(TokenPairResponse::from(pair))
}

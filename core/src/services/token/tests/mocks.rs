//! Test doubles for the token services

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::entities::session::SessionRecord;
use crate::errors::{CryptoError, DomainError};
use crate::repositories::{CredentialStore, InMemoryCredentialStore};
use crate::services::crypto::{BcryptRefreshTokenHasher, OsRandomSource, SecureRandomSource};
use crate::services::token::{
    AccessTokenCodec, TokenIssuanceService, TokenMinter, TokenRotationService,
    TokenServiceConfig,
};

pub const TEST_SECRET: &str =
    "test-secret-key-that-is-long-enough-for-hs512-signing-in-unit-tests!";

pub fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: TEST_SECRET.to_string(),
        hash_cost: 4,
        ..TokenServiceConfig::default()
    }
}

pub fn test_minter() -> TokenMinter {
    TokenMinter::from_config(&test_config()).unwrap()
}

pub fn test_codec() -> AccessTokenCodec {
    AccessTokenCodec::from_config(&test_config()).unwrap()
}

pub fn services<S: CredentialStore>(
    store: Arc<S>,
    enforce_ip_binding: bool,
) -> (TokenIssuanceService<S>, TokenRotationService<S>) {
    let minter = test_minter();
    (
        TokenIssuanceService::new(Arc::clone(&store), minter.clone()),
        TokenRotationService::new(store, minter, enforce_ip_binding),
    )
}

/// Credential store with failure injection and call counters
#[derive(Default)]
pub struct MockCredentialStore {
    pub inner: InMemoryCredentialStore,
    pub fail_save: AtomicBool,
    pub fail_get: AtomicBool,
    pub fail_swap: AtomicBool,
    /// Overwrite the stored hash right before each swap, simulating a
    /// concurrent rotation that landed first
    pub race_swap: AtomicBool,
    pub save_calls: AtomicUsize,
    pub swap_calls: AtomicUsize,
}

impl MockCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(flag: &AtomicBool) {
        flag.store(true, Ordering::SeqCst);
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    fn unavailable() -> DomainError {
        DomainError::store("connection refused")
    }
}

#[async_trait]
impl CredentialStore for MockCredentialStore {
    async fn save(&self, user_id: &str, refresh_hash: &str, ip: &str) -> Result<(), DomainError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        self.inner.save(user_id, refresh_hash, ip).await
    }

    async fn get_hash(&self, user_id: &str) -> Result<Option<String>, DomainError> {
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        self.inner.get_hash(user_id).await
    }

    async fn update(&self, user_id: &str, new_refresh_hash: &str) -> Result<bool, DomainError> {
        self.inner.update(user_id, new_refresh_hash).await
    }

    async fn swap_hash(
        &self,
        user_id: &str,
        expected_hash: &str,
        new_refresh_hash: &str,
        ip: &str,
    ) -> Result<bool, DomainError> {
        self.swap_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_swap.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        if self.race_swap.load(Ordering::SeqCst) {
            self.inner.update(user_id, "hash-from-concurrent-rotation").await?;
        }
        self.inner
            .swap_hash(user_id, expected_hash, new_refresh_hash, ip)
            .await
    }

    async fn find_session(&self, user_id: &str) -> Result<Option<SessionRecord>, DomainError> {
        self.inner.find_session(user_id).await
    }
}

/// Random source that always fails
pub struct ExhaustedRandomSource;

impl SecureRandomSource for ExhaustedRandomSource {
    fn fill(&self, _dest: &mut [u8]) -> Result<(), CryptoError> {
        Err(CryptoError::EntropyUnavailable {
            message: "entropy pool exhausted".to_string(),
        })
    }
}

pub fn minter_with_exhausted_entropy() -> TokenMinter {
    TokenMinter::new(
        test_codec(),
        Arc::new(ExhaustedRandomSource),
        Arc::new(BcryptRefreshTokenHasher::new(4)),
        32,
    )
}

pub fn minter_with_os_entropy() -> TokenMinter {
    TokenMinter::new(
        test_codec(),
        Arc::new(OsRandomSource),
        Arc::new(BcryptRefreshTokenHasher::new(4)),
        32,
    )
}

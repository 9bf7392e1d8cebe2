//! In-process implementation of CredentialStore

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::session::SessionRecord;
use crate::errors::DomainError;

use super::r#trait::CredentialStore;

/// Credential store backed by a map behind an async lock.
///
/// Clones share the same map. Records do not survive a restart, so this is
/// meant for tests and single-process development setups.
#[derive(Clone, Default)]
pub struct InMemoryCredentialStore {
    sessions: Arc<RwLock<HashMap<String, SessionRecord>>>,
}

impl InMemoryCredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn save(&self, user_id: &str, refresh_hash: &str, ip: &str) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(
            user_id.to_string(),
            SessionRecord::new(user_id, refresh_hash, ip),
        );
        Ok(())
    }

    async fn get_hash(&self, user_id: &str) -> Result<Option<String>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(user_id).map(|s| s.refresh_token_hash.clone()))
    }

    async fn update(&self, user_id: &str, new_refresh_hash: &str) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;

        if let Some(session) = sessions.get_mut(user_id) {
            session.refresh_token_hash = new_refresh_hash.to_string();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn swap_hash(
        &self,
        user_id: &str,
        expected_hash: &str,
        new_refresh_hash: &str,
        ip: &str,
    ) -> Result<bool, DomainError> {
        // Check and write under one guard so the swap is atomic.
        let mut sessions = self.sessions.write().await;

        match sessions.get_mut(user_id) {
            Some(session) if session.refresh_token_hash == expected_hash => {
                session.refresh_token_hash = new_refresh_hash.to_string();
                session.last_ip_address = ip.to_string();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn find_session(&self, user_id: &str) -> Result<Option<SessionRecord>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(user_id).cloned())
    }
}

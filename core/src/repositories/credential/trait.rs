//! Credential store trait defining the interface for refresh token hash persistence.

use async_trait::async_trait;

use crate::domain::entities::session::SessionRecord;
use crate::errors::DomainError;

/// Repository trait for the per-user session record
///
/// The store maps a user identifier to *at most one* live credential: the
/// salted hash of the current refresh secret plus the IP it was issued to.
/// Writes replace, they never append. Latest write wins and no history is kept.
///
/// # Security Considerations
/// - Only hashes are ever passed in; plaintext refresh secrets never reach the store
/// - Implementations must not distinguish "no such user" from other misses in
///   anything they surface beyond `Ok(None)` / `Ok(false)`
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert or fully replace the record for `user_id`
    ///
    /// # Arguments
    /// * `user_id` - Opaque user identifier (unique key)
    /// * `refresh_hash` - Salted hash of the new refresh secret
    /// * `ip` - Client IP at issuance
    ///
    /// # Returns
    /// * `Ok(())` - The record is durably stored
    /// * `Err(DomainError::Store)` - Persistence failed
    ///
    /// # Example
    /// ```no_run
    /// # use tk_core::repositories::CredentialStore;
    /// # async fn example(store: &impl CredentialStore) -> Result<(), Box<dyn std::error::Error>> {
    /// store.save("u1", "$2b$10$...", "10.0.0.1").await?;
    /// # Ok(())
    /// # }
    /// ```
    async fn save(&self, user_id: &str, refresh_hash: &str, ip: &str) -> Result<(), DomainError>;

    /// Fetch the current refresh hash for `user_id`
    ///
    /// # Returns
    /// * `Ok(Some(hash))` - A session exists
    /// * `Ok(None)` - No session for this user
    /// * `Err(DomainError::Store)` - Lookup failed
    async fn get_hash(&self, user_id: &str) -> Result<Option<String>, DomainError>;

    /// Overwrite the hash of an existing record, leaving its IP untouched
    ///
    /// Never creates a record.
    ///
    /// # Returns
    /// * `Ok(true)` - The record existed and was updated
    /// * `Ok(false)` - No record for this user
    /// * `Err(DomainError::Store)` - Update failed
    async fn update(&self, user_id: &str, new_refresh_hash: &str) -> Result<bool, DomainError>;

    /// Atomically replace hash and IP, but only if the stored hash is still `expected_hash`
    ///
    /// This is the compare-and-swap used by rotation: of two concurrent rotations
    /// presenting the same refresh token, exactly one observes `Ok(true)`.
    ///
    /// # Returns
    /// * `Ok(true)` - The swap happened
    /// * `Ok(false)` - No record, or the hash changed since it was read
    /// * `Err(DomainError::Store)` - Update failed
    async fn swap_hash(
        &self,
        user_id: &str,
        expected_hash: &str,
        new_refresh_hash: &str,
        ip: &str,
    ) -> Result<bool, DomainError>;

    /// Fetch the full session record for `user_id`
    async fn find_session(&self, user_id: &str) -> Result<Option<SessionRecord>, DomainError>;
}

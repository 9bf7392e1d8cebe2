//! Session record owned by the credential store.

use serde::{Deserialize, Serialize};

/// The single live refresh credential of a user.
///
/// The store holds at most one record per `user_id`; issuing or rotating
/// replaces it wholesale, so no history is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Opaque stable user identifier (unique key)
    pub user_id: String,

    /// Salted one-way hash of the current refresh secret
    pub refresh_token_hash: String,

    /// IP address seen at the last issuance or rotation (advisory)
    pub last_ip_address: String,
}

impl SessionRecord {
    pub fn new(
        user_id: impl Into<String>,
        refresh_token_hash: impl Into<String>,
        last_ip_address: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            refresh_token_hash: refresh_token_hash.into(),
            last_ip_address: last_ip_address.into(),
        }
    }
}

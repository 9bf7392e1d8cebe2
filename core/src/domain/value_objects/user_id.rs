//! Opaque user identifier accepted by the token services.

use std::fmt;

use crate::errors::DomainError;

/// Longest identifier accepted; matches the store's key column.
pub const MAX_USER_ID_LENGTH: usize = 255;

/// A validated, non-empty user identifier.
///
/// The value is otherwise opaque: UUIDs, GUIDs and arbitrary strings are all fine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Validate a raw identifier. The value is kept exactly as given; only a
    /// blank identifier is refused.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "user_id is required".to_string(),
            });
        }
        if raw.chars().count() > MAX_USER_ID_LENGTH {
            return Err(DomainError::Validation {
                message: format!("user_id must be at most {} characters", MAX_USER_ID_LENGTH),
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

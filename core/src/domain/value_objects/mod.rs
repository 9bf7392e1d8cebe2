//! Value objects representing immutable domain concepts.

pub mod user_id;

// Re-export commonly used types
pub use user_id::{UserId, MAX_USER_ID_LENGTH};

//! Database module - PostgreSQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management and schema bootstrap
//! - The `CredentialStore` implementation over the `refresh_sessions` table

pub mod connection;
pub mod postgres;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use postgres::PostgresCredentialStore;

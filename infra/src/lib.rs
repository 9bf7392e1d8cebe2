//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for TokenKeeper.
//! It provides the PostgreSQL-backed credential store and the connection
//! pool it runs on.
//!
//! ## Features
//!
//! - `postgres`: Enable PostgreSQL database support (default)

// Re-export core types for convenience
pub use tk_core::errors::*;

/// Database module - PostgreSQL implementations using SQLx
#[cfg(feature = "postgres")]
pub mod database;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::store(error)
    }
}

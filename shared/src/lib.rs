//! Shared configuration and wire types for the TokenKeeper server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error response structure returned by the HTTP layer

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, DatabaseConfig, Environment, JwtConfig, LogFormat,
    LoggingConfig, RefreshTokenConfig, ServerConfig, StoreBackend,
};
pub use errors::{error_codes, ErrorResponse};

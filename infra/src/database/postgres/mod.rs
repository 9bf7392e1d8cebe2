//! PostgreSQL repository implementations

mod credential_store_impl;

pub use credential_store_impl::PostgresCredentialStore;

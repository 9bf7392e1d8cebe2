pub mod credential;

pub use credential::{CredentialStore, InMemoryCredentialStore};

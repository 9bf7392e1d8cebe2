//! Shared response handlers

pub mod error;

pub use error::{
    error_response, handle_domain_error, json_error_handler, not_found, query_error_handler,
};

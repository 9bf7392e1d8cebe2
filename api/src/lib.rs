//! # TokenKeeper API
//!
//! actix-web transport for token issuance and rotation.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

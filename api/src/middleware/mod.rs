//! Request extractors shared by the route handlers

pub mod client_ip;

pub use client_ip::{ClientIp, ClientIpConfig};

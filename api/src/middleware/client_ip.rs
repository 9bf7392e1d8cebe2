//! Client IP extraction
//!
//! Tokens are bound to the IP of the request that obtained them. By default
//! that is the TCP peer address. Behind a reverse proxy, set
//! `trust_proxy_headers` so the `Forwarded` / `X-Forwarded-For` address is
//! used instead; never enable it when clients connect directly, since the
//! headers are client controlled.

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, Error, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use std::net::{IpAddr, SocketAddr};

use tk_shared::error_codes;

use crate::handlers::error_response;

/// How the client IP is derived, registered as app data
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientIpConfig {
    pub trust_proxy_headers: bool,
}

/// IP address of the requesting client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIp(pub IpAddr);

impl ClientIp {
    pub fn ip(&self) -> IpAddr {
        self.0
    }
}

/// Parse an address that may carry a port, brackets or quotes
pub fn parse_client_addr(raw: &str) -> Option<IpAddr> {
    let trimmed = raw.trim().trim_matches('"');

    if let Ok(ip) = trimmed.parse::<IpAddr>() {
        return Some(ip);
    }
    if let Ok(addr) = trimmed.parse::<SocketAddr>() {
        return Some(addr.ip());
    }
    trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.split(']').next())
        .and_then(|inner| inner.parse::<IpAddr>().ok())
}

fn resolve(req: &HttpRequest) -> Option<IpAddr> {
    let trust_proxy_headers = req
        .app_data::<web::Data<ClientIpConfig>>()
        .map(|config| config.trust_proxy_headers)
        .unwrap_or(false);

    if trust_proxy_headers {
        req.connection_info()
            .realip_remote_addr()
            .and_then(parse_client_addr)
    } else {
        req.peer_addr().map(|addr| addr.ip())
    }
}

impl FromRequest for ClientIp {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = resolve(req).map(ClientIp).ok_or_else(|| {
            tracing::warn!("Could not determine client IP address");
            let response = error_response(
                StatusCode::BAD_REQUEST,
                error_codes::INVALID_REQUEST,
                "Could not determine client IP address",
            );
            InternalError::from_response("unresolvable client address", response).into()
        });

        ready(result)
    }
}

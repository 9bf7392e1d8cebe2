//! Mapping of domain failures onto HTTP responses
//!
//! Clients only ever see a short code from [`error_codes`] and a fixed
//! message. Access token rejection reasons collapse into one code, and every
//! refresh failure into another, so responses cannot be used to probe which
//! users have sessions.

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};

use tk_core::errors::{DomainError, TokenError};
use tk_shared::{error_codes, ErrorResponse};

/// Build a JSON error response
pub fn error_response(status: StatusCode, code: &str, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}

/// Convert a domain error into the client-facing response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match &error {
        DomainError::Validation { message } => {
            tracing::debug!(error = %message, "Rejected invalid request");
            error_response(StatusCode::BAD_REQUEST, error_codes::INVALID_REQUEST, message)
        }
        DomainError::Token(TokenError::MalformedRefreshToken) => error_response(
            StatusCode::BAD_REQUEST,
            error_codes::INVALID_REFRESH_TOKEN,
            "Refresh token is not valid base64",
        ),
        DomainError::Token(e) if e.is_access_token_rejection() => error_response(
            StatusCode::UNAUTHORIZED,
            error_codes::INVALID_ACCESS_TOKEN,
            "Invalid access token",
        ),
        DomainError::Token(TokenError::InvalidRefreshToken | TokenError::IpAddressMismatch) => {
            error_response(
                StatusCode::UNAUTHORIZED,
                error_codes::INVALID_REFRESH_TOKEN,
                "Invalid refresh token",
            )
        }
        DomainError::Token(_)
        | DomainError::Store { .. }
        | DomainError::Crypto(_)
        | DomainError::Internal { .. } => {
            tracing::error!(error = %error, "Request failed with internal error");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                "An internal error occurred",
            )
        }
    }
}

/// Error handler for undecodable JSON bodies
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected malformed JSON body");
    let response = error_response(
        StatusCode::BAD_REQUEST,
        error_codes::INVALID_REQUEST,
        "Request body must be a JSON object with access_token and refresh_token",
    );
    InternalError::from_response(err, response).into()
}

/// Error handler for undecodable query strings
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected malformed query string");
    let response = error_response(
        StatusCode::BAD_REQUEST,
        error_codes::INVALID_REQUEST,
        "Malformed query string",
    );
    InternalError::from_response(err, response).into()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    error_response(
        StatusCode::NOT_FOUND,
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tk_core::errors::CryptoError;

    #[test]
    fn test_status_mapping() {
        let cases = vec![
            (DomainError::Validation { message: "bad".to_string() }, StatusCode::BAD_REQUEST),
            (TokenError::MalformedRefreshToken.into(), StatusCode::BAD_REQUEST),
            (TokenError::TokenExpired.into(), StatusCode::UNAUTHORIZED),
            (TokenError::InvalidSignature.into(), StatusCode::UNAUTHORIZED),
            (
                TokenError::DisallowedAlgorithm { algorithm: "HS256".to_string() }.into(),
                StatusCode::UNAUTHORIZED,
            ),
            (TokenError::InvalidRefreshToken.into(), StatusCode::UNAUTHORIZED),
            (TokenError::IpAddressMismatch.into(), StatusCode::UNAUTHORIZED),
            (TokenError::TokenGenerationFailed.into(), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::store("down"), StatusCode::INTERNAL_SERVER_ERROR),
            (
                CryptoError::EntropyUnavailable { message: "x".to_string() }.into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                DomainError::Internal { message: "x".to_string() },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(handle_domain_error(error.clone()).status(), status, "{:?}", error);
        }
    }
}

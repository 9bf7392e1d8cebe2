use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use validator::Validate;

use tk_core::repositories::CredentialStore;
use tk_shared::error_codes;

use crate::dto::auth::RefreshTokensRequest;
use crate::handlers::{error_response, handle_domain_error};
use crate::middleware::ClientIp;

use super::{token_response, AppState};

/// Handler for POST /auth/refresh-tokens
///
/// Exchanges a valid access/refresh pair for a new one. The presented
/// refresh token is consumed.
///
/// # Request Body
///
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "base64..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed body, or refresh token not valid base64
/// - 401 Unauthorized: invalid access token or invalid refresh token
/// - 500 Internal Server Error: generating or storing the new pair failed
pub async fn refresh_tokens<S>(
    state: web::Data<AppState<S>>,
    request: web::Json<RefreshTokensRequest>,
    client_ip: ClientIp,
) -> HttpResponse
where
    S: CredentialStore + 'static,
{
    if let Err(errors) = request.validate() {
        tracing::debug!(error = %errors, "Rejected refresh request");
        return error_response(
            StatusCode::BAD_REQUEST,
            error_codes::INVALID_REQUEST,
            "access_token and refresh_token are required",
        );
    }

    match state
        .rotation
        .rotate(&request.access_token, &request.refresh_token, client_ip.ip())
        .await
    {
        Ok(rotated) => token_response(rotated.tokens),
        Err(error) => handle_domain_error(error),
    }
}

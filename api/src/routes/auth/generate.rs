use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

use tk_core::errors::DomainError;
use tk_core::repositories::CredentialStore;
use tk_shared::error_codes;

use crate::dto::auth::GenerateTokensQuery;
use crate::handlers::{error_response, handle_domain_error};
use crate::middleware::ClientIp;

use super::{token_response, AppState};

/// Handler for POST /auth/generate-tokens?user_id=<id>
///
/// Issues a new token pair bound to the caller's IP. Any refresh token
/// previously issued to the same user stops working.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "base64..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: `user_id` missing, empty or too long
/// - 500 Internal Server Error: token generation or persistence failed
pub async fn generate_tokens<S>(
    state: web::Data<AppState<S>>,
    query: web::Query<GenerateTokensQuery>,
    client_ip: ClientIp,
) -> HttpResponse
where
    S: CredentialStore + 'static,
{
    let user_id = match query.into_inner().user_id {
        Some(user_id) if !user_id.trim().is_empty() => user_id,
        _ => {
            return error_response(
                StatusCode::BAD_REQUEST,
                error_codes::MISSING_USER_ID,
                "user_id query parameter is required",
            )
        }
    };

    match state.issuance.issue(&user_id, client_ip.ip()).await {
        Ok(pair) => token_response(pair),
        Err(DomainError::Validation { message }) => {
            error_response(StatusCode::BAD_REQUEST, error_codes::INVALID_USER_ID, &message)
        }
        Err(error) => handle_domain_error(error),
    }
}

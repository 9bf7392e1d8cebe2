//! Application factory
//!
//! Builds the actix-web `App` with routes, extractor configuration and the
//! shared service state. Request logging is layered on by the caller.

use actix_web::{web, App};

use tk_core::repositories::CredentialStore;

use crate::handlers::{json_error_handler, not_found, query_error_handler};
use crate::middleware::ClientIpConfig;
use crate::routes::auth::{generate_tokens, refresh_tokens, AppState};
use crate::routes::health::health_check;

/// Create and configure the application with all dependencies
pub fn create_app<S>(
    app_state: web::Data<AppState<S>>,
    client_ip: ClientIpConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: CredentialStore + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::Data::new(client_ip))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/auth")
                .route("/generate-tokens", web::post().to(generate_tokens::<S>))
                .route("/refresh-tokens", web::post().to(refresh_tokens::<S>)),
        )
        .default_service(web::route().to(not_found))
}

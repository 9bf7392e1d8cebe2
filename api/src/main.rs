use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

use tk_api::app::create_app;
use tk_api::config::{init_tracing, load_config, warn_on_weak_settings};
use tk_api::middleware::ClientIpConfig;
use tk_api::routes::auth::AppState;
use tk_core::repositories::{CredentialStore, InMemoryCredentialStore};
use tk_core::services::token::TokenServiceConfig;
use tk_infra::database::{DatabasePool, PostgresCredentialStore};
use tk_shared::{AppConfig, StoreBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("failed to load configuration")?;

    init_tracing(&config.logging);
    info!(environment = %config.environment, "Starting TokenKeeper API server");
    warn_on_weak_settings(&config);

    match config.database.backend {
        StoreBackend::Postgres => {
            let pool = DatabasePool::new(config.database.clone())
                .await
                .context("failed to connect to the database")?;
            pool.ensure_schema()
                .await
                .context("failed to create the refresh_sessions table")?;
            info!(stats = %pool.get_statistics(), "Database ready");

            let store = Arc::new(PostgresCredentialStore::new(pool.get_pool().clone()));
            let result = serve(store, &config).await;
            pool.close().await;
            result
        }
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory credential store; sessions are lost on restart");
            serve(Arc::new(InMemoryCredentialStore::new()), &config).await
        }
    }
}

async fn serve<S>(store: Arc<S>, config: &AppConfig) -> anyhow::Result<()>
where
    S: CredentialStore + 'static,
{
    let token_config = TokenServiceConfig::from(&config.auth);
    let state = web::Data::new(
        AppState::new(store, &token_config).context("failed to initialise token services")?,
    );
    let client_ip = ClientIpConfig {
        trust_proxy_headers: config.server.trust_proxy_headers,
    };

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind");

    HttpServer::new(move || create_app(state.clone(), client_ip).wrap(TracingLogger::default()))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")
}

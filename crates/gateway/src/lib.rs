//! API Gateway Library
//!
//! The HTTP surface of the content API: auth, generation, the content-type
//! catalog, the current-user profile and health, wired onto the service
//! crates.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::sync::Arc;

use tracing::info;

use auth_service_lib::{Authenticator, JwtService};
use common::{AppError, AppResult};
use generation_service_lib::GeminiGenerator;
use user_service_lib::{infra::Database, UserStore};

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Connect the store, build the services and serve until shutdown.
pub async fn run(config: GatewayConfig) -> AppResult<()> {
    let database = Database::connect(&config.users.database).await?;
    let users = Arc::new(UserStore::new(database.get_connection()));

    let auth_service = Arc::new(Authenticator::new(
        users.clone(),
        JwtService::new(&config.auth.jwt)?,
    ));
    let generator = Arc::new(GeminiGenerator::new(&config.generation.gemini)?);
    info!(
        model = %config.generation.gemini.model,
        timeout_seconds = config.generation.gemini.timeout_seconds,
        "Generation upstream configured"
    );

    let state = AppState::new(auth_service, generator, users);
    let app = create_router(state, &config.cors);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;
    info!("{} listening on http://{}", config.server.service_name, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

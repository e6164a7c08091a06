//! Route configuration.

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::CorsConfig;

use crate::handlers::{auth_routes, content_routes, generate_routes, health_routes, user_routes};
use crate::middleware::{auth_middleware, cors_layer};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        // Health check (no auth)
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes(state.clone()))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Public
        .nest("/auth", auth_routes())
        .merge(generate_routes())
        .merge(content_routes())
        // Bearer token required
        .nest(
            "/users",
            user_routes().route_layer(middleware::from_fn_with_state(state, auth_middleware)),
        )
}

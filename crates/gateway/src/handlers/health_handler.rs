//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub services: ServiceStatus,
}

/// Individual service status.
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub database: ServiceHealth,
}

/// Service health with optional error message.
#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - verifies database connectivity.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = match state.users.ping().await {
        Ok(()) => ServiceHealth {
            status: "healthy",
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            ServiceHealth {
                status: "unhealthy",
                error: Some(e.user_message()),
            }
        }
    };

    let healthy = database.error.is_none();
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        services: ServiceStatus { database },
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response)).into_response()
}

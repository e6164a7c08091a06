//! Content generation handler.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;

use crate::extractors::{not_blank, ValidatedJson};
use crate::state::AppState;

/// Generation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateRequest {
    /// Text the prompt template is wrapped around
    #[validate(custom(function = "not_blank", message = "Content is required"))]
    #[schema(example = "cats")]
    pub content: String,
    /// Content type tag, see `GET /api/content-types`
    #[serde(rename = "type")]
    #[validate(custom(function = "not_blank", message = "Type is required"))]
    #[schema(example = "blog")]
    pub content_type: String,
}

/// Generated text, or a fallback message when the upstream had nothing
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateResponse {
    pub output: String,
}

/// Create generation routes
pub fn generate_routes() -> Router<AppState> {
    Router::new().route("/generate", post(generate))
}

/// Generate content for a content type
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "Generation",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated text or fallback message", body = GenerateResponse),
        (status = 400, description = "Blank content or type")
    )
)]
pub async fn generate(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<GenerateRequest>,
) -> AppResult<Json<GenerateResponse>> {
    let generation = state
        .generator
        .generate(&payload.content, &payload.content_type)
        .await;

    if generation.is_soft_failure() {
        tracing::debug!(content_type = %payload.content_type, ?generation, "Returning fallback");
    }

    Ok(Json(GenerateResponse {
        output: generation.into_text(),
    }))
}

//! Content-type catalog handler.

use axum::{response::Json, routing::get, Router};

use domain::{ContentType, ContentTypeInfo};

use crate::state::AppState;

/// Create catalog routes
pub fn content_routes() -> Router<AppState> {
    Router::new().route("/content-types", get(list_content_types))
}

/// List supported content types
#[utoipa::path(
    get,
    path = "/api/content-types",
    tag = "Generation",
    responses(
        (status = 200, description = "Supported content types", body = Vec<ContentTypeInfo>)
    )
)]
pub async fn list_content_types() -> Json<Vec<ContentTypeInfo>> {
    Json(ContentType::ALL.into_iter().map(ContentTypeInfo::from).collect())
}

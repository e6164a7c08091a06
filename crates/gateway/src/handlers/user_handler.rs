//! User handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::UserResponse;

use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_current_user))
}

/// Get current authenticated user
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile", body = UserResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "User no longer exists")
    )
)]
pub async fn get_current_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<UserResponse>> {
    let user = state.auth_service.current_user(&current_user.email).await?;
    Ok(Json(UserResponse::from(user)))
}

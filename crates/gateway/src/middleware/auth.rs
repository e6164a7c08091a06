//! Authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};

use common::{AppError, AppResult};
use domain::BEARER_TOKEN_PREFIX;

use crate::state::AppState;

/// Current authenticated user extracted from JWT.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub email: String,
}

/// Authentication middleware that validates JWT tokens.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(&request)?;

    let claims = state.auth_service.verify_token(token)?;

    let current_user = CurrentUser { email: claims.sub };
    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}

/// Extract bearer token from Authorization header.
fn extract_token(request: &Request<Body>) -> AppResult<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AppError::MissingToken)
}

//! Authentication handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use auth_service_lib::LoginResponse;
use common::AppResult;
use domain::REGISTER_SUCCESS_MESSAGE;

use crate::extractors::{not_blank, ValidatedJson};
use crate::state::AppState;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Unique username
    #[validate(
        custom(function = "not_blank", message = "Username is required"),
        length(max = 50, message = "Username must be at most 50 characters")
    )]
    #[schema(example = "alice")]
    pub username: String,
    /// Unique email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(custom(function = "not_blank", message = "Email is required"))]
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Plain acknowledgement
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User registered successfully!")]
    pub message: String,
}

/// Issued session token
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub message: String,
    /// HS256 JWT to send as `Authorization: Bearer <token>`
    pub token: String,
}

impl From<LoginResponse> for TokenResponse {
    fn from(response: LoginResponse) -> Self {
        Self {
            message: response.message,
            token: response.token,
        }
    }
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username or email already exists")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state
        .auth_service
        .register(payload.username, payload.email, payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: REGISTER_SUCCESS_MESSAGE.to_string(),
        }),
    ))
}

/// Login and get JWT token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid email or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let response = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(response.into()))
}

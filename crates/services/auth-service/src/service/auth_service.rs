//! Authentication service - registration, login and token verification.
//!
//! Passwords are hashed through the domain `Password` value object; the
//! credential store is reached through `UserRepository`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::token::{Claims, JwtService};
use common::{AppError, AppResult, OptionExt};
use domain::{NewUser, Password, User, LOGIN_SUCCESS_MESSAGE};
use user_service_lib::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Stand-in password hashed once so unknown emails pay for a verification too.
const TIMING_DUMMY_PASSWORD: &str = "timing-equalisation-placeholder";

/// Result of a successful login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user with the default role
    async fn register(&self, username: String, email: String, password: String)
        -> AppResult<User>;

    /// Verify credentials and issue a token
    async fn login(&self, email: String, password: String) -> AppResult<LoginResponse>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;

    /// Resolve the profile behind an authenticated subject
    async fn current_user(&self, email: &str) -> AppResult<User>;
}

/// Concrete implementation of AuthService backed by the credential store.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    tokens: JwtService,
    dummy_hash: Option<Password>,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, tokens: JwtService) -> Self {
        let dummy_hash = Password::new(TIMING_DUMMY_PASSWORD).ok();
        Self {
            users,
            tokens,
            dummy_hash,
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<User> {
        // Username wins when both collide
        if self.users.find_by_username(&username).await?.is_some() {
            return Err(AppError::DuplicateUsername);
        }
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        let password_hash = Password::new(&password)?.into_string();

        let user = self
            .users
            .create(NewUser::with_default_role(username, email, password_hash))
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    async fn login(&self, email: String, password: String) -> AppResult<LoginResponse> {
        let Some(user) = self.users.find_by_email(&email).await? else {
            if let Some(dummy) = &self.dummy_hash {
                dummy.verify(&password);
            }
            tracing::info!("Login rejected: unknown email");
            return Err(AppError::Unauthorized);
        };

        if !Password::from_hash(user.password_hash.as_str()).verify(&password) {
            tracing::info!(user_id = user.id, "Login rejected: bad password");
            return Err(AppError::Unauthorized);
        }

        let issued = self.tokens.issue(&user.email, user.authorities())?;
        tracing::info!(user_id = user.id, expires_at = %issued.expires_at, "Token issued");

        Ok(LoginResponse {
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
            token: issued.token,
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        self.tokens.validate(token)
    }

    async fn current_user(&self, email: &str) -> AppResult<User> {
        self.users.find_by_email(email).await?.ok_or_not_found()
    }
}

//! Authentication service business logic.

mod auth_service;

pub use auth_service::{AuthService, Authenticator, LoginResponse};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockAuthService;

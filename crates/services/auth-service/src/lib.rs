//! Auth Service Library
//!
//! Registration and login on top of the credential store, plus the JWT
//! token service used by the gateway's bearer middleware.

pub mod config;
pub mod service;
pub mod token;

pub use crate::config::AuthServiceConfig;
pub use crate::service::{AuthService, Authenticator, LoginResponse};
pub use crate::token::{Claims, IssuedToken, JwtService};

#[cfg(any(test, feature = "test-utils"))]
pub use crate::service::MockAuthService;

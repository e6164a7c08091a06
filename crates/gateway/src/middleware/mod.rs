//! Middleware for authentication and cross-origin requests.

mod auth;
mod cors;

pub use auth::{auth_middleware, CurrentUser};
pub use cors::cors_layer;

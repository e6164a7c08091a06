//! Application state for dependency injection.

use std::sync::Arc;

use auth_service_lib::AuthService;
use generation_service_lib::ContentGenerator;
use user_service_lib::UserRepository;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub generator: Arc<dyn ContentGenerator>,
    /// Used by the health check
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        generator: Arc<dyn ContentGenerator>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            auth_service,
            generator,
            users,
        }
    }
}

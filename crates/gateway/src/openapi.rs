//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::auth_handler::{LoginRequest, MessageResponse, RegisterRequest, TokenResponse};
use crate::handlers::generate_handler::{GenerateRequest, GenerateResponse};
use domain::{ContentCategory, ContentTypeInfo, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth_handler::register,
        crate::handlers::auth_handler::login,
        crate::handlers::generate_handler::generate,
        crate::handlers::content_handler::list_content_types,
        crate::handlers::user_handler::get_current_user,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            MessageResponse,
            TokenResponse,
            GenerateRequest,
            GenerateResponse,
            ContentTypeInfo,
            ContentCategory,
            UserResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Generation", description = "Prompt templates and content generation"),
        (name = "Users", description = "Authenticated user profile"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

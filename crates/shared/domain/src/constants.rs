//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Default authority assigned to new users
pub const ROLE_USER: &str = "ROLE_USER";

/// Administrator authority with elevated privileges
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_USER, ROLE_ADMIN];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum username length (matches the column width)
pub const MAX_USERNAME_LENGTH: usize = 50;

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Longest accepted token validity (one year)
pub const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 365;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Acknowledgement returned after a successful registration
pub const REGISTER_SUCCESS_MESSAGE: &str = "User registered successfully!";

/// Instruction returned alongside a freshly issued token
pub const LOGIN_SUCCESS_MESSAGE: &str =
    "Login successful! Use this token for Authorization header: Bearer <token>";

// =============================================================================
// Generation
// =============================================================================

/// Fallback text when the upstream answered without any candidate text
pub const NO_CONTENT_GENERATED: &str = "No content generated.";

/// Fallback text when the upstream call failed for any reason
pub const UPSTREAM_API_ERROR: &str = "Could not generate content (API error).";

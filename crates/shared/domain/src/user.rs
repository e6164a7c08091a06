//! User domain entity and related types.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_ADMIN, ROLE_USER};

/// User roles enumeration
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum UserRole {
    #[default]
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl UserRole {
    /// Authority string embedded in tokens and stored in `user_roles`
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::User => ROLE_USER,
        }
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

impl From<String> for UserRole {
    fn from(s: String) -> Self {
        UserRole::from(s.as_str())
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub roles: BTreeSet<UserRole>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Authority strings derived from the role set
    pub fn authorities(&self) -> Vec<String> {
        self.roles.iter().map(|role| role.to_string()).collect()
    }
}

/// A user about to be persisted. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub roles: BTreeSet<UserRole>,
}

impl NewUser {
    /// Build a registration record carrying only the default role.
    pub fn with_default_role(username: String, email: String, password_hash: String) -> Self {
        Self {
            username,
            email,
            password_hash,
            roles: BTreeSet::from([UserRole::default()]),
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    pub id: i64,
    /// Unique username
    pub username: String,
    /// User email address
    pub email: String,
    /// Granted authorities
    pub roles: Vec<String>,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            roles: user.authorities(),
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

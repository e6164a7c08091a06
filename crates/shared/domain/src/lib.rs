//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! users and their roles, password hashing, and the content-type catalog
//! that turns user text into a generation prompt.

pub mod constants;
pub mod content;
pub mod error;
pub mod password;
pub mod user;

pub use constants::*;
pub use content::{resolve_prompt, ContentCategory, ContentType, ContentTypeInfo};
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use user::{NewUser, User, UserResponse, UserRole};

//! User repository backed by the `users` and `user_roles` tables.

use async_trait::async_trait;
use sea_orm::{
    sea_query::IntoCondition, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr, TransactionTrait,
};

use super::entities::{user, user_role};
use common::{AppError, AppResult};
use domain::{is_valid_role, NewUser, User, UserRole};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a user and its role set atomically.
    ///
    /// Fails with `DuplicateUsername` / `DuplicateEmail` when a unique index
    /// rejects the row.
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// Check store connectivity
    async fn ping(&self) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_one(&self, filter: impl IntoCondition) -> AppResult<Option<User>> {
        let found = user::Entity::find()
            .filter(filter)
            .find_with_related(user_role::Entity)
            .all(&self.db)
            .await?;

        Ok(found
            .into_iter()
            .next()
            .map(|(model, roles)| into_domain(model, roles)))
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.find_one(user::Column::Username.eq(username)).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_one(user::Column::Email.eq(email)).await
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        if new_user.roles.is_empty() {
            return Err(AppError::validation("A user needs at least one role"));
        }

        let txn = self.db.begin().await?;

        let model = user::ActiveModel {
            username: Set(new_user.username),
            email: Set(new_user.email),
            password_hash: Set(new_user.password_hash),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(map_insert_error)?;

        let role_rows = new_user.roles.iter().map(|role| user_role::ActiveModel {
            user_id: Set(model.id),
            role: Set(role.to_string()),
        });
        user_role::Entity::insert_many(role_rows)
            .exec_without_returning(&txn)
            .await?;

        txn.commit().await?;

        tracing::debug!(user_id = model.id, "User row created");

        Ok(User {
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            roles: new_user.roles,
            created_at: model.created_at,
        })
    }

    async fn ping(&self) -> AppResult<()> {
        crate::infra::db::ping(&self.db).await?;
        Ok(())
    }
}

/// Combine a user row with its role rows.
fn into_domain(model: user::Model, roles: Vec<user_role::Model>) -> User {
    let roles = roles
        .into_iter()
        .map(|row| {
            if !is_valid_role(&row.role) {
                tracing::warn!(user_id = model.id, role = %row.role, "Unknown role in store");
            }
            UserRole::from(row.role)
        })
        .collect();

    User {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        roles,
        created_at: model.created_at,
    }
}

/// Translate unique-index violations into the matching duplicate error.
fn map_insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) if detail.contains("email") => {
            AppError::DuplicateEmail
        }
        Some(SqlErr::UniqueConstraintViolation(detail)) if detail.contains("username") => {
            AppError::DuplicateUsername
        }
        _ => AppError::Database(err),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use common::DatabaseConfig;

    use super::*;
    use crate::infra::Database;

    async fn store() -> UserStore {
        let db = Database::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        })
        .await
        .unwrap();
        UserStore::new(db.get_connection())
    }

    fn alice() -> NewUser {
        NewUser::with_default_role(
            "alice".to_string(),
            "a@x.com".to_string(),
            "$argon2id$stub".to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find_by_email() {
        let store = store().await;
        let created = store.create(alice()).await.unwrap();

        let found = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.username, "alice");
        assert_eq!(found.roles, BTreeSet::from([UserRole::User]));
    }

    #[tokio::test]
    async fn test_find_by_username() {
        let store = store().await;
        store.create(alice()).await.unwrap();

        assert!(store.find_by_username("alice").await.unwrap().is_some());
        assert!(store.find_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_user_is_none() {
        let store = store().await;
        assert!(store.find_by_email("nobody@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unique_email_enforced_by_schema() {
        let store = store().await;
        store.create(alice()).await.unwrap();

        let mut clash = alice();
        clash.username = "alice2".to_string();
        let result = store.create(clash).await;
        assert!(matches!(result, Err(AppError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_unique_username_enforced_by_schema() {
        let store = store().await;
        store.create(alice()).await.unwrap();

        let mut clash = alice();
        clash.email = "other@x.com".to_string();
        let result = store.create(clash).await;
        assert!(matches!(result, Err(AppError::DuplicateUsername)));
    }

    #[tokio::test]
    async fn test_failed_insert_leaves_no_roles_behind() {
        let store = store().await;
        let first = store.create(alice()).await.unwrap();
        let _ = store.create(alice()).await;

        let found = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert_eq!(found.roles.len(), 1);
    }

    #[tokio::test]
    async fn test_multiple_roles_round_trip() {
        let store = store().await;
        let mut admin = alice();
        admin.roles.insert(UserRole::Admin);
        store.create(admin).await.unwrap();

        let found = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert!(found.roles.contains(&UserRole::Admin));
        assert_eq!(found.authorities(), vec!["ROLE_USER", "ROLE_ADMIN"]);
    }

    #[tokio::test]
    async fn test_empty_role_set_rejected() {
        let store = store().await;
        let mut roleless = alice();
        roleless.roles.clear();

        assert!(matches!(
            store.create(roleless).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_ping() {
        store().await.ping().await.unwrap();
    }
}

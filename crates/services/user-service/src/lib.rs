//! User Service Library
//!
//! The credential store: user records, their role sets, the SeaORM entities
//! behind them and the schema migrations.

pub mod config;
pub mod infra;
pub mod repository;

use tracing::info;

use common::AppResult;

use crate::config::UserServiceConfig;
use crate::infra::Database;

pub use crate::repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use crate::repository::MockUserRepository;

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(config: &UserServiceConfig, action: MigrateAction) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

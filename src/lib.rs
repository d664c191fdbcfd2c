pub mod application;
pub mod cli;
pub mod db;
pub mod domain;
pub mod errors;
pub mod images;
pub mod infrastructure;
pub mod schema;
pub mod view;

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use domain::errors::DomainError;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database and
/// return how many were applied.
pub fn run_migrations(pool: &DbPool) -> Result<usize, DomainError> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DomainError::Internal(format!("failed to run migrations: {e}")))?;
    Ok(applied.len())
}

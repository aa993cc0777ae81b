//! Database access layer
//!
//! Connection pool setup, embedded migrations, and the repositories that own
//! all SQL.

pub mod connection;
pub mod repositories;

use sqlx::PgPool;

pub use connection::create_pool;

/// Apply any pending migrations from `./migrations`
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

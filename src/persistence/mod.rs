//! Persistence layer: PostgreSQL-backed post storage.
//!
//! [`connect`] builds the `sqlx::PgPool` from configuration and applies the
//! embedded migrations; [`PgPostRepository`] implements
//! [`crate::repository::PostRepository`] on top of it.

pub mod models;
pub mod postgres;

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::BoardConfig;
use crate::error::BoardError;

pub use postgres::PgPostRepository;

/// Opens the connection pool and runs pending migrations.
///
/// # Errors
///
/// Returns [`BoardError::PersistenceError`] if the database is unreachable
/// or a migration fails.
pub async fn connect(config: &BoardConfig) -> Result<PgPool, BoardError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| BoardError::PersistenceError(e.to_string()))?;

    tracing::info!(
        max_connections = config.database_max_connections,
        "database pool ready"
    );
    Ok(pool)
}

//! Database pool bootstrap and schema migrations

use std::{str::FromStr, time::Duration};

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};

/// How long a connection waits on a lock held by another process
const BUSY_TIMEOUT_SECS: u64 = 5;

/// Open the connection pool described by `config` and bring the schema up to date.
///
/// An in-memory database only exists as long as its connection does, so such
/// URLs get a single connection that is never reaped. File databases use WAL
/// so readers keep going while a write transaction is open.
pub async fn connect(config: &DatabaseConfig) -> AppResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(BUSY_TIMEOUT_SECS));

    let (options, pool_options) = if config.is_in_memory() {
        let pool_options = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
        (options, pool_options)
    } else {
        let pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections.min(config.max_connections));
        (options.journal_mode(SqliteJournalMode::Wal), pool_options)
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::debug!("Connected to database {}", config.url);

    migrate(&pool).await?;
    Ok(pool)
}

/// Run the embedded migrations from `./migrations`
pub async fn migrate(pool: &SqlitePool) -> AppResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::Internal(format!("Migration failed: {}", e)))?;
    tracing::debug!("Database migrations completed");
    Ok(())
}

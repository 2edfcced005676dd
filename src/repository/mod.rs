//! Repository layer for database operations.
//!
//! Every query function is generic over [`SqliteExecutor`](sqlx::SqliteExecutor),
//! so the same code runs against the pool for reads and against a
//! `&mut *tx` when a service groups several statements into one transaction.
//!
//! ## Concurrency: single writer, many readers
//!
//! SQLite allows one writer per database file. A deferred transaction that
//! reads and then writes cannot wait for the write lock once another
//! connection holds it, so write transactions are serialized here behind
//! `write_lock` before `BEGIN`. Reads go straight to the pool.

pub mod authors;
pub mod book_authors;
pub mod books;
pub mod editions;

use std::{
    ops::{Deref, DerefMut},
    sync::Arc,
};

use sqlx::{Pool, Sqlite, SqliteConnection, Transaction};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::error::AppResult;

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    /// Shared by every clone, held for the lifetime of a [`WriteTransaction`]
    write_lock: Arc<Mutex<()>>,
}

/// Transaction holding the repository write lock until it commits or drops.
/// Dropping it without `commit` rolls back.
pub struct WriteTransaction {
    tx: Transaction<'static, Sqlite>,
    _guard: OwnedMutexGuard<()>,
}

impl WriteTransaction {
    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await
    }
}

impl Deref for WriteTransaction {
    type Target = SqliteConnection;

    fn deref(&self) -> &SqliteConnection {
        &self.tx
    }
}

impl DerefMut for WriteTransaction {
    fn deref_mut(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            pool,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Wait for the write lock, then start a transaction
    pub async fn begin(&self) -> AppResult<WriteTransaction> {
        let guard = self.write_lock.clone().lock_owned().await;
        let tx = self.pool.begin().await?;
        Ok(WriteTransaction { tx, _guard: guard })
    }

    /// Cheap connectivity probe used by the readiness endpoint
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

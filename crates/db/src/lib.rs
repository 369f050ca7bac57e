use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod models;
pub mod repositories;
pub mod schema;

pub type DbPool = sqlx::SqlitePool;

/// How long a connection waits on a locked database before `SQLITE_BUSY`.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Build a connection pool for the SQLite file at `path`.
///
/// The pool connects lazily: an unreachable or unwritable file does not
/// fail here, it fails the first statement that needs a connection. The
/// file is created on first connect if it does not exist.
pub fn create_pool(path: impl AsRef<Path>, max_connections: u32) -> DbPool {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(options)
}

/// Create the `notes` table and its indexes if they are missing.
///
/// Safe to call on every start; existing rows are never touched.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    for statement in schema::STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!(statements = schema::STATEMENTS.len(), "Schema ensured");
    Ok(())
}

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub mod models;
pub mod repository;

/// Schema lives in ./migrations as static SQL, applied at startup
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    UniqueViolation(String),

    #[error("{0}")]
    ForeignKeyViolation(String),

    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

// SQLite extended result codes
const UNIQUE_CONSTRAINT_VIOLATION_CODE: &str = "2067";
const FOREIGN_KEY_CONSTRAINT_VIOLATION_CODE: &str = "787";

pub(crate) fn is_unique_constraint_violation(err: &sqlx::Error) -> bool {
    has_error_code(err, UNIQUE_CONSTRAINT_VIOLATION_CODE)
}

pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    has_error_code(err, FOREIGN_KEY_CONSTRAINT_VIOLATION_CODE)
}

fn has_error_code(err: &sqlx::Error, expected: &str) -> bool {
    if let sqlx::Error::Database(db_err) = err {
        if let Some(code) = db_err.code() {
            return code == expected;
        }
    }

    false
}

/// Open a pool against `url` and bring the schema up to date.
///
/// Foreign keys are enforced on every connection; WAL keeps concurrent
/// readers out of the writer's way on file-backed databases.
pub async fn connect(url: &str, config: &crate::config::DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    let mut opts = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal);

    if !config.enable_query_logging {
        opts = opts.disable_statement_logging();
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout))
        .connect_with(opts)
        .await?;

    MIGRATOR.run(&pool).await?;

    info!("Connected database pool for: {}", url);
    Ok(pool)
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    // Single connection so the in-memory database is shared across queries
    let config = crate::config::DatabaseConfig {
        max_connections: 1,
        connection_timeout: 5,
        enable_query_logging: false,
    };
    connect("sqlite::memory:", &config).await.expect("in-memory pool")
}

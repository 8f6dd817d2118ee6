use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// How long a writer waits for another connection's write lock.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Schema for `employees` and `attendance_records`, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens (creating if needed) the database and brings the schema up to date.
///
/// Foreign keys are switched on for every pooled connection so the
/// attendance -> employee reference is enforced by the store itself.
/// File databases run in WAL mode so readers never block the single writer.
/// For `sqlite::memory:` pass `max_connections = 1`: each connection
/// would otherwise see its own empty database.
pub async fn init_db(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await?;

    MIGRATOR.run(&pool).await?;

    tracing::info!(database_url, "Database ready");
    Ok(pool)
}

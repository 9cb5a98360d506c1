//! SQLite connection pool management using diesel and r2d2.
//!
//! Every pooled connection is configured on checkout with a busy timeout and WAL
//! journaling, so concurrent writers queue on the database lock instead of failing.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use ghostrdp_utils::logging::prelude::*;
use std::path::Path;

/// Embedded migrations for the database.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../ghostrdp-models/migrations");

/// A connection checked out of the pool.
pub type PooledSqlite = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Pragmas applied to every new connection.
#[derive(Debug, Clone, Copy)]
struct ConnectionOptions {
    busy_timeout_ms: u64,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;",
            self.busy_timeout_ms
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Represents a pool of SQLite database connections.
#[derive(Clone)]
pub struct ConnectionPool {
    /// The actual connection pool.
    pub pool: Pool<ConnectionManager<SqliteConnection>>,
    /// The path or URI the pool was opened with.
    pub database_url: String,
}

/// Returns true for URLs that name a private in-memory database.
pub fn is_in_memory(database_url: &str) -> bool {
    database_url == ":memory:" || database_url.starts_with("file::memory:")
}

/// Creates a shared connection pool for a SQLite database.
///
/// # Arguments
///
/// * `database_url` - Path to the database file, or `:memory:`
/// * `max_size` - The maximum number of connections the pool should maintain
/// * `busy_timeout_ms` - How long a connection waits on a locked database
///
/// # Returns
///
/// Returns a `ConnectionPool`, or the pool error when the first connection cannot be opened.
///
/// An in-memory database only exists per connection, so such a pool is capped at one connection.
pub fn create_shared_connection_pool(
    database_url: &str,
    max_size: u32,
    busy_timeout_ms: u64,
) -> Result<ConnectionPool, r2d2::Error> {
    let max_size = if is_in_memory(database_url) {
        1
    } else {
        max_size.max(1)
    };

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    let pool = Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(ConnectionOptions { busy_timeout_ms }))
        .build(manager)?;

    Ok(ConnectionPool {
        pool,
        database_url: database_url.to_string(),
    })
}

impl ConnectionPool {
    /// Gets a connection from the pool.
    pub fn get(&self) -> Result<PooledSqlite, r2d2::Error> {
        self.pool.get()
    }

    /// Whether the database the pool points at is present.
    ///
    /// In-memory databases always count as present.
    pub fn database_exists(&self) -> bool {
        is_in_memory(&self.database_url) || Path::new(&self.database_url).exists()
    }

    /// Runs every pending embedded migration.
    ///
    /// # Returns
    ///
    /// The versions of the migrations that were applied.
    pub fn run_migrations(
        &self,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync + 'static>> {
        let mut conn = self.get()?;
        let applied = conn.run_pending_migrations(MIGRATIONS)?;
        let versions: Vec<String> = applied.iter().map(|v| v.to_string()).collect();
        info!("Applied {} pending migration(s)", versions.len());
        Ok(versions)
    }
}

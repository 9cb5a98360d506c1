//! Data model for the ghost-rdp management backend: the diesel schema, row and
//! changeset types for every table, and the validation applied before a row is written.

pub mod models;
pub mod schema;

#[cfg(test)]
/// In-memory database with every migration applied, for tests in this crate.
pub(crate) fn establish_test_connection() -> diesel::SqliteConnection {
    use diesel::prelude::*;
    use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

    const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

    let mut conn = SqliteConnection::establish(":memory:")
        .unwrap_or_else(|_| panic!("Error opening in-memory database"));
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run migrations");
    conn
}

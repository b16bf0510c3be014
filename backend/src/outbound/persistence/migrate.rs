//! Startup schema migration.
//!
//! The users table is created by an embedded Diesel migration applied once
//! before the server starts serving. Migrations are idempotent: already
//! applied versions are skipped and existing data is left untouched.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::domain::ports::UserStoreError;

/// Embedded migrations from the crate's `migrations/` directory.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply any pending migrations over a dedicated, short-lived connection.
///
/// The synchronous connection is dropped before the async pool is built, so
/// the serving process never shares it.
///
/// # Errors
///
/// Returns [`UserStoreError::Connection`] when the store is unreachable and
/// [`UserStoreError::Query`] when a migration fails to apply. Both are fatal
/// to startup.
pub fn run_migrations(database_url: &str) -> Result<(), UserStoreError> {
    let mut conn = PgConnection::establish(database_url)
        .map_err(|err| UserStoreError::connection(err.to_string()))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| UserStoreError::query(format!("migration failed: {err}")))?;
    Ok(())
}

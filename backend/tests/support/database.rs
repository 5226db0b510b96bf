//! PostgreSQL access for integration tests.
//!
//! Tests that need a database read its URL from `FEEDBACK_TEST_DATABASE_URL`.
//! When the variable is unset they print a skip marker and return early, so
//! the suite still passes on machines without PostgreSQL.

use std::sync::{Mutex, MutexGuard, PoisonError};

use diesel::{Connection, PgConnection, RunQueryDsl};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub const DATABASE_URL_ENV: &str = "FEEDBACK_TEST_DATABASE_URL";

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

static DATABASE: Mutex<()> = Mutex::new(());

/// Exclusive access to a freshly reset `feedback` table.
pub struct ResetDatabase {
    pub url: String,
    _lock: MutexGuard<'static, ()>,
}

/// Database URL from the environment, or `None` after printing a skip marker.
pub fn database_url_or_skip(test: &str) -> Option<String> {
    match std::env::var(DATABASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-DATABASE: {test}: set {DATABASE_URL_ENV} to run");
            None
        }
    }
}

/// Apply migrations and empty the table, restarting the id sequence.
///
/// The returned guard serialises tests that share the database.
pub fn reset_database(url: String) -> Result<ResetDatabase, String> {
    let lock = DATABASE.lock().unwrap_or_else(PoisonError::into_inner);
    let mut conn = PgConnection::establish(&url).map_err(|err| err.to_string())?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| err.to_string())?;
    diesel::sql_query("TRUNCATE feedback RESTART IDENTITY")
        .execute(&mut conn)
        .map_err(|err| err.to_string())?;
    Ok(ResetDatabase { url, _lock: lock })
}

//! Schema versioning with a destructive fallback.
//!
//! The sleep database has exactly one table and no upgrade path: the schema
//! version is kept in SQLite's `PRAGMA user_version`, and when a database file
//! carries a different version the table is dropped and recreated. Version `0`
//! is what SQLite reports for a brand new file, so that case simply creates the
//! schema.
//!
//! ## Usage
//!
//! ```rust
//! use sleeptrack::db::migrations::{get_db_version, init_schema, SCHEMA_VERSION};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_schema(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, SCHEMA_VERSION);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use rusqlite::{Connection, Transaction};

/// Version of the table layout below. Bump it whenever the layout changes;
/// existing files are then wiped on open.
pub const SCHEMA_VERSION: u32 = 1;

pub const SESSIONS_TABLE: &str = "daily_sleep_quality_table";

const SCHEMA_SESSIONS: &str = "CREATE TABLE IF NOT EXISTS daily_sleep_quality_table (
    night_id INTEGER PRIMARY KEY AUTOINCREMENT,
    start_time_milli INTEGER NOT NULL,
    end_time_milli INTEGER NOT NULL,
    quality_rating INTEGER NOT NULL DEFAULT -1
)";

const DROP_SESSIONS: &str = "DROP TABLE IF EXISTS daily_sleep_quality_table";

/// Creates the schema, wiping the table first when the stored version differs.
///
/// Runs in a single transaction, so a failure leaves the file untouched.
pub fn init_schema(conn: &mut Connection) -> Result<()> {
    let current = get_db_version(conn)?;

    let tx = conn.transaction()?;
    if current == SCHEMA_VERSION {
        // Recreate the table if someone dropped it behind our back.
        tx.execute(SCHEMA_SESSIONS, [])?;
        tx.commit()?;
        msg_debug!(format!("Database schema is up to date (version {})", current));
        return Ok(());
    }

    if current != 0 {
        drop_all(&tx)?;
        msg_warning!(Message::SchemaReset(current, SCHEMA_VERSION));
    }
    tx.execute(SCHEMA_SESSIONS, [])?;
    set_db_version(&tx, SCHEMA_VERSION)?;
    tx.commit()?;

    msg_debug!(Message::SchemaCreated(SCHEMA_VERSION));
    Ok(())
}

/// Reads the schema version stored in the database file.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let version: u32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(version)
}

/// Checks whether opening this database would wipe its contents.
pub fn needs_reset(conn: &Connection) -> Result<bool> {
    let current = get_db_version(conn)?;
    Ok(current != 0 && current != SCHEMA_VERSION)
}

fn drop_all(tx: &Transaction) -> Result<()> {
    tx.execute(DROP_SESSIONS, [])?;
    // AUTOINCREMENT keeps its counter in sqlite_sequence; forget it with the table.
    let has_sequence: bool = tx.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'sqlite_sequence')",
        [],
        |row| row.get(0),
    )?;
    if has_sequence {
        tx.execute("DELETE FROM sqlite_sequence WHERE name = ?1", [SESSIONS_TABLE])?;
    }
    Ok(())
}

fn set_db_version(tx: &Transaction, version: u32) -> Result<()> {
    // PRAGMA does not accept bound parameters.
    tx.execute_batch(&format!("PRAGMA user_version = {}", version))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_database_gets_current_version() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(!needs_reset(&conn).unwrap());

        init_schema(&mut conn).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn version_mismatch_wipes_rows() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_schema(&mut conn).unwrap();
        conn.execute(
            "INSERT INTO daily_sleep_quality_table (start_time_milli, end_time_milli) VALUES (1, 1)",
            [],
        )
        .unwrap();
        conn.execute_batch(&format!("PRAGMA user_version = {}", SCHEMA_VERSION + 1)).unwrap();
        assert!(needs_reset(&conn).unwrap());

        init_schema(&mut conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM daily_sleep_quality_table", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
        assert_eq!(get_db_version(&conn).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn matching_version_keeps_rows() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_schema(&mut conn).unwrap();
        conn.execute(
            "INSERT INTO daily_sleep_quality_table (start_time_milli, end_time_milli) VALUES (1, 1)",
            [],
        )
        .unwrap();

        init_schema(&mut conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM daily_sleep_quality_table", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}

//! Row-level access to the sleep session table.
//!
//! `Sessions` is the synchronous half of the store: plain rusqlite calls on a
//! single connection. It never spawns work or notifies anyone; the async
//! `SessionStore` wraps it, runs it on a blocking worker and publishes changes.
//!
//! ## Usage
//!
//! ```rust
//! use sleeptrack::db::{db::Db, sessions::Sessions};
//! use sleeptrack::libs::session::SleepSession;
//!
//! let sessions = Sessions::new(Db::open_in_memory()?);
//! let id = sessions.insert(&SleepSession::new(1_700_000_000_000))?;
//! assert_eq!(sessions.get_most_recent()?.and_then(|s| s.id), Some(id));
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::db::Db;
use crate::libs::session::SleepSession;
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

const INSERT_SESSION: &str = "INSERT INTO daily_sleep_quality_table (start_time_milli, end_time_milli, quality_rating) VALUES (?1, ?2, ?3)";
const INSERT_SESSION_WITH_ID: &str =
    "INSERT INTO daily_sleep_quality_table (night_id, start_time_milli, end_time_milli, quality_rating) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_SESSION: &str = "UPDATE daily_sleep_quality_table SET start_time_milli = ?1, end_time_milli = ?2, quality_rating = ?3 WHERE night_id = ?4";
const SELECT_BY_ID: &str = "SELECT night_id, start_time_milli, end_time_milli, quality_rating FROM daily_sleep_quality_table WHERE night_id = ?1";
const SELECT_MOST_RECENT: &str =
    "SELECT night_id, start_time_milli, end_time_milli, quality_rating FROM daily_sleep_quality_table ORDER BY night_id DESC LIMIT 1";
const SELECT_ALL: &str = "SELECT night_id, start_time_milli, end_time_milli, quality_rating FROM daily_sleep_quality_table ORDER BY night_id DESC";
const DELETE_ALL: &str = "DELETE FROM daily_sleep_quality_table";

pub struct Sessions {
    conn: Connection,
}

impl Sessions {
    pub fn new(db: Db) -> Self {
        Sessions { conn: db.conn }
    }

    /// Inserts a session and returns its id.
    ///
    /// A session without an id gets the next one; an explicit id is kept as is
    /// and fails with a constraint error if it is already taken.
    pub fn insert(&self, session: &SleepSession) -> Result<i64> {
        match session.id {
            Some(id) => self.conn.execute(
                INSERT_SESSION_WITH_ID,
                params![id, session.start_time_milli, session.end_time_milli, session.sleep_quality],
            )?,
            None => self.conn.execute(
                INSERT_SESSION,
                params![session.start_time_milli, session.end_time_milli, session.sleep_quality],
            )?,
        };
        Ok(self.conn.last_insert_rowid())
    }

    /// Overwrites the row with the session's id. Returns the number of rows changed.
    pub fn update(&self, id: i64, session: &SleepSession) -> Result<usize> {
        self.conn.execute(
            UPDATE_SESSION,
            params![session.start_time_milli, session.end_time_milli, session.sleep_quality, id],
        )
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<SleepSession>> {
        self.conn.query_row(SELECT_BY_ID, [id], Self::from_row).optional()
    }

    pub fn get_most_recent(&self) -> Result<Option<SleepSession>> {
        self.conn.query_row(SELECT_MOST_RECENT, [], Self::from_row).optional()
    }

    /// All sessions, newest (highest id) first.
    pub fn get_all(&self) -> Result<Vec<SleepSession>> {
        let mut stmt = self.conn.prepare_cached(SELECT_ALL)?;
        let sessions = stmt.query_map([], Self::from_row)?.collect::<Result<Vec<_>>>()?;
        Ok(sessions)
    }

    /// Deletes every row; the table itself stays. Returns the number of rows removed.
    pub fn clear(&self) -> Result<usize> {
        self.conn.execute(DELETE_ALL, [])
    }

    fn from_row(row: &Row) -> Result<SleepSession> {
        Ok(SleepSession {
            id: Some(row.get(0)?),
            start_time_milli: row.get(1)?,
            end_time_milli: row.get(2)?,
            sleep_quality: row.get(3)?,
        })
    }
}

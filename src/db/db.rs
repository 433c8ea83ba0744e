use crate::db::migrations::init_schema;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

/// An open SQLite connection with the sleep schema in place.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database named in the configuration, inside the data directory.
    pub fn new() -> Result<Db> {
        let config = Config::read()?;
        let db_file_path = DataStorage::new().get_path(&config.database_file())?;
        Self::open(db_file_path)
    }

    /// Opens (or creates) the database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let mut conn = Connection::open(path.as_ref())?;
        init_schema(&mut conn)?;
        msg_debug!(Message::DatabaseOpened(path.as_ref().display().to_string()));

        Ok(Db { conn })
    }

    /// Opens a private in-memory database, mostly useful for tests.
    pub fn open_in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_schema(&mut conn)?;

        Ok(Db { conn })
    }
}

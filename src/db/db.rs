use crate::libs::config::DbConfig;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::{Context, Result};
use rusqlite::Connection;

/// An open connection to the store.
///
/// The connection is closed when the value is dropped, so a `Db` scoped to a
/// single operation releases it on every exit path, including errors.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new(config: &DbConfig) -> Result<Db> {
        let db_file_path = config.db_path()?;
        let conn = Connection::open(&db_file_path)
            .with_context(|| format!("Failed to open database: {}", db_file_path.display()))?;
        // Bundled SQLite enforces foreign keys by default. Deleting an activity
        // must leave its sessions in place.
        conn.pragma_update(None, "foreign_keys", false)?;
        msg_debug!(Message::DatabaseOpened(db_file_path.display().to_string()));

        Ok(Db { conn })
    }
}

//! Schema of the store: the `activities` and `sessions` tables.
//!
//! The column set is fixed, so there is no versioning. Both statements are
//! create-if-not-exists and safe to run on every start.

use anyhow::Result;
use rusqlite::Connection;

pub const SCHEMA_ACTIVITIES: &str = "CREATE TABLE IF NOT EXISTS activities (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
)";

/// `end_time` is NULL while the session is running. The foreign key is
/// declared but `Db::new` turns enforcement off: deleting an activity leaves its sessions behind.
pub const SCHEMA_SESSIONS: &str = "CREATE TABLE IF NOT EXISTS sessions (
    id INTEGER PRIMARY KEY,
    activity_id INTEGER REFERENCES activities(id),
    start_time TIMESTAMP NOT NULL,
    end_time TIMESTAMP
)";

/// Ensures both tables exist.
pub fn ensure_tables(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute(SCHEMA_ACTIVITIES, [])?;
    tx.execute(SCHEMA_SESSIONS, [])?;
    tx.commit()?;
    Ok(())
}

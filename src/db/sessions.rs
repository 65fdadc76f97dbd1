use crate::db::db::Db;
use crate::libs::config::DbConfig;
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};

const SELECT_ACTIVITY_ID: &str = "SELECT id FROM activities WHERE name = ?1";
const INSERT_START: &str = "INSERT INTO sessions (activity_id, start_time) VALUES (?1, ?2)";
const UPDATE_END: &str = "UPDATE sessions SET end_time = ?1 WHERE activity_id = ?2 AND end_time IS NULL";
const SELECT_ALL: &str = "SELECT id, activity_id, start_time, end_time FROM sessions ORDER BY id";
const SELECT_HISTORY: &str = "
    SELECT a.name, s.start_time, s.end_time
    FROM sessions s
    JOIN activities a ON s.activity_id = a.id
";
const SELECT_REPORT: &str = "
    SELECT a.name,
           SUM(CAST(strftime('%s', s.end_time) AS INTEGER) - CAST(strftime('%s', s.start_time) AS INTEGER))
    FROM sessions s
    JOIN activities a ON s.activity_id = a.id
    WHERE s.end_time IS NOT NULL
    GROUP BY a.name
";

/// A raw row of the `sessions` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: i64,
    /// May point at an activity that no longer exists.
    pub activity_id: Option<i64>,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

/// A session joined with the name of its activity.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    pub activity: String,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

/// Total completed time of one activity.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub activity: String,
    pub total_seconds: i64,
}

pub struct Sessions {
    conn: Connection,
}

impl Sessions {
    pub fn new(config: &DbConfig) -> Result<Self> {
        let db = Db::new(config)?;
        Ok(Sessions { conn: db.conn })
    }

    pub fn activity_id(&mut self, name: &str) -> Result<Option<i64>> {
        self.conn
            .query_row(SELECT_ACTIVITY_ID, params![name], |row| row.get(0))
            .optional()
            .map_err(Into::into)
    }

    /// Opens a session for `activity_id` starting at `at`.
    ///
    /// Sessions already running for the activity are left as they are.
    pub fn start(&mut self, activity_id: i64, at: NaiveDateTime) -> Result<i64> {
        self.conn.execute(INSERT_START, params![activity_id, at])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Closes every open session of `activity_id` at `at`.
    ///
    /// Returns the number of closed sessions, which may be zero.
    pub fn stop(&mut self, activity_id: i64, at: NaiveDateTime) -> Result<usize> {
        Ok(self.conn.execute(UPDATE_END, params![at, activity_id])?)
    }

    /// All session rows, including those whose activity was deleted.
    pub fn list(&mut self) -> Result<Vec<Session>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let session_iter = stmt.query_map([], |row| {
            Ok(Session {
                id: row.get(0)?,
                activity_id: row.get(1)?,
                start: row.get(2)?,
                end: row.get(3)?,
            })
        })?;

        let mut sessions = Vec::new();
        for session in session_iter {
            sessions.push(session?);
        }
        Ok(sessions)
    }

    /// Every session with the name of its activity, in store order.
    ///
    /// Sessions of deleted activities drop out of the join.
    pub fn history(&mut self) -> Result<Vec<SessionRecord>> {
        let mut stmt = self.conn.prepare(SELECT_HISTORY)?;
        let record_iter = stmt.query_map([], |row| {
            Ok(SessionRecord {
                activity: row.get(0)?,
                start: row.get(1)?,
                end: row.get(2)?,
            })
        })?;

        let mut records = Vec::new();
        for record in record_iter {
            records.push(record?);
        }
        Ok(records)
    }

    /// Completed seconds per activity. Activities without a completed
    /// session are absent.
    pub fn report(&mut self) -> Result<Vec<ReportEntry>> {
        let mut stmt = self.conn.prepare(SELECT_REPORT)?;
        let entry_iter = stmt.query_map([], |row| {
            Ok(ReportEntry {
                activity: row.get(0)?,
                total_seconds: row.get(1)?,
            })
        })?;

        let mut entries = Vec::new();
        for entry in entry_iter {
            entries.push(entry?);
        }
        Ok(entries)
    }
}

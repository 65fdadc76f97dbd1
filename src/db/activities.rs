use crate::db::db::Db;
use crate::libs::config::DbConfig;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_ACTIVITY: &str = "INSERT INTO activities (name) VALUES (?1) ON CONFLICT (name) DO NOTHING";
const UPDATE_NAME: &str = "UPDATE activities SET name = ?1 WHERE name = ?2";
const DELETE_BY_NAME: &str = "DELETE FROM activities WHERE name = ?1";
const SELECT_BY_NAME: &str = "SELECT id, name FROM activities WHERE name = ?1";
const SELECT_ALL: &str = "SELECT id, name FROM activities ORDER BY id";

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i64,
    pub name: String,
}

pub struct Activities {
    conn: Connection,
}

impl Activities {
    pub fn new(config: &DbConfig) -> Result<Self> {
        let db = Db::new(config)?;
        Ok(Activities { conn: db.conn })
    }

    /// Inserts an activity. A name that already exists is left untouched.
    ///
    /// Returns the number of inserted rows (0 or 1).
    pub fn add(&mut self, name: &str) -> Result<usize> {
        Ok(self.conn.execute(INSERT_ACTIVITY, params![name])?)
    }

    /// Renames every activity called `old_name`. Returns the affected row count.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<usize> {
        Ok(self.conn.execute(UPDATE_NAME, params![new_name, old_name])?)
    }

    /// Deletes the activity called `name`. Its sessions are not touched.
    pub fn delete(&mut self, name: &str) -> Result<usize> {
        Ok(self.conn.execute(DELETE_BY_NAME, params![name])?)
    }

    pub fn get_by_name(&mut self, name: &str) -> Result<Option<Activity>> {
        self.conn
            .query_row(SELECT_BY_NAME, params![name], |row| {
                Ok(Activity {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    pub fn list(&mut self) -> Result<Vec<Activity>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let activity_iter = stmt.query_map([], |row| {
            Ok(Activity {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut activities = Vec::new();
        for activity in activity_iter {
            activities.push(activity?);
        }
        Ok(activities)
    }
}

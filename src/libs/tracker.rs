//! Name-level tracking operations.
//!
//! Each operation opens its own connection through one of the repositories in
//! [`crate::db`] and drops it before returning. Start and stop treat an unknown
//! activity name as a soft failure: the "Activity not found." message is
//! printed and `Ok(None)` is returned, so callers must check for the absent
//! timestamp before using it.

use crate::db::activities::Activities;
use crate::db::schema;
use crate::db::db::Db;
use crate::db::sessions::{ReportEntry, SessionRecord, Sessions};
use crate::libs::config::DbConfig;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_print};
use anyhow::Result;
use chrono::{Local, NaiveDateTime, SubsecRound};

/// Current local wall-clock time, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// Creates the `activities` and `sessions` tables when they are missing.
pub fn create_tables(config: &DbConfig) -> Result<()> {
    let mut db = Db::new(config)?;
    schema::ensure_tables(&mut db.conn)
}

pub fn add_activity(config: &DbConfig, name: &str) -> Result<()> {
    let inserted = Activities::new(config)?.add(name)?;
    msg_debug!(Message::ActivityInserted(name.to_string(), inserted));
    Ok(())
}

pub fn update_activity(config: &DbConfig, old_name: &str, new_name: &str) -> Result<()> {
    let renamed = Activities::new(config)?.rename(old_name, new_name)?;
    msg_debug!(Message::ActivityRenamed(old_name.to_string(), new_name.to_string(), renamed));
    Ok(())
}

pub fn delete_activity(config: &DbConfig, name: &str) -> Result<()> {
    let deleted = Activities::new(config)?.delete(name)?;
    msg_debug!(Message::ActivityRemoved(name.to_string(), deleted));
    Ok(())
}

/// Opens a session for `activity_name` at the current time.
pub fn start_session(config: &DbConfig, activity_name: &str) -> Result<Option<NaiveDateTime>> {
    start_session_at(config, activity_name, now())
}

pub fn start_session_at(config: &DbConfig, activity_name: &str, at: NaiveDateTime) -> Result<Option<NaiveDateTime>> {
    let mut sessions = Sessions::new(config)?;
    let Some(activity_id) = sessions.activity_id(activity_name)? else {
        msg_print!(Message::ActivityNotFound);
        return Ok(None);
    };

    let session_id = sessions.start(activity_id, at)?;
    msg_debug!(Message::SessionOpened(session_id, activity_id));
    Ok(Some(at))
}

/// Closes the open sessions of `activity_name` at the current time.
///
/// The end time is returned even when no session was open.
pub fn stop_session(config: &DbConfig, activity_name: &str) -> Result<Option<NaiveDateTime>> {
    stop_session_at(config, activity_name, now())
}

pub fn stop_session_at(config: &DbConfig, activity_name: &str, at: NaiveDateTime) -> Result<Option<NaiveDateTime>> {
    let mut sessions = Sessions::new(config)?;
    let Some(activity_id) = sessions.activity_id(activity_name)? else {
        msg_print!(Message::ActivityNotFound);
        return Ok(None);
    };

    let closed = sessions.stop(activity_id, at)?;
    msg_debug!(Message::SessionsClosed(activity_name.to_string(), closed));
    Ok(Some(at))
}

pub fn view_history(config: &DbConfig) -> Result<Vec<SessionRecord>> {
    let records = Sessions::new(config)?.history()?;
    msg_debug!(Message::HistoryLoaded(records.len()));
    Ok(records)
}

pub fn generate_report(config: &DbConfig) -> Result<Vec<ReportEntry>> {
    let entries = Sessions::new(config)?.report()?;
    msg_debug!(Message::ReportLoaded(entries.len()));
    Ok(entries)
}

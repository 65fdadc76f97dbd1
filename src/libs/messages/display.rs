//! Display implementation for timetrack application messages.
//!
//! All message wording is kept here so that the command handlers only decide
//! *which* message to show, never how it reads.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let s = match self {
            // === SCHEMA MESSAGES ===
            Message::TablesCreated => "Tables created successfully.".to_string(),
            Message::DatabaseOpened(path) => format!("Opened database at {}", path),

            // === ACTIVITY MESSAGES ===
            Message::ActivityAdded(name) => format!("Activity '{}' added.", name),
            Message::ActivityDeleted(name) => format!("Activity '{}' deleted.", name),
            Message::ActivityUpdated(old_name, new_name) => {
                format!("Activity '{}' updated to '{}'.", old_name, new_name)
            }
            Message::ActivityNotFound => "Activity not found.".to_string(),
            Message::ActivityInserted(name, count) => format!("add '{}': {} row(s) inserted", name, count),
            Message::ActivityRenamed(old_name, new_name, count) => {
                format!("update '{}' -> '{}': {} row(s) affected", old_name, new_name, count)
            }
            Message::ActivityRemoved(name, count) => format!("delete '{}': {} row(s) removed", name, count),

            // === SESSION MESSAGES ===
            Message::TrackingStarted(name, at) => format!("Started tracking '{}' at {}.", name, at),
            Message::TrackingStopped(name, at) => format!("Stopped tracking '{}' at {}.", name, at),
            Message::SessionOpened(session_id, activity_id) => {
                format!("Session {} opened for activity {}", session_id, activity_id)
            }
            Message::SessionsClosed(name, count) => format!("Closed {} open session(s) for '{}'", count, name),

            // === HISTORY AND REPORT MESSAGES ===
            Message::HistoryLine { activity, start, end } => {
                format!("Activity: {}, Start: {}, End: {}", activity, start, end)
            }
            Message::ReportLine { activity, total } => format!("Activity: {}, Total Time: {}", activity, total),
            Message::HistoryLoaded(count) => format!("Loaded {} session record(s)", count),
            Message::ReportLoaded(count) => format!("Aggregated {} activity total(s)", count),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigLoaded(path) => format!("Configuration loaded from {}", path),
            Message::ConfigFileNotFound(path) => format!("No configuration file at {}, using defaults", path),
            Message::ConfigTarget(target) => format!("Connection target: {}", target),
            Message::ConfigOptionIgnored(option) => {
                format!("Option '{}' is set but has no effect on the embedded store", option)
            }
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_messages() {
        assert_eq!(Message::ActivityAdded("reading".into()).to_string(), "Activity 'reading' added.");
        assert_eq!(
            Message::ActivityUpdated("reading".into(), "study".into()).to_string(),
            "Activity 'reading' updated to 'study'."
        );
        assert_eq!(Message::ActivityNotFound.to_string(), "Activity not found.");
    }

    #[test]
    fn test_row_count_messages() {
        assert_eq!(
            Message::ActivityInserted("reading".into(), 0).to_string(),
            "add 'reading': 0 row(s) inserted"
        );
        assert_eq!(
            Message::ActivityRenamed("reading".into(), "study".into(), 1).to_string(),
            "update 'reading' -> 'study': 1 row(s) affected"
        );
        assert_eq!(Message::SessionOpened(3, 1).to_string(), "Session 3 opened for activity 1");
    }

    #[test]
    fn test_session_messages() {
        assert_eq!(
            Message::TrackingStarted("reading".into(), "2026-10-19 09:00:00".into()).to_string(),
            "Started tracking 'reading' at 2026-10-19 09:00:00."
        );
        assert_eq!(
            Message::TrackingStopped("reading".into(), "2026-10-19 10:30:00".into()).to_string(),
            "Stopped tracking 'reading' at 2026-10-19 10:30:00."
        );
    }

    #[test]
    fn test_report_line() {
        let msg = Message::ReportLine {
            activity: "reading".into(),
            total: crate::libs::formatter::format_total(5400),
        };
        assert_eq!(msg.to_string(), "Activity: reading, Total Time: 1h 30m");
    }

    #[test]
    fn test_schema_message() {
        assert_eq!(Message::TablesCreated.to_string(), "Tables created successfully.");
    }

    #[test]
    fn test_history_line() {
        let msg = Message::HistoryLine {
            activity: "reading".into(),
            start: "2026-10-19 09:00:00".into(),
            end: "None".into(),
        };
        assert_eq!(msg.to_string(), "Activity: reading, Start: 2026-10-19 09:00:00, End: None");
    }
}

/// Every piece of user-facing text the application prints.
///
/// Variants carry the dynamic parts of a message; the wording itself lives in
/// the `Display` implementation in [`super::display`].
#[derive(Debug, Clone)]
pub enum Message {
    // === SCHEMA MESSAGES ===
    TablesCreated,
    DatabaseOpened(String), // path

    // === ACTIVITY MESSAGES ===
    ActivityAdded(String),
    ActivityDeleted(String),
    ActivityUpdated(String, String), // old name, new name
    ActivityNotFound,
    ActivityInserted(String, usize),        // name, inserted rows
    ActivityRenamed(String, String, usize), // old name, new name, affected rows
    ActivityRemoved(String, usize),         // name, removed rows

    // === SESSION MESSAGES ===
    TrackingStarted(String, String), // activity, timestamp
    TrackingStopped(String, String), // activity, timestamp
    SessionOpened(i64, i64),         // session id, activity id
    SessionsClosed(String, usize),   // activity, closed session count

    // === HISTORY AND REPORT MESSAGES ===
    HistoryLine {
        activity: String,
        start: String,
        end: String,
    },
    ReportLine {
        activity: String,
        total: String,
    },
    HistoryLoaded(usize),
    ReportLoaded(usize),

    // === CONFIGURATION MESSAGES ===
    ConfigLoaded(String),       // path
    ConfigFileNotFound(String), // path
    ConfigTarget(String),       // connection target description
    ConfigOptionIgnored(String), // option name
}

//! Database layer for the timetrack application.
//!
//! Built on SQLite through `rusqlite`. Each repository owns the connection it
//! was created with, and a connection lives no longer than the operation
//! that opened it.
//!
//! ```rust,no_run
//! use timetrack::db::{activities::Activities, sessions::Sessions};
//! use timetrack::libs::config::DbConfig;
//!
//! let config = DbConfig::default();
//! Activities::new(&config)?.add("reading")?;
//! let report = Sessions::new(&config)?.report()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection handle.
pub mod db;

/// Table definitions and the schema initializer.
pub mod schema;

/// Activity registration, renaming and removal.
pub mod activities;

/// Timed sessions, the history join and the per-activity report.
pub mod sessions;

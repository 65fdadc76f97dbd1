//! # timetrack
//!
//! A command-line utility for tracking time spent on named activities.
//!
//! ## Features
//!
//! - **Activities**: register, rename and delete named activities
//! - **Sessions**: start and stop timed sessions against an activity
//! - **History**: list every recorded session with its activity name
//! - **Reports**: total completed time per activity
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timetrack::commands::Cli;
//! use timetrack::libs::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::read()?;
//!     Cli::menu(&config)
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;

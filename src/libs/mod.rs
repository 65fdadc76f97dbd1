pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod tracker;

//! Configuration for the timetrack application.
//!
//! The only configurable concern is the connection target of the store. It is
//! resolved once at process start and handed to every operation:
//!
//! 1. built-in defaults (`localhost`, database `tracker`)
//! 2. `config.json` in the platform data directory, when present
//! 3. `TIMETRACK_*` environment variables (a `.env` file is loaded by `main`)
//!
//! ```rust,no_run
//! use timetrack::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.apply_env()?;
//! let db_path = config.db.db_path()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::path::PathBuf;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_DB_HOST: &str = "TIMETRACK_DB_HOST";
pub const ENV_DB_PORT: &str = "TIMETRACK_DB_PORT";
pub const ENV_DB_NAME: &str = "TIMETRACK_DB_NAME";
pub const ENV_DB_USER: &str = "TIMETRACK_DB_USER";
pub const ENV_DB_PASSWORD: &str = "TIMETRACK_DB_PASSWORD";
pub const ENV_DATA_DIR: &str = "TIMETRACK_DATA_DIR";

const LOCAL_HOSTS: &[&str] = &["", "localhost", "127.0.0.1", "::1"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("host '{0}' is not local; the embedded store can only be reached on this machine")]
    UnsupportedHost(String),
    #[error("invalid port '{0}'")]
    InvalidPort(String),
    #[error("failed to parse configuration file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Connection target of the store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DbConfig {
    pub host: String,
    pub port: Option<u16>,
    /// Database name; the store file is `<database>.db`.
    pub database: String,
    pub user: Option<String>,
    /// Accepted for completeness, the embedded store has no authentication.
    pub password: Option<String>,
    /// Directory holding the database file. Defaults to the platform data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: None,
            database: "tracker".to_string(),
            user: None,
            password: None,
            data_dir: None,
        }
    }
}

impl DbConfig {
    /// Local configuration whose database file lives in `data_dir`.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
            ..Self::default()
        }
    }

    pub fn storage(&self) -> DataStorage {
        match &self.data_dir {
            Some(dir) => DataStorage::at(dir),
            None => DataStorage::new(),
        }
    }

    /// Options that are set but have no effect on the embedded store.
    pub fn ignored_options(&self) -> Vec<&'static str> {
        let mut ignored = Vec::new();
        if self.port.is_some() {
            ignored.push("port");
        }
        if self.user.is_some() {
            ignored.push("user");
        }
        if self.password.is_some() {
            ignored.push("password");
        }
        ignored
    }

    /// Emits a debug line for every option listed by [`Self::ignored_options`].
    pub fn log_ignored_options(&self) {
        for option in self.ignored_options() {
            msg_debug!(Message::ConfigOptionIgnored(option.to_string()));
        }
    }

    /// Resolves the database file path, rejecting targets on other hosts.
    pub fn db_path(&self) -> Result<PathBuf> {
        if !LOCAL_HOSTS.contains(&self.host.as_str()) {
            return Err(ConfigError::UnsupportedHost(self.host.clone()).into());
        }
        self.storage().get_path(&format!("{}.db", self.database))
    }
}

// Password stays out of every rendering of the target.
impl fmt::Display for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(user) = &self.user {
            write!(f, "{}@", user)?;
        }
        write!(f, "{}", self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        write!(f, "/{}", self.database)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub db: DbConfig,
}

impl Config {
    /// Reads `config.json` from the platform data directory, falling back to
    /// defaults when the file does not exist.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let display_path = config_file_path.display().to_string();

        if !config_file_path.exists() {
            msg_debug!(Message::ConfigFileNotFound(display_path));
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|source| ConfigError::Parse {
            path: display_path.clone(),
            source,
        })?;
        msg_debug!(Message::ConfigLoaded(display_path));
        Ok(config)
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Applies `TIMETRACK_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides obtained through `lookup`, keyed by the `ENV_*` names.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_DB_HOST) {
            self.db.host = host;
        }
        if let Some(port) = lookup(ENV_DB_PORT) {
            let parsed = port.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(port.clone()))?;
            self.db.port = Some(parsed);
        }
        if let Some(database) = lookup(ENV_DB_NAME) {
            self.db.database = database;
        }
        if let Some(user) = lookup(ENV_DB_USER) {
            self.db.user = Some(user);
        }
        if let Some(password) = lookup(ENV_DB_PASSWORD) {
            self.db.password = Some(password);
        }
        if let Some(data_dir) = lookup(ENV_DATA_DIR) {
            self.db.data_dir = Some(PathBuf::from(data_dir));
        }
        Ok(())
    }
}

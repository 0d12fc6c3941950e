//! Configuration management for ltodo.
//!
//! Settings are stored as JSON in `config.json` inside the platform data
//! directory (see [`DataStorage`]). Every field is optional; anything left
//! out falls back to a built-in default when the configuration is resolved
//! into an [`AppConfig`] at startup.
//!
//! Resolution happens exactly once, in the command layer. The resulting
//! [`AppConfig`] is then passed by value into the server and the store, so
//! nothing below the command layer looks at the environment.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ltodo::libs::config::{Config, Overrides};
//! use ltodo::libs::data_storage::{DataStorage, RunMode};
//!
//! let config = Config::read()?;
//! let app = config.resolve(RunMode::detect(), &DataStorage::new(), Overrides::default())?;
//! println!("Serving on {}", app.address());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::{DataStorage, RunMode};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Database file name, both in development and installed mode.
pub const DB_FILE_NAME: &str = "todo.db";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;

/// Address the API server listens on and the client connects to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Persisted user configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    /// Explicit database file, overriding the run-mode default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

/// Values given on the command line (or through their environment fallbacks).
/// They win over anything in `config.json`.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub run_mode: RunMode,
}

impl AppConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base URL of the REST API, e.g. `http://127.0.0.1:3001/api`.
    pub fn api_url(&self) -> String {
        format!("http://{}/api", self.address())
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    /// Reads the configuration from `storage`, returning defaults when no file exists.
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the final configuration.
    ///
    /// Database path precedence: override, then `database` from the file,
    /// then `./todo.db` in development mode or `<data dir>/todo.db` when installed.
    pub fn resolve(&self, run_mode: RunMode, storage: &DataStorage, overrides: Overrides) -> Result<AppConfig> {
        let server = self.server.clone().unwrap_or_default();

        let db_path = match overrides.database.or_else(|| self.database.clone()) {
            Some(path) => path,
            None => match run_mode {
                RunMode::Development => PathBuf::from(DB_FILE_NAME),
                RunMode::Installed => storage.get_path(DB_FILE_NAME)?,
            },
        };

        Ok(AppConfig {
            host: overrides.host.unwrap_or(server.host),
            port: overrides.port.unwrap_or(server.port),
            db_path,
            run_mode,
        })
    }

    /// Interactive setup wizard used by `ltodo init`.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.server.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleServer);
        config.server = Some(ServerConfig {
            host: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerHost.to_string())
                .default(default.host)
                .interact_text()?,
            port: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerPort.to_string())
                .default(default.port)
                .interact_text()?,
        });

        let database: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(config.database.as_ref().map(|p| p.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        config.database = if database.trim().is_empty() { None } else { Some(PathBuf::from(database.trim())) };

        Ok(config)
    }
}

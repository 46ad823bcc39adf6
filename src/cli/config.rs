//! Configuration file support and store path resolution.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable that switches to a database in the current directory.
pub const DEV_ENV_VAR: &str = "STICKY_ENV";

/// Value of [`DEV_ENV_VAR`] that enables dev mode.
pub const DEV_ENV_VALUE: &str = "dev";

/// Database file name used by every default location.
pub const DB_FILE_NAME: &str = "sticky.db";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Database file location
    pub db: Option<PathBuf>,
}

/// Process environment captured once at startup.
///
/// Passed explicitly into path resolution so nothing reads the
/// environment after `run()` begins dispatching.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub dev_mode: bool,
    pub home: Option<PathBuf>,
}

impl Environment {
    /// Reads `STICKY_ENV` and the user's home directory.
    pub fn capture() -> Self {
        Self {
            dev_mode: std::env::var(DEV_ENV_VAR).is_ok_and(|v| v == DEV_ENV_VALUE),
            home: dirs::home_dir(),
        }
    }
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/sticky/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sticky")
            .join("config.toml")
    }

    /// Resolve the database path.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. `STICKY_ENV=dev`: `./sticky.db`
    /// 3. Config file `db` setting
    /// 4. `$HOME/.local/share/sticky/sticky.db`
    pub fn db_path(&self, cli_db: Option<&Path>, env: &Environment) -> Result<PathBuf> {
        if let Some(path) = cli_db {
            return Ok(path.to_path_buf());
        }
        if env.dev_mode {
            return Ok(PathBuf::from(".").join(DB_FILE_NAME));
        }
        if let Some(path) = &self.db {
            return Ok(path.clone());
        }

        let Some(home) = &env.home else {
            bail!("could not determine home directory");
        };
        Ok(home
            .join(".local")
            .join("share")
            .join("sticky")
            .join(DB_FILE_NAME))
    }
}

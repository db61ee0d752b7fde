//! Application configuration.
//!
//! Settings come from three layers: built-in defaults, an optional JSON file and
//! command-line flags, in increasing priority. The file is only ever read.

use crate::consts::cli_consts::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fs, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid config file {path}: request_timeout_secs must be at least 1")]
    ZeroTimeout { path: PathBuf },

    #[error("Invalid environment: {0}")]
    Environment(String),

    #[error("Could not determine the home directory")]
    NoHomeDir,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// `direct`, `relay` or an http(s) base URL.
    pub environment: Option<String>,
    /// Connect and request timeout for catalog calls.
    pub request_timeout_secs: u64,
    pub with_background_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            with_background_color: false,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// Missing keys fall back to their defaults. A zero timeout is rejected.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_slice(&buf).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout {
                path: path.to_path_buf(),
            });
        }
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolves the environment: explicit flag, then config file, then `ARTIC_ENVIRONMENT`.
    pub fn resolve_environment(
        &self,
        flag: Option<&str>,
        env_var: Option<&str>,
    ) -> Result<Environment, ConfigError> {
        flag.or(self.environment.as_deref())
            .or(env_var)
            .unwrap_or_default()
            .parse::<Environment>()
            .map_err(ConfigError::Environment)
    }
}

/// Default config location: `~/.artic/config.json`.
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let home = home::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".artic").join("config.json"))
}

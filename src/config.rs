//! User configuration management
//!
//! Credentials live in `~/.wunderlistcmd`, a TOML file with a single
//! `[general]` section holding `access_token` and `client_id`.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE_NAME: &str = ".wunderlistcmd";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("can't read config file {0}")]
    NotFound(PathBuf),

    #[error("can't parse config file {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("can't find {0} at 'general' section")]
    MissingKey(&'static str),

    #[error("home directory could not be determined")]
    NoHome,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Credentials sent with every API request.
#[derive(Debug, Clone)]
pub struct Config {
    pub access_token: String,
    pub client_id: String,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    general: GeneralSection,
}

#[derive(Debug, Default, Deserialize)]
struct GeneralSection {
    access_token: Option<String>,
    client_id: Option<String>,
}

fn config_path() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoHome)
}

impl Config {
    /// Loads credentials from the per-user config file.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&config_path()?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;

        let access_token = file
            .general
            .access_token
            .ok_or(ConfigError::MissingKey("access_token"))?;
        let client_id = file
            .general
            .client_id
            .ok_or(ConfigError::MissingKey("client_id"))?;

        Ok(Self {
            access_token,
            client_id,
        })
    }
}

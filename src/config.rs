//! Application settings
//!
//! The platform endpoint and bearer token come from a TOML settings file
//! in the user's config directory, with environment variables taking
//! precedence. A `.env` file in the working directory is honored because
//! `main` loads it before settings are read.
//!
//! ```toml
//! # ~/.config/apptree_fetcher/config.toml
//! api_url = "https://api.example.com"
//! api_token = "bearer-token"
//! ```

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{config as config_constants, env as env_constants};
use crate::errors::ConfigError;

/// Platform access settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the platform API
    #[serde(default)]
    pub api_url: String,

    /// Bearer token sent with every files-API request; optional because
    /// some platforms sit behind network-level auth instead
    #[serde(default)]
    pub api_token: Option<String>,
}

impl Settings {
    /// Load settings from the config file and the environment
    ///
    /// Environment variables override file values. A missing file is fine;
    /// a missing API URL after both sources is not.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or
    /// parsed, or if no API URL is configured anywhere.
    pub fn load() -> Result<Self, ConfigError> {
        let file_contents = match Self::config_file_path() {
            Some(path) if path.exists() => Some(std::fs::read_to_string(&path).map_err(|_| {
                ConfigError::NotReadable {
                    path: path.display().to_string(),
                }
            })?),
            _ => None,
        };
        Self::from_sources(
            file_contents.as_deref(),
            env::var(env_constants::API_URL).ok(),
            env::var(env_constants::API_TOKEN).ok(),
        )
    }

    /// Build settings from explicit sources (separated for testability)
    pub fn from_sources(
        file_contents: Option<&str>,
        env_url: Option<String>,
        env_token: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut settings = match file_contents {
            Some(contents) => toml::from_str::<Settings>(contents)?,
            None => Settings::default(),
        };

        if let Some(url) = env_url {
            settings.api_url = url;
        }
        if let Some(token) = env_token {
            settings.api_token = Some(token);
        }

        if settings.api_url.is_empty() {
            return Err(ConfigError::MissingApiUrl {
                var: env_constants::API_URL,
            });
        }

        Ok(settings)
    }

    /// Location of the settings file, when a config directory exists
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(config_constants::CONFIG_DIR_NAME)
                .join(config_constants::CONFIG_FILE_NAME)
        })
    }
}

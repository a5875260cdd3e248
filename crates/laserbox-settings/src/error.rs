//! Errors from reading, writing and checking configuration files

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    /// A value parsed fine but is not usable
    #[error("Setting '{key}' {reason}")]
    InvalidSetting { key: String, reason: String },

    /// Neither a config nor a home directory is known
    #[error("No configuration directory: {0}")]
    ConfigDirectory(String),

    #[error("Cannot access configuration file: {0}")]
    IoError(#[from] io::Error),

    #[error("Malformed JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Malformed TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Cannot write TOML configuration: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SettingsError {
    pub(crate) fn invalid(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Only `.json` and `.toml` files are understood
    #[error("Unknown configuration file extension '{0}'")]
    UnsupportedFormat(String),

    #[error("'{value}' is out of range for '{key}'")]
    ValueOutOfRange { key: String, value: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;

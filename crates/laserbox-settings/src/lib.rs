//! Laserbox Settings Crate
//!
//! Handles the configuration file: generator defaults for the command line
//! tool and the web server settings.

pub mod config;
pub mod error;

pub use config::{Config, ConfigFormat, DefaultsSettings, ServerSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};

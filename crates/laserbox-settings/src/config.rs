//! Configuration for laserbox
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats; the file extension decides which one is used.
//!
//! Configuration is organized into two sections:
//! - Generator defaults (material, tooth length, lid, output file)
//! - Web server settings (bind address, index page, error status policy)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name under the platform config directory
pub const APP_DIR: &str = "laserbox";

/// File name of the default configuration
pub const CONFIG_FILE: &str = "config.toml";

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }
}

/// Values used when a generator parameter is not given explicitly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsSettings {
    /// Sheet thickness in mm
    pub material: f64,
    /// Tooth length in mm
    pub teeth: f64,
    /// Lay out a lid as well
    pub lid: bool,
    /// Output file of the command line tool
    pub output: PathBuf,
}

impl Default for DefaultsSettings {
    fn default() -> Self {
        Self {
            material: 3.0,
            teeth: 10.0,
            lid: false,
            output: PathBuf::from("laserbox.svg"),
        }
    }
}

/// Web server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Listen address (`host:port`)
    pub bind: String,
    /// Page served for every path outside `/svg/`
    pub index_file: PathBuf,
    /// Answer bad requests with 400 instead of 200
    pub strict_status: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:1234".to_string(),
            index_file: PathBuf::from("website.html"),
            strict_status: false,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: DefaultsSettings,
    pub server: ServerSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Location of the per-user configuration file
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config or home directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the given file, or the per-user file when `path` is `None`.
    ///
    /// A missing per-user file yields the built-in defaults; an explicitly
    /// named file must exist.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                debug!("Using built-in configuration: {}", e);
                return Ok(Self::default());
            }
        };

        if path.exists() {
            Self::load_from_file(&path)
        } else {
            debug!(
                "No configuration at {}, using built-in defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!("Saved configuration to {}", path.display());

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let defaults = &self.defaults;

        if !defaults.material.is_finite() || defaults.material <= 0.0 {
            return Err(SettingsError::invalid(
                "defaults.material",
                "must be greater than zero",
            ));
        }

        if !defaults.teeth.is_finite() || defaults.teeth <= 0.0 {
            return Err(SettingsError::invalid(
                "defaults.teeth",
                "must be greater than zero",
            ));
        }

        if defaults.teeth < defaults.material {
            return Err(SettingsError::invalid(
                "defaults.teeth",
                "must not be shorter than the material thickness",
            ));
        }

        if defaults.output.as_os_str().is_empty() {
            return Err(SettingsError::invalid("defaults.output", "must not be empty"));
        }

        // Validate server settings
        let port = self
            .server
            .bind
            .rsplit_once(':')
            .filter(|(host, _)| !host.is_empty())
            .map(|(_, port)| port);
        match port {
            Some(port) if port.parse::<u16>().is_ok() => {}
            Some(_) => {
                return Err(ConfigError::ValueOutOfRange {
                    key: "server.bind".to_string(),
                    value: self.server.bind.clone(),
                }
                .into())
            }
            None => {
                return Err(SettingsError::invalid(
                    "server.bind",
                    "expected host:port",
                ))
            }
        }

        if self.server.index_file.as_os_str().is_empty() {
            return Err(SettingsError::invalid(
                "server.index_file",
                "must not be empty",
            ));
        }

        Ok(())
    }
}

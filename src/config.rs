/// Site configuration
///
/// Loaded from `config.toml` in the user's config directory:
/// - Linux: ~/.config/tractolujos/config.toml
/// - macOS: ~/Library/Application Support/tractolujos/config.toml
/// - Windows: %APPDATA%\tractolujos\config.toml
///
/// Every field has a default, so a missing file (or a partial one) is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// WhatsApp number in international format, digits only
    pub whatsapp_number: String,
    /// Phone numbers as displayed
    pub phones: Vec<String>,
    pub email: String,
    pub locations: Vec<Location>,
    pub geolocation: GeolocationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub region: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeolocationConfig {
    pub endpoint: String,
    /// Countries whose visitors get English by default
    pub english_countries: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "573125194078".to_string(),
            phones: vec!["+57 312-519-4078".to_string(), "+57 314-389-6293".to_string()],
            email: "tractotamayo@gmail.com".to_string(),
            locations: vec![
                Location {
                    region: "Boyacá".to_string(),
                    lines: vec![
                        "Ciudadela Industrial Manzana D, Bodega 6".to_string(),
                        "Carrera 42 #14-66, Duitama".to_string(),
                    ],
                },
                Location {
                    region: "Casanare".to_string(),
                    lines: vec!["Carrera 5 #36-50, Yopal".to_string()],
                },
            ],
            geolocation: GeolocationConfig::default(),
        }
    }
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://ipapi.co/json/".to_string(),
            english_countries: vec!["US".to_string(), "GB".to_string()],
            timeout_secs: 5,
        }
    }
}

impl GeolocationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl SiteConfig {
    /// `<config_dir>/tractolujos/config.toml`, if a config dir exists
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("tractolujos");
            path.push("config.toml");
            path
        })
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, path)
    }

    fn parse(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

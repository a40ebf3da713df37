//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde. The file
//! deliberately has no place for the SSID or key.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Hosted network section
    #[serde(default)]
    pub hosted: HostedSection,

    /// Uplink candidate section
    #[serde(default)]
    pub uplink: UplinkSection,
}

/// Hosted network section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostedSection {
    /// Service name of the virtual miniport adapter (default: vwifimp)
    pub miniport_service: Option<String>,
}

/// Uplink candidate filter section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UplinkSection {
    /// Regex patterns; when non-empty, only matching names are offered
    #[serde(default)]
    pub include: Vec<String>,

    /// Regex patterns for names never offered
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

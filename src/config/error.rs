//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::hosted::CredentialError;

/// Error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Invalid regex pattern for candidate filtering.
    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidRegex {
        /// The invalid pattern
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// The SSID given on the command line is not acceptable.
    #[error("Invalid --ssid: {0}")]
    InvalidSsid(#[source] CredentialError),

    /// `hosted.miniport_service` was set to an empty string.
    #[error("hosted.miniport_service must not be empty")]
    EmptyServiceName,
}

//! Validated configuration after merging CLI and TOML sources.
//!
//! All validation is performed during construction, before any OS service
//! is touched.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::hosted::validate_ssid;
use crate::network::filter::{FilterChain, NameRegexFilter};

use super::cli::{Action, Cli};
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and an optional
/// TOML config, or [`ValidatedConfig::load`] to also resolve the file.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Action to perform
    pub action: Action,

    /// Pre-supplied SSID (already length-checked)
    pub ssid: Option<String>,

    /// Pre-supplied uplink selection, validated against the live candidate
    /// list later
    pub uplink: Option<String>,

    /// Service name of the virtual miniport adapter
    pub miniport_service: String,

    /// Narrows the candidate list shown to the operator
    pub candidate_filter: FilterChain,

    /// Configuration file that was loaded, if any
    pub config_file: Option<PathBuf>,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config_file = self
            .config_file
            .as_ref()
            .map_or_else(|| "none".to_string(), |p| p.display().to_string());

        write!(
            f,
            "Config {{ action: {}, ssid: {}, uplink: {}, miniport_service: {}, \
             filters: +{}/-{}, file: {} }}",
            self.action,
            self.ssid.as_deref().unwrap_or("<prompt>"),
            self.uplink.as_deref().unwrap_or("<prompt>"),
            self.miniport_service,
            self.candidate_filter.include_count(),
            self.candidate_filter.exclude_count(),
            config_file,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `--ssid` violates the SSID rules
    /// - `hosted.miniport_service` is empty
    /// - A candidate regex pattern is invalid
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        if let Some(ref ssid) = cli.ssid {
            validate_ssid(ssid).map_err(ConfigError::InvalidSsid)?;
        }

        let miniport_service = Self::resolve_miniport_service(toml)?;
        let candidate_filter = Self::build_filter(toml)?;

        Ok(Self {
            action: cli.action(),
            ssid: cli.ssid.clone(),
            uplink: cli.uplink.clone(),
            miniport_service,
            candidate_filter,
            config_file: None,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and the config file.
    ///
    /// `--config` must point at a readable file. Without it the default
    /// path is used, and only if the file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_with_default(cli, defaults::config_path().as_deref())
    }

    /// [`load`](Self::load) with an explicit default path.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_default(cli: &Cli, default_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match cli.config {
            Some(ref path) => Some(path.clone()),
            None => default_path.filter(|p| p.is_file()).map(Path::to_path_buf),
        };

        let toml = path.as_deref().map(TomlConfig::load).transpose()?;

        let mut config = Self::from_raw(cli, toml.as_ref())?;
        config.config_file = path;
        Ok(config)
    }

    fn resolve_miniport_service(toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        let service = toml
            .and_then(|t| t.hosted.miniport_service.as_deref())
            .unwrap_or(defaults::MINIPORT_SERVICE)
            .trim();

        if service.is_empty() {
            return Err(ConfigError::EmptyServiceName);
        }
        Ok(service.to_string())
    }

    fn build_filter(toml: Option<&TomlConfig>) -> Result<FilterChain, ConfigError> {
        let mut chain = FilterChain::new();
        let Some(toml) = toml else {
            return Ok(chain);
        };

        for pattern in &toml.uplink.include {
            chain = chain.include(compile(pattern)?);
        }
        for pattern in &toml.uplink.exclude {
            chain = chain.exclude(compile(pattern)?);
        }

        Ok(chain)
    }
}

fn compile(pattern: &str) -> Result<NameRegexFilter, ConfigError> {
    NameRegexFilter::new(pattern).map_err(|e| ConfigError::InvalidRegex {
        pattern: pattern.to_string(),
        source: e,
    })
}

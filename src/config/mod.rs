//! Configuration layer for hotshare.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Action`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file** (`--config`, else the default path if it exists)
//! 3. **Built-in defaults**
//!
//! The SSID may come from `--ssid`; the key never comes from any source but
//! the interactive prompt.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Action, Cli};
pub use error::ConfigError;
pub use toml::TomlConfig;
pub use validated::ValidatedConfig;

//! CLI argument parsing using clap.
//!
//! Defines the command-line interface: one positional action plus options.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// hotshare: Windows hosted network with Internet Connection Sharing
///
/// Starts a software access point on the wireless adapter and shares an
/// operator-chosen uplink connection with it.
#[derive(Debug, Parser)]
#[command(name = "hotshare")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Action to perform (default: start)
    #[arg(value_enum)]
    pub action: Option<Action>,

    /// Hotspot SSID; skips the SSID prompt. The key is always prompted.
    #[arg(long)]
    pub ssid: Option<String>,

    /// Index of the uplink in the candidate list; skips the selection prompt
    /// when valid
    #[arg(long, value_name = "INDEX")]
    pub uplink: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Top-level action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Action {
    /// Configure and start the hotspot, then share the chosen uplink
    #[default]
    Start,
    /// Disable all sharing and stop the hotspot
    Stop,
    /// Display the hosted network status
    Show,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Show => "show",
        };
        f.write_str(name)
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns the requested action, defaulting to [`Action::Start`].
    #[must_use]
    pub fn action(&self) -> Action {
        self.action.unwrap_or_default()
    }
}

//! Hosted network state and parsers for `netsh wlan show` output.

use std::fmt;

/// Hosted network feature state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostedNetworkState {
    /// The driver cannot host a network. Terminal for a `start` run.
    Unsupported,
    /// `mode=disallow`.
    Disallowed,
    /// `mode=allow`, not running.
    AllowedStopped,
    /// `mode=allow`, running.
    AllowedStarted,
}

impl fmt::Display for HostedNetworkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => write!(f, "unsupported"),
            Self::Disallowed => write!(f, "disallowed"),
            Self::AllowedStopped => write!(f, "allowed, stopped"),
            Self::AllowedStarted => write!(f, "allowed, started"),
        }
    }
}

/// Wireless driver capabilities relevant to hosting a network.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DriverCapabilities {
    /// Whether any wireless interface reports hosted network support.
    /// `None` if no interface answered in a recognized language.
    pub hosted_network_supported: Option<bool>,
    /// Driver description of the first interface, if reported.
    pub driver: Option<String>,
}

/// Parsed hosted network status, with the raw text kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostedNetworkStatus {
    /// State derived from the mode and status lines; `None` if unrecognized.
    pub state: Option<HostedNetworkState>,
    /// Configured SSID.
    pub ssid: Option<String>,
    /// Number of connected clients while running.
    pub clients: Option<u32>,
    /// Unmodified service output.
    pub raw: String,
}

// netsh translates both keys and values. Labels are listed for English,
// German, and French installations.

const SUPPORTED_KEYS: &[&str] = &[
    "Hosted network supported",
    "Unterstützte gehostete Netzwerke",
    "Réseau hébergé pris en charge",
];
const DRIVER_KEYS: &[&str] = &["Driver", "Treiber", "Pilote"];
const YES: &[&str] = &["Yes", "Ja", "Oui"];
const NO: &[&str] = &["No", "Nein", "Non"];

const MODE_KEYS: &[&str] = &["Mode", "Modus"];
const STATUS_KEYS: &[&str] = &["Status", "Statut"];
const SSID_KEYS: &[&str] = &["SSID name", "SSID-Name", "Nom du SSID"];
const CLIENT_COUNT_KEYS: &[&str] = &["Number of clients", "Anzahl von Clients", "Nombre de clients"];
const ALLOWED: &[&str] = &["Allowed", "Zulässig", "Autorisé"];
const STARTED: &[&str] = &["Started", "Gestartet", "Démarré"];
const NOT_AVAILABLE: &[&str] = &["Not available", "Nicht verfügbar", "Non disponible"];

fn is_one_of(text: &str, labels: &[&str]) -> bool {
    labels.iter().any(|label| label.eq_ignore_ascii_case(text))
}

/// Splits `"    Key    : Value"` into trimmed `(key, value)`.
///
/// Only the first colon separates, so values such as BSSIDs survive intact.
fn split_kv(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

/// Parses `netsh wlan show drivers`.
///
/// Multiple interfaces each print a block; support on any of them counts.
/// Output without a recognized support line leaves the answer unknown.
#[must_use]
pub fn parse_driver_capabilities(output: &str) -> DriverCapabilities {
    let mut caps = DriverCapabilities::default();

    for (key, value) in output.lines().filter_map(split_kv) {
        if is_one_of(key, SUPPORTED_KEYS) {
            let answer = if is_one_of(value, YES) {
                Some(true)
            } else if is_one_of(value, NO) {
                Some(false)
            } else {
                None
            };
            if let Some(answer) = answer {
                caps.hosted_network_supported =
                    Some(answer || caps.hosted_network_supported.unwrap_or(false));
            }
        } else if is_one_of(key, DRIVER_KEYS) && caps.driver.is_none() {
            caps.driver = Some(value.to_string());
        }
    }

    caps
}

/// Parses `netsh wlan show hostednetwork`.
///
/// An allowed network whose status is "not available" has no capable radio
/// behind it and reads as [`HostedNetworkState::Unsupported`].
#[must_use]
pub fn parse_hosted_network_status(output: &str) -> HostedNetworkStatus {
    let mut allowed = None;
    let mut started = false;
    let mut unavailable = false;
    let mut ssid = None;
    let mut clients = None;

    for (key, value) in output.lines().filter_map(split_kv) {
        if is_one_of(key, MODE_KEYS) {
            allowed = Some(is_one_of(value, ALLOWED));
        } else if is_one_of(key, STATUS_KEYS) {
            started = is_one_of(value, STARTED);
            unavailable = is_one_of(value, NOT_AVAILABLE);
        } else if is_one_of(key, SSID_KEYS) {
            ssid = Some(value.trim_matches('"').to_string());
        } else if is_one_of(key, CLIENT_COUNT_KEYS) {
            clients = value.parse().ok();
        }
    }

    let state = match allowed {
        Some(false) => Some(HostedNetworkState::Disallowed),
        Some(true) if unavailable => Some(HostedNetworkState::Unsupported),
        Some(true) if started => Some(HostedNetworkState::AllowedStarted),
        Some(true) => Some(HostedNetworkState::AllowedStopped),
        None => None,
    };

    HostedNetworkStatus {
        state,
        ssid,
        clients,
        raw: output.to_string(),
    }
}

//! Hosted network layer.
//!
//! This module provides types and functions for:
//! - Validated hotspot credentials ([`HotspotConfig`])
//! - The OS wireless service seam ([`WlanService`])
//! - The `netsh`-backed implementation ([`NetshWlan`])
//! - Capability check, configure, start, and stop ([`HostedNetworkController`])
//! - Status parsing ([`HostedNetworkStatus`], [`HostedNetworkState`])

mod controller;
mod credentials;
mod error;
mod netsh;
mod status;

pub use controller::HostedNetworkController;
pub use credentials::{
    CredentialError, HotspotConfig, KEY_MAX_LEN, KEY_MIN_LEN, SSID_MAX_LEN, SSID_MIN_LEN,
    validate_ssid,
};
pub use error::{HostedNetworkError, WlanError};
pub use netsh::NetshWlan;
pub use status::{
    DriverCapabilities, HostedNetworkState, HostedNetworkStatus, parse_driver_capabilities,
    parse_hosted_network_status,
};

/// How long the OS keeps the configured key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyUsage {
    /// Survives reboots.
    Persistent,
    /// Discarded when the hosted network stops.
    Temporary,
}

/// Requested hosted network mode.
#[derive(Debug, Clone, Copy)]
pub enum ModeRequest<'a> {
    /// Allow hosting with the given credentials.
    Allow {
        config: &'a HotspotConfig,
        key_usage: KeyUsage,
    },
    /// Disallow hosting.
    Disallow,
}

/// Trait for the OS wireless configuration service.
///
/// # Design
///
/// - Production code uses [`NetshWlan`]
/// - Tests substitute recording implementations
/// - All calls block until the service answers; no timeout is imposed
pub trait WlanService {
    /// Queries the wireless driver capabilities.
    ///
    /// # Errors
    ///
    /// Returns [`WlanError`] if the query fails.
    fn show_driver_capabilities(&self) -> Result<DriverCapabilities, WlanError>;

    /// Sets the hosted network mode (and credentials when allowing).
    ///
    /// # Errors
    ///
    /// Returns [`WlanError`] if the service refuses.
    fn set_hosted_network_mode(&self, request: ModeRequest<'_>) -> Result<(), WlanError>;

    /// Starts the hosted network.
    ///
    /// # Errors
    ///
    /// Returns [`WlanError`] if the driver refuses to start.
    fn start_hosted_network(&self) -> Result<(), WlanError>;

    /// Stops the hosted network. Succeeds when it is not running.
    ///
    /// # Errors
    ///
    /// Returns [`WlanError`] if the service refuses.
    fn stop_hosted_network(&self) -> Result<(), WlanError>;

    /// Queries the hosted network status.
    ///
    /// # Errors
    ///
    /// Returns [`WlanError`] if the query fails.
    fn show_hosted_network_status(&self) -> Result<HostedNetworkStatus, WlanError>;
}

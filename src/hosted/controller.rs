//! Hosted network lifecycle on top of a [`WlanService`].

use super::{
    HostedNetworkError, HostedNetworkStatus, HotspotConfig, KeyUsage, ModeRequest, WlanService,
};

/// Capability check, configure, start, and stop of the hosted network.
///
/// Holds no state of its own; every call goes straight to the service.
pub struct HostedNetworkController<'a> {
    wlan: &'a dyn WlanService,
}

impl<'a> HostedNetworkController<'a> {
    /// Creates a controller over the given service.
    #[must_use]
    pub const fn new(wlan: &'a dyn WlanService) -> Self {
        Self { wlan }
    }

    /// Returns true if the wireless driver can host a network.
    ///
    /// A driver report that cannot be read counts as supported, leaving the
    /// final word to `start`.
    ///
    /// # Errors
    ///
    /// Returns [`HostedNetworkError::Capabilities`] if the query fails.
    pub fn check_support(&self) -> Result<bool, HostedNetworkError> {
        let caps = self
            .wlan
            .show_driver_capabilities()
            .map_err(HostedNetworkError::Capabilities)?;

        let driver = caps.driver.as_deref().unwrap_or("unknown");
        match caps.hosted_network_supported {
            Some(supported) => {
                tracing::debug!(supported, driver, "Driver capabilities");
                Ok(supported)
            }
            None => {
                tracing::warn!(
                    driver,
                    "Driver did not report hosted network support, trying anyway"
                );
                Ok(true)
            }
        }
    }

    /// Allows the hosted network with `config`, keeping the key across reboots.
    ///
    /// # Errors
    ///
    /// Returns [`HostedNetworkError::Configure`] if the service refuses.
    pub fn configure(&self, config: &HotspotConfig) -> Result<(), HostedNetworkError> {
        self.wlan
            .set_hosted_network_mode(ModeRequest::Allow {
                config,
                key_usage: KeyUsage::Persistent,
            })
            .map_err(HostedNetworkError::Configure)?;

        tracing::info!(ssid = config.ssid(), "Hosted network configured");
        Ok(())
    }

    /// Starts the hosted network. A failure leaves the mode allowed.
    ///
    /// # Errors
    ///
    /// Returns [`HostedNetworkError::StartFailed`] with the OS diagnostic.
    pub fn start(&self) -> Result<(), HostedNetworkError> {
        self.wlan
            .start_hosted_network()
            .map_err(HostedNetworkError::StartFailed)?;

        tracing::info!("Hosted network started");
        Ok(())
    }

    /// Disallows then stops the hosted network. Idempotent when not running.
    ///
    /// # Errors
    ///
    /// Returns [`HostedNetworkError::StopFailed`] if either call is refused.
    pub fn stop(&self) -> Result<(), HostedNetworkError> {
        self.wlan
            .set_hosted_network_mode(ModeRequest::Disallow)
            .map_err(HostedNetworkError::StopFailed)?;
        self.wlan
            .stop_hosted_network()
            .map_err(HostedNetworkError::StopFailed)?;

        tracing::info!("Hosted network stopped");
        Ok(())
    }

    /// Queries the current hosted network status.
    ///
    /// # Errors
    ///
    /// Returns [`HostedNetworkError::Status`] if the query fails.
    pub fn status(&self) -> Result<HostedNetworkStatus, HostedNetworkError> {
        self.wlan
            .show_hosted_network_status()
            .map_err(HostedNetworkError::Status)
    }
}

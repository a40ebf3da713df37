//! The `start`, `stop`, and `show` actions.
//!
//! This module provides:
//! - The capability object handed to every action ([`Environment`])
//! - The interactive seam for credentials and uplink choice ([`Operator`])
//! - The ordered activation and teardown protocol ([`Orchestrator`])
//!
//! # Ordering
//!
//! - `start`: credentials, configure, start, fetch catalog, choose uplink,
//!   resolve hotspot, enable uplink (public), enable hotspot (private)
//! - `stop`: fetch catalog, disable every shared connection, stop hosted
//!   network
//!
//! A failure aborts the action where it happened. Earlier steps stay applied.

mod error;

pub use error::{OrchestratorError, PromptError};

use crate::config::defaults;
use crate::hosted::{HostedNetworkController, HostedNetworkStatus, HotspotConfig, WlanService};
use crate::network::filter::FilterChain;
use crate::network::{
    AdapterId, AdapterLookup, AdapterRecord, ConnectionSource, RolePair,
    filter_connected_candidates, list_adapters, resolve_hotspot_adapter,
};
use crate::sharing::{EnableOutcome, ShareRole, SharingController, SharingService};

/// Everything an action may touch: the administrator flag and the OS
/// service handles.
#[derive(Clone, Copy)]
pub struct Environment<'a> {
    /// Whether the process runs with administrator rights.
    pub is_admin: bool,
    /// Hosted network service.
    pub wlan: &'a dyn WlanService,
    /// Connection enumeration service.
    pub connections: &'a dyn ConnectionSource,
    /// Connection sharing service.
    pub sharing: &'a dyn SharingService,
    /// Adapter-configuration lookup service.
    pub lookup: &'a dyn AdapterLookup,
}

/// SSID and key as typed by the operator, not yet validated.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialInput {
    /// Entered SSID.
    pub ssid: String,
    /// Entered pre-shared key.
    pub key: String,
}

impl std::fmt::Debug for CredentialInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialInput")
            .field("ssid", &self.ssid)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// The person at the keyboard.
pub trait Operator {
    /// Asks for the hotspot SSID and key.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if the prompt fails or is cancelled.
    fn hotspot_credentials(&mut self) -> Result<CredentialInput, PromptError>;

    /// Asks which of `candidates` is the uplink. Never called with an empty
    /// list.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if the prompt fails or is cancelled.
    fn choose_uplink(&mut self, candidates: &[AdapterRecord]) -> Result<AdapterRecord, PromptError>;
}

/// What a successful `start` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartSummary {
    /// SSID the hosted network was configured with.
    pub ssid: String,
    /// The shared connection.
    pub uplink: AdapterRecord,
    /// The virtual hosted-network adapter.
    pub hotspot: AdapterRecord,
    /// Whether the uplink needed enabling.
    pub uplink_outcome: EnableOutcome,
    /// Whether the hotspot needed enabling.
    pub hotspot_outcome: EnableOutcome,
}

/// What a successful `stop` did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopSummary {
    /// Connections on which sharing was disabled.
    pub disabled: Vec<AdapterId>,
}

/// Runs actions against an [`Environment`].
pub struct Orchestrator<'a> {
    env: Environment<'a>,
    miniport_service: &'a str,
    candidate_filter: Option<&'a FilterChain>,
}

impl<'a> Orchestrator<'a> {
    /// Creates an orchestrator with the default miniport service and no
    /// candidate filter.
    #[must_use]
    pub const fn new(env: Environment<'a>) -> Self {
        Self {
            env,
            miniport_service: defaults::MINIPORT_SERVICE,
            candidate_filter: None,
        }
    }

    /// Sets the service name used to find the hotspot adapter.
    #[must_use]
    pub const fn with_miniport_service(mut self, service: &'a str) -> Self {
        self.miniport_service = service;
        self
    }

    /// Narrows the candidate list shown to the operator.
    #[must_use]
    pub const fn with_candidate_filter(mut self, filter: &'a FilterChain) -> Self {
        self.candidate_filter = Some(filter);
        self
    }

    /// Returns the hosted network status. Needs no privileges.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError::Hosted`] if the status query fails.
    pub fn show(&self) -> Result<HostedNetworkStatus, OrchestratorError> {
        Ok(self.hosted().status()?)
    }

    /// Tears down all sharing, then stops the hosted network.
    ///
    /// Individual disable failures do not prevent the hosted network from
    /// being stopped; they are reported afterwards.
    ///
    /// # Errors
    ///
    /// - [`OrchestratorError::NotAdministrator`] before anything is touched
    /// - [`OrchestratorError::Enumeration`] if the catalog cannot be fetched
    /// - [`OrchestratorError::StopFailed`] if the hosted network cannot be
    ///   stopped, carrying the teardown report
    /// - [`OrchestratorError::SharingTeardown`] if some disables failed
    pub fn stop(&self) -> Result<StopSummary, OrchestratorError> {
        self.require_admin()?;

        let catalog = list_adapters(self.env.connections)?;
        tracing::debug!(adapters = catalog.len(), "Catalog fetched");

        let report = SharingController::new(self.env.sharing).disable_sharing_all(&catalog);
        if let Err(source) = self.hosted().stop() {
            return Err(OrchestratorError::StopFailed {
                source,
                teardown: report,
            });
        }

        if report.is_clean() {
            Ok(StopSummary {
                disabled: report.disabled,
            })
        } else {
            Err(OrchestratorError::SharingTeardown(report))
        }
    }

    /// Configures and starts the hosted network, then shares the uplink the
    /// operator picks with the hotspot adapter.
    ///
    /// Credentials are validated before any OS state changes. Once the
    /// hosted network is configured, later failures leave it as is.
    ///
    /// # Errors
    ///
    /// - [`OrchestratorError::NotAdministrator`] or
    ///   [`OrchestratorError::UnsupportedHardware`] before anything is touched
    /// - [`OrchestratorError::Prompt`] or [`OrchestratorError::InvalidConfig`]
    ///   for unusable operator input
    /// - [`OrchestratorError::Hosted`] if configure or start fails
    /// - [`OrchestratorError::Enumeration`] if the catalog cannot be fetched
    /// - [`OrchestratorError::NoUplinkCandidates`] before the uplink prompt
    /// - [`OrchestratorError::Resolve`] if the hotspot adapter is not found
    ///   or the pair is invalid
    /// - [`OrchestratorError::Sharing`] if enabling fails
    pub fn start(&self, operator: &mut dyn Operator) -> Result<StartSummary, OrchestratorError> {
        self.require_admin()?;

        let hosted = self.hosted();
        if !hosted.check_support()? {
            return Err(OrchestratorError::UnsupportedHardware);
        }

        let input = operator.hotspot_credentials()?;
        let config = HotspotConfig::new(input.ssid, input.key)?;

        hosted.configure(&config)?;
        hosted.start()?;

        let catalog = list_adapters(self.env.connections)?;
        let candidates = self.candidates(&catalog);
        if candidates.is_empty() {
            return Err(OrchestratorError::NoUplinkCandidates);
        }

        let uplink = operator.choose_uplink(&candidates)?;
        tracing::info!(adapter = %uplink.name, "Uplink selected");

        let hotspot = resolve_hotspot_adapter(&catalog, self.env.lookup, self.miniport_service)?;
        let pair = RolePair::new(uplink, hotspot)?;

        let sharing = SharingController::new(self.env.sharing);
        let uplink_outcome = sharing.enable_sharing(pair.uplink(), ShareRole::Public)?;
        let hotspot_outcome = sharing.enable_sharing(pair.hotspot(), ShareRole::Private)?;

        Ok(StartSummary {
            ssid: config.ssid().to_string(),
            uplink: pair.uplink().clone(),
            hotspot: pair.hotspot().clone(),
            uplink_outcome,
            hotspot_outcome,
        })
    }

    const fn hosted(&self) -> HostedNetworkController<'a> {
        HostedNetworkController::new(self.env.wlan)
    }

    const fn require_admin(&self) -> Result<(), OrchestratorError> {
        if self.env.is_admin {
            Ok(())
        } else {
            Err(OrchestratorError::NotAdministrator)
        }
    }

    fn candidates(&self, catalog: &[AdapterRecord]) -> Vec<AdapterRecord> {
        let connected = filter_connected_candidates(catalog);
        let total = connected.len();
        let candidates = match self.candidate_filter {
            Some(filter) => filter.apply(connected),
            None => connected,
        };
        tracing::debug!(
            connected = total,
            offered = candidates.len(),
            "Uplink candidates"
        );
        candidates
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

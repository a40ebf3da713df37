//! In-memory stand-in for the OS services, shared by unit tests.
//!
//! [`FakeOs`] implements every service trait, keeps just enough state to
//! behave like the real subsystems (hosted network mode, per-connection
//! sharing flags), and records each call in order.

use std::cell::RefCell;

use crate::hosted::{
    DriverCapabilities, HostedNetworkState, HostedNetworkStatus, KeyUsage, ModeRequest, WlanError,
    WlanService,
};
use crate::network::{
    AdapterId, AdapterLookup, ConnectionEntry, ConnectionProps, ConnectionSource, EnumerationError,
    LookupError, SharingConfig, SharingRole,
};
use crate::sharing::{ShareRole, SharingError, SharingService};

/// A recorded service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ShowDriverCapabilities,
    SetMode {
        allow: bool,
        ssid: Option<String>,
        persistent: bool,
    },
    StartHostedNetwork,
    StopHostedNetwork,
    ShowStatus,
    EnumerateConnections,
    FindAdapter(String),
    EnableSharing(AdapterId, ShareRole),
    DisableSharing(AdapterId),
}

impl Call {
    pub const fn disallow() -> Self {
        Self::SetMode {
            allow: false,
            ssid: None,
            persistent: false,
        }
    }

    pub fn allow(ssid: &str) -> Self {
        Self::SetMode {
            allow: true,
            ssid: Some(ssid.to_string()),
            persistent: true,
        }
    }

    /// Returns true for calls that change OS state.
    pub const fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::SetMode { .. }
                | Self::StartHostedNetwork
                | Self::StopHostedNetwork
                | Self::EnableSharing(..)
                | Self::DisableSharing(_)
        )
    }
}

pub fn id(guid: &str) -> AdapterId {
    AdapterId::new(guid)
}

fn entry(guid: &str, name: &str, status: i32) -> ConnectionEntry {
    ConnectionEntry {
        props: ConnectionProps {
            guid: format!("{{{guid}}}"),
            name: name.to_string(),
            device_name: format!("{name} adapter"),
            status,
            media_type: 3,
            characteristics: 0,
        },
        sharing: Some(SharingConfig {
            sharing_enabled: false,
            sharing_role: SharingRole::None,
            firewall_enabled: false,
        }),
    }
}

const CONNECTED: i32 = 2;
const DISCONNECTED: i32 = 0;

struct State {
    hosted: HostedNetworkState,
    ssid: Option<String>,
    connections: Vec<ConnectionEntry>,
    hotspot: Option<ConnectionEntry>,
}

/// Fake OS networking stack.
pub struct FakeOs {
    supported: Option<bool>,
    failures: Vec<Call>,
    state: RefCell<State>,
    calls: RefCell<Vec<Call>>,
}

impl FakeOs {
    /// Supported driver, hosted network disallowed, no connections.
    pub fn new() -> Self {
        Self {
            supported: Some(true),
            failures: Vec::new(),
            state: RefCell::new(State {
                hosted: HostedNetworkState::Disallowed,
                ssid: None,
                connections: Vec::new(),
                hotspot: None,
            }),
            calls: RefCell::default(),
        }
    }

    /// No capable driver. Allowing the hosted network leaves it
    /// [`HostedNetworkState::Unsupported`].
    pub fn unsupported(mut self) -> Self {
        self.supported = Some(false);
        self
    }

    /// Driver report that answers neither yes nor no.
    pub fn unreported(mut self) -> Self {
        self.supported = None;
        self
    }

    /// Makes every call matching `call` fail. `SetMode` matches any mode.
    pub fn failing(mut self, call: Call) -> Self {
        self.failures.push(call);
        self
    }

    pub fn with_connected(self, guid: &str, name: &str) -> Self {
        self.state.borrow_mut().connections.push(entry(guid, name, CONNECTED));
        self
    }

    pub fn with_disconnected(self, guid: &str, name: &str) -> Self {
        self.state
            .borrow_mut()
            .connections
            .push(entry(guid, name, DISCONNECTED));
        self
    }

    /// Marks an existing connection as shared in `role`.
    pub fn shared(self, guid: &str, role: SharingRole) -> Self {
        {
            let mut state = self.state.borrow_mut();
            let state = &mut *state;
            let target = id(guid);
            for e in state.connections.iter_mut().chain(state.hotspot.iter_mut()) {
                if AdapterId::new(&e.props.guid) == target {
                    e.sharing = Some(SharingConfig {
                        sharing_enabled: true,
                        sharing_role: role,
                        firewall_enabled: false,
                    });
                }
            }
        }
        self
    }

    /// Registers the virtual miniport adapter. It only shows up in the
    /// enumeration while the hosted network is started.
    pub fn with_hotspot(self, guid: &str, name: &str) -> Self {
        self.state.borrow_mut().hotspot = Some(entry(guid, name, CONNECTED));
        self
    }

    /// Pretends the hosted network is already running.
    pub fn started(self) -> Self {
        self.state.borrow_mut().hosted = HostedNetworkState::AllowedStarted;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn hosted_state(&self) -> HostedNetworkState {
        self.state.borrow().hosted
    }

    pub fn sharing_of(&self, guid: &str) -> Option<SharingRole> {
        let state = self.state.borrow();
        let target = id(guid);
        state
            .connections
            .iter()
            .chain(state.hotspot.iter())
            .find(|e| AdapterId::new(&e.props.guid) == target)
            .and_then(|e| e.sharing)
            .map(|s| s.sharing_role)
    }

    fn record(&self, call: Call) -> bool {
        let fail = self.failures.iter().any(|f| match (f, &call) {
            (Call::SetMode { .. }, Call::SetMode { .. }) => true,
            _ => *f == call,
        });
        self.calls.borrow_mut().push(call);
        fail
    }

    fn set_sharing(&self, target: &AdapterId, role: SharingRole) {
        let mut state = self.state.borrow_mut();
        let state = &mut *state;
        for e in state.connections.iter_mut().chain(state.hotspot.iter_mut()) {
            if AdapterId::new(&e.props.guid) == *target {
                e.sharing = Some(SharingConfig {
                    sharing_enabled: !matches!(role, SharingRole::None),
                    sharing_role: role,
                    firewall_enabled: false,
                });
            }
        }
    }
}

impl Default for FakeOs {
    fn default() -> Self {
        Self::new()
    }
}

fn rejected(operation: &'static str) -> WlanError {
    WlanError::Rejected {
        operation,
        reason: "simulated failure".to_string(),
    }
}

impl WlanService for FakeOs {
    fn show_driver_capabilities(&self) -> Result<DriverCapabilities, WlanError> {
        if self.record(Call::ShowDriverCapabilities) {
            return Err(rejected("show drivers"));
        }
        Ok(DriverCapabilities {
            hosted_network_supported: self.supported,
            driver: Some("Fake Wireless Adapter".to_string()),
        })
    }

    fn set_hosted_network_mode(&self, request: ModeRequest<'_>) -> Result<(), WlanError> {
        let call = match request {
            ModeRequest::Allow { config, key_usage } => Call::SetMode {
                allow: true,
                ssid: Some(config.ssid().to_string()),
                persistent: key_usage == KeyUsage::Persistent,
            },
            ModeRequest::Disallow => Call::disallow(),
        };
        if self.record(call) {
            return Err(rejected("set hostednetwork"));
        }

        let mut state = self.state.borrow_mut();
        match request {
            ModeRequest::Allow { config, .. } => {
                state.ssid = Some(config.ssid().to_string());
                if self.supported == Some(false) {
                    state.hosted = HostedNetworkState::Unsupported;
                } else if state.hosted == HostedNetworkState::Disallowed {
                    state.hosted = HostedNetworkState::AllowedStopped;
                }
            }
            ModeRequest::Disallow => state.hosted = HostedNetworkState::Disallowed,
        }
        Ok(())
    }

    fn start_hosted_network(&self) -> Result<(), WlanError> {
        if self.record(Call::StartHostedNetwork) {
            return Err(rejected("start hostednetwork"));
        }
        let mut state = self.state.borrow_mut();
        if matches!(
            state.hosted,
            HostedNetworkState::Disallowed | HostedNetworkState::Unsupported
        ) {
            return Err(rejected("start hostednetwork"));
        }
        state.hosted = HostedNetworkState::AllowedStarted;
        Ok(())
    }

    fn stop_hosted_network(&self) -> Result<(), WlanError> {
        if self.record(Call::StopHostedNetwork) {
            return Err(rejected("stop hostednetwork"));
        }
        let mut state = self.state.borrow_mut();
        if state.hosted == HostedNetworkState::AllowedStarted {
            state.hosted = HostedNetworkState::AllowedStopped;
        }
        Ok(())
    }

    fn show_hosted_network_status(&self) -> Result<HostedNetworkStatus, WlanError> {
        if self.record(Call::ShowStatus) {
            return Err(rejected("show hostednetwork"));
        }
        let state = self.state.borrow();
        Ok(HostedNetworkStatus {
            state: Some(state.hosted),
            ssid: state.ssid.clone(),
            clients: None,
            raw: format!("Hosted network: {}", state.hosted),
        })
    }
}

impl ConnectionSource for FakeOs {
    fn enumerate_connections(&self) -> Result<Vec<ConnectionEntry>, EnumerationError> {
        if self.record(Call::EnumerateConnections) {
            return Err(EnumerationError::Unavailable("simulated failure".to_string()));
        }
        let state = self.state.borrow();
        let mut entries = state.connections.clone();
        if state.hosted == HostedNetworkState::AllowedStarted {
            entries.extend(state.hotspot.clone());
        }
        Ok(entries)
    }
}

impl SharingService for FakeOs {
    fn enable_sharing(&self, target: &AdapterId, role: ShareRole) -> Result<(), SharingError> {
        if self.record(Call::EnableSharing(target.clone(), role)) {
            return Err(SharingError::Rejected {
                action: "enable",
                id: target.clone(),
                reason: "simulated failure".to_string(),
            });
        }
        self.set_sharing(target, role.into());
        Ok(())
    }

    fn disable_sharing(&self, target: &AdapterId) -> Result<(), SharingError> {
        if self.record(Call::DisableSharing(target.clone())) {
            return Err(SharingError::Rejected {
                action: "disable",
                id: target.clone(),
                reason: "simulated failure".to_string(),
            });
        }
        self.set_sharing(target, SharingRole::None);
        Ok(())
    }
}

impl AdapterLookup for FakeOs {
    fn find_adapter_by_service_name(
        &self,
        service_name: &str,
    ) -> Result<Option<AdapterId>, LookupError> {
        if self.record(Call::FindAdapter(service_name.to_string())) {
            return Err(LookupError("simulated failure".to_string()));
        }
        let state = self.state.borrow();
        Ok(state
            .hotspot
            .as_ref()
            .filter(|_| service_name == "vwifimp")
            .map(|e| AdapterId::new(&e.props.guid)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_a_fresh_supported_stack() {
        let os = FakeOs::default();
        assert_eq!(os.hosted_state(), HostedNetworkState::Disallowed);
        assert_eq!(
            os.show_driver_capabilities().unwrap().hosted_network_supported,
            Some(true)
        );
        assert_eq!(os.calls(), [Call::ShowDriverCapabilities]);
    }
}

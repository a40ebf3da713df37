//! Core network types for connection representation.

use std::fmt;

/// Stable identity of a network connection (its GUID).
///
/// Windows reports the same GUID with and without braces and in varying
/// case depending on the API, so the identity is normalized on construction:
/// braces stripped, whitespace trimmed, uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AdapterId(String);

impl AdapterId {
    /// Creates a normalized identity from any GUID spelling.
    #[must_use]
    pub fn new(raw: impl AsRef<str>) -> Self {
        let trimmed = raw.as_ref().trim();
        let inner = trimmed
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .unwrap_or(trimmed);
        Self(inner.trim().to_ascii_uppercase())
    }

    /// Returns true if the identity is empty after normalization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the identity in the braced form Windows APIs expect.
    #[must_use]
    pub fn braced(&self) -> String {
        format!("{{{}}}", self.0)
    }
}

impl fmt::Display for AdapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0)
    }
}

/// Connection status as reported by the OS (`NETCON_STATUS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
    Disconnecting,
    HardwareNotPresent,
    HardwareDisabled,
    HardwareMalfunction,
    MediaDisconnected,
    Authenticating,
    AuthenticationSucceeded,
    AuthenticationFailed,
    InvalidAddress,
    CredentialsRequired,
    /// Unknown status, preserving the original code for debugging.
    Other(i32),
}

impl ConnectionStatus {
    /// Maps a raw `NETCON_STATUS` value.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Disconnected,
            1 => Self::Connecting,
            2 => Self::Connected,
            3 => Self::Disconnecting,
            4 => Self::HardwareNotPresent,
            5 => Self::HardwareDisabled,
            6 => Self::HardwareMalfunction,
            7 => Self::MediaDisconnected,
            8 => Self::Authenticating,
            9 => Self::AuthenticationSucceeded,
            10 => Self::AuthenticationFailed,
            11 => Self::InvalidAddress,
            12 => Self::CredentialsRequired,
            other => Self::Other(other),
        }
    }

    /// Returns true if the connection is up.
    #[must_use]
    pub const fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => write!(f, "disconnected"),
            Self::Connecting => write!(f, "connecting"),
            Self::Connected => write!(f, "connected"),
            Self::Disconnecting => write!(f, "disconnecting"),
            Self::HardwareNotPresent => write!(f, "hardware not present"),
            Self::HardwareDisabled => write!(f, "hardware disabled"),
            Self::HardwareMalfunction => write!(f, "hardware malfunction"),
            Self::MediaDisconnected => write!(f, "media disconnected"),
            Self::Authenticating => write!(f, "authenticating"),
            Self::AuthenticationSucceeded => write!(f, "authenticated"),
            Self::AuthenticationFailed => write!(f, "authentication failed"),
            Self::InvalidAddress => write!(f, "invalid address"),
            Self::CredentialsRequired => write!(f, "credentials required"),
            Self::Other(code) => write!(f, "status {code}"),
        }
    }
}

/// Connection media type (`NETCON_MEDIATYPE`).
///
/// Used for display only; role resolution never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    None,
    Direct,
    Isdn,
    Lan,
    Phone,
    Tunnel,
    Pppoe,
    Bridge,
    SharedAccessHostLan,
    SharedAccessHostRas,
    /// Unknown media type, preserving the original code.
    Other(i32),
}

impl MediaType {
    /// Maps a raw `NETCON_MEDIATYPE` value.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::None,
            1 => Self::Direct,
            2 => Self::Isdn,
            3 => Self::Lan,
            4 => Self::Phone,
            5 => Self::Tunnel,
            6 => Self::Pppoe,
            7 => Self::Bridge,
            8 => Self::SharedAccessHostLan,
            9 => Self::SharedAccessHostRas,
            other => Self::Other(other),
        }
    }
}

/// Role an adapter plays in connection sharing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharingRole {
    /// Sharing is not enabled on this adapter.
    None,
    /// The adapter whose Internet connection is shared (uplink).
    Public,
    /// The adapter that receives the shared connection (downstream).
    Private,
}

impl fmt::Display for SharingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

/// Immutable snapshot of one network connection at enumeration time.
///
/// Never updated in place; fetch a new catalog after any mutating operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterRecord {
    /// Stable GUID of the connection.
    pub id: AdapterId,
    /// Display name (e.g., "Ethernet", "Wi-Fi").
    pub name: String,
    /// Device name of the backing hardware or driver.
    pub device_name: String,
    /// Connection status.
    pub status: ConnectionStatus,
    /// Connection media type.
    pub media_type: MediaType,
    /// Whether connection sharing is currently enabled on this adapter.
    pub sharing_enabled: bool,
    /// Sharing role; [`SharingRole::None`] when sharing is disabled.
    pub sharing_role: SharingRole,
    /// Whether the Internet connection firewall is enabled.
    pub firewall_enabled: bool,
}

impl AdapterRecord {
    /// Creates an unshared record with the given identity, name, and status.
    #[must_use]
    pub fn new(id: AdapterId, name: impl Into<String>, status: ConnectionStatus) -> Self {
        Self {
            id,
            name: name.into(),
            device_name: String::new(),
            status,
            media_type: MediaType::Lan,
            sharing_enabled: false,
            sharing_role: SharingRole::None,
            firewall_enabled: false,
        }
    }

    /// Sets the device name.
    #[must_use]
    pub fn with_device_name(mut self, device_name: impl Into<String>) -> Self {
        self.device_name = device_name.into();
        self
    }

    /// Marks the record as currently shared in the given role.
    #[must_use]
    pub const fn with_sharing(mut self, role: SharingRole) -> Self {
        self.sharing_enabled = !matches!(role, SharingRole::None);
        self.sharing_role = role;
        self
    }

    /// Returns true if the connection is up.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.status.is_connected()
    }
}

impl fmt::Display for AdapterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.device_name.is_empty() {
            write!(f, "{} [{}]", self.name, self.status)
        } else {
            write!(f, "{} ({}) [{}]", self.name, self.device_name, self.status)
        }
    }
}

//! Connection enumeration trait and catalog construction.

use std::collections::HashSet;

use thiserror::Error;

use super::{AdapterId, AdapterRecord, ConnectionStatus, MediaType, SharingRole};

/// Error type for connection enumeration.
///
/// Always fatal to the calling operation; never retried.
#[derive(Debug, Error)]
pub enum EnumerationError {
    /// The enumeration service could not be reached.
    #[error("Network enumeration service unavailable: {0}")]
    Unavailable(String),

    /// The service answered with data that does not form a valid catalog.
    #[error("Malformed enumeration data: {0}")]
    Malformed(String),
}

/// Connection properties as reported by the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionProps {
    /// Raw GUID string.
    pub guid: String,
    /// Display name.
    pub name: String,
    /// Device name.
    pub device_name: String,
    /// Raw `NETCON_STATUS` code.
    pub status: i32,
    /// Raw `NETCON_MEDIATYPE` code.
    pub media_type: i32,
    /// `NCCF_*` characteristic flags.
    pub characteristics: u32,
}

/// Sharing configuration attached to one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharingConfig {
    /// Whether sharing is enabled.
    pub sharing_enabled: bool,
    /// Active role when enabled.
    pub sharing_role: SharingRole,
    /// Whether the connection firewall is enabled.
    pub firewall_enabled: bool,
}

/// One enumerated connection joined with its sharing configuration.
///
/// `sharing` is `None` when the OS returned a connection for which no
/// sharing configuration could be obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionEntry {
    pub props: ConnectionProps,
    pub sharing: Option<SharingConfig>,
}

/// Trait for enumerating network connections.
///
/// Implementations return ALL connections, including virtual ones;
/// classification happens in the caller.
pub trait ConnectionSource {
    /// Enumerates every connection the OS knows about.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError`] if the service is unavailable or its
    /// answer cannot be decoded.
    fn enumerate_connections(&self) -> Result<Vec<ConnectionEntry>, EnumerationError>;
}

/// Enumerates all connections and materializes them as [`AdapterRecord`]s.
///
/// # Errors
///
/// Returns [`EnumerationError::Malformed`] when a connection has no sharing
/// configuration, an empty identity, or an identity that appears twice.
/// Source failures are passed through unchanged.
pub fn list_adapters(source: &dyn ConnectionSource) -> Result<Vec<AdapterRecord>, EnumerationError> {
    let entries = source.enumerate_connections()?;
    let mut seen = HashSet::with_capacity(entries.len());
    let mut records = Vec::with_capacity(entries.len());

    for entry in entries {
        let record = into_record(entry)?;
        if !seen.insert(record.id.clone()) {
            return Err(EnumerationError::Malformed(format!(
                "duplicate connection identity {}",
                record.id
            )));
        }
        records.push(record);
    }

    tracing::debug!(count = records.len(), "Fetched adapter catalog");
    Ok(records)
}

fn into_record(entry: ConnectionEntry) -> Result<AdapterRecord, EnumerationError> {
    let ConnectionEntry { props, sharing } = entry;

    let id = AdapterId::new(&props.guid);
    if id.is_empty() {
        return Err(EnumerationError::Malformed(format!(
            "connection '{}' has no identity",
            props.name
        )));
    }

    let sharing = sharing.ok_or_else(|| {
        EnumerationError::Malformed(format!(
            "connection '{}' {id} has no sharing configuration",
            props.name
        ))
    })?;

    let sharing_role = if sharing.sharing_enabled {
        sharing.sharing_role
    } else {
        SharingRole::None
    };

    Ok(AdapterRecord {
        id,
        name: props.name,
        device_name: props.device_name,
        status: ConnectionStatus::from_code(props.status),
        media_type: MediaType::from_code(props.media_type),
        sharing_enabled: sharing.sharing_enabled,
        sharing_role,
        firewall_enabled: sharing.firewall_enabled,
    })
}

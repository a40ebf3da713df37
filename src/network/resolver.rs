//! Role resolution: which adapter is the uplink, which is the hotspot.

use std::fmt;

use thiserror::Error;

use super::{AdapterId, AdapterRecord};

/// Error type for adapter-configuration lookups.
#[derive(Debug, Error)]
#[error("Adapter lookup failed: {0}")]
pub struct LookupError(pub String);

/// Trait for the OS adapter-configuration lookup service.
pub trait AdapterLookup {
    /// Finds the adapter whose backing driver service is `service_name` and
    /// returns its hardware identity, or `None` if no such adapter exists.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the lookup service itself fails.
    fn find_adapter_by_service_name(&self, service_name: &str)
    -> Result<Option<AdapterId>, LookupError>;
}

/// Error type for role resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The virtual hotspot adapter could not be resolved.
    ///
    /// Usually the hosted network never started or the driver is absent.
    #[error("Hosted network adapter (service '{service}') not found{}", detail_suffix(.detail))]
    HotspotAdapterNotFound {
        /// Miniport service name that was searched for.
        service: String,
        /// What exactly was missing.
        detail: Option<String>,
    },

    /// The lookup service failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Uplink and hotspot resolved to the same connection.
    #[error("Uplink and hotspot are the same adapter {0}")]
    SameAdapter(AdapterId),

    /// The chosen uplink is not connected.
    #[error("Uplink adapter '{name}' is not connected")]
    UplinkNotConnected {
        /// Display name of the chosen adapter.
        name: String,
    },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_ref().map_or_else(String::new, |d| format!(": {d}"))
}

/// Keeps only connected adapters, preserving catalog order.
#[must_use]
pub fn filter_connected_candidates(catalog: &[AdapterRecord]) -> Vec<AdapterRecord> {
    catalog.iter().filter(|a| a.is_connected()).cloned().collect()
}

/// Resolves the virtual hosted-network adapter in `catalog`.
///
/// # Errors
///
/// Returns [`ResolveError::HotspotAdapterNotFound`] if the lookup finds no
/// adapter backed by `service_name`, or if the identity it reports is not in
/// the catalog. Lookup service failures are returned as
/// [`ResolveError::Lookup`].
pub fn resolve_hotspot_adapter(
    catalog: &[AdapterRecord],
    lookup: &dyn AdapterLookup,
    service_name: &str,
) -> Result<AdapterRecord, ResolveError> {
    let Some(id) = lookup.find_adapter_by_service_name(service_name)? else {
        return Err(ResolveError::HotspotAdapterNotFound {
            service: service_name.to_string(),
            detail: None,
        });
    };

    tracing::debug!(%id, service = service_name, "Hosted network adapter identity resolved");

    catalog
        .iter()
        .find(|a| a.id == id)
        .cloned()
        .ok_or_else(|| ResolveError::HotspotAdapterNotFound {
            service: service_name.to_string(),
            detail: Some(format!("no connection with identity {id}")),
        })
}

/// Why an operator's uplink choice was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryPrompt {
    /// The input was not a number.
    NotANumber(String),
    /// The index lies outside `[0, len)`.
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of candidates.
        len: usize,
    },
}

impl fmt::Display for RetryPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(input) => write!(f, "'{input}' is not a number"),
            Self::OutOfRange { index, len: 0 } => {
                write!(f, "{index} is out of range: there are no candidates")
            }
            Self::OutOfRange { index, len } => {
                write!(f, "{index} is out of range, choose 0 to {}", len - 1)
            }
        }
    }
}

/// Returns the candidate at `index`, or why it cannot be used.
///
/// # Errors
///
/// Returns [`RetryPrompt::OutOfRange`] if `index >= candidates.len()`.
pub fn select_uplink(candidates: &[AdapterRecord], index: usize) -> Result<AdapterRecord, RetryPrompt> {
    candidates
        .get(index)
        .cloned()
        .ok_or(RetryPrompt::OutOfRange {
            index,
            len: candidates.len(),
        })
}

/// Parses raw operator input and selects the matching candidate.
///
/// # Errors
///
/// Returns [`RetryPrompt`] for non-numeric or out-of-range input.
pub fn validate_index(candidates: &[AdapterRecord], input: &str) -> Result<AdapterRecord, RetryPrompt> {
    let trimmed = input.trim();
    let index = trimmed
        .parse::<usize>()
        .map_err(|_| RetryPrompt::NotANumber(trimmed.to_string()))?;
    select_uplink(candidates, index)
}

/// Resolved uplink/hotspot pair that drives sharing activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePair {
    uplink: AdapterRecord,
    hotspot: AdapterRecord,
}

impl RolePair {
    /// Pairs an uplink with a hotspot adapter.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::SameAdapter`] if both records share an identity,
    /// or [`ResolveError::UplinkNotConnected`] if the uplink is down.
    pub fn new(uplink: AdapterRecord, hotspot: AdapterRecord) -> Result<Self, ResolveError> {
        if uplink.id == hotspot.id {
            return Err(ResolveError::SameAdapter(uplink.id));
        }
        if !uplink.is_connected() {
            return Err(ResolveError::UplinkNotConnected { name: uplink.name });
        }
        Ok(Self { uplink, hotspot })
    }

    /// The adapter whose connection is shared.
    #[must_use]
    pub const fn uplink(&self) -> &AdapterRecord {
        &self.uplink
    }

    /// The virtual hosted-network adapter.
    #[must_use]
    pub const fn hotspot(&self) -> &AdapterRecord {
        &self.hotspot
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

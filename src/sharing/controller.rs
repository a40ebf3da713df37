//! Sharing activation and teardown.

use crate::network::{AdapterId, AdapterRecord};

use super::{ShareRole, SharingError, SharingService};

/// Result of an enable request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnableOutcome {
    /// Sharing was enabled by this call.
    Enabled,
    /// The record already had sharing enabled; nothing was changed.
    AlreadyShared,
}

/// Outcome of a best-effort teardown.
#[derive(Debug, Default)]
pub struct DisableReport {
    /// Connections on which sharing was disabled.
    pub disabled: Vec<AdapterId>,
    /// Connections that could not be disabled, with the reason.
    pub failures: Vec<(AdapterId, SharingError)>,
}

impl DisableReport {
    /// Returns true if every disable succeeded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives a [`SharingService`] based on fetched [`AdapterRecord`] state.
pub struct SharingController<'a> {
    service: &'a dyn SharingService,
}

impl<'a> SharingController<'a> {
    /// Creates a controller over the given service.
    #[must_use]
    pub const fn new(service: &'a dyn SharingService) -> Self {
        Self { service }
    }

    /// Enables sharing on `adapter` in `role`.
    ///
    /// No-op if the fetched record already reports sharing enabled. The
    /// record is not re-queried.
    ///
    /// # Errors
    ///
    /// Returns the service's [`SharingError`] if enabling fails.
    pub fn enable_sharing(
        &self,
        adapter: &AdapterRecord,
        role: ShareRole,
    ) -> Result<EnableOutcome, SharingError> {
        if adapter.sharing_enabled {
            tracing::debug!(
                adapter = %adapter.name,
                current = %adapter.sharing_role,
                "Sharing already enabled, skipping"
            );
            return Ok(EnableOutcome::AlreadyShared);
        }

        self.service.enable_sharing(&adapter.id, role)?;
        tracing::info!(adapter = %adapter.name, %role, "Sharing enabled");
        Ok(EnableOutcome::Enabled)
    }

    /// Disables sharing on every record in `catalog` that has it enabled.
    ///
    /// Each disable is independent: a failure is recorded and the remaining
    /// adapters are still attempted.
    #[must_use]
    pub fn disable_sharing_all(&self, catalog: &[AdapterRecord]) -> DisableReport {
        let mut report = DisableReport::default();

        for adapter in catalog.iter().filter(|a| a.sharing_enabled) {
            match self.service.disable_sharing(&adapter.id) {
                Ok(()) => {
                    tracing::info!(adapter = %adapter.name, "Sharing disabled");
                    report.disabled.push(adapter.id.clone());
                }
                Err(e) => {
                    tracing::warn!(adapter = %adapter.name, "Failed to disable sharing: {e}");
                    report.failures.push((adapter.id.clone(), e));
                }
            }
        }

        report
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;

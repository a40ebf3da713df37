//! Error types for the orchestrator.

use thiserror::Error;

use crate::hosted::{CredentialError, HostedNetworkError};
use crate::network::{EnumerationError, ResolveError};
use crate::sharing::{DisableReport, SharingError};

/// Error returned by an [`Operator`](super::Operator) prompt.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The operator aborted the prompt.
    #[error("Prompt cancelled by operator")]
    Cancelled,

    /// The terminal could not be read or written.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for the `start`, `stop`, and `show` actions.
///
/// Every variant is fatal for the running action. Nothing is retried and
/// nothing already applied is rolled back.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The action needs administrator rights.
    #[error("This action requires administrator rights; run from an elevated prompt")]
    NotAdministrator,

    /// The wireless driver cannot host a network.
    #[error("The wireless driver does not support the hosted network")]
    UnsupportedHardware,

    /// The SSID or key entered by the operator is unacceptable.
    #[error("Invalid hotspot configuration: {0}")]
    InvalidConfig(#[from] CredentialError),

    /// An operator prompt failed or was cancelled.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// The connection catalog could not be fetched.
    #[error(transparent)]
    Enumeration(#[from] EnumerationError),

    /// No connected adapter is available to share.
    #[error("No connected adapter available as uplink")]
    NoUplinkCandidates,

    /// Hotspot adapter resolution or role pairing failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A hosted network call failed.
    #[error(transparent)]
    Hosted(#[from] HostedNetworkError),

    /// Enabling sharing failed.
    #[error("Failed to enable sharing: {0}")]
    Sharing(#[from] SharingError),

    /// Some connections kept sharing enabled during `stop`.
    ///
    /// The hosted network has already been stopped when this is returned.
    #[error("Sharing could not be disabled on {} connection(s)", .0.failures.len())]
    SharingTeardown(DisableReport),

    /// The hosted network could not be stopped during `stop`.
    ///
    /// `teardown` is the outcome of the sharing teardown that ran first.
    #[error(
        "{source} (sharing disabled on {disabled} connection(s), {failed} failed)",
        disabled = .teardown.disabled.len(),
        failed = .teardown.failures.len()
    )]
    StopFailed {
        source: HostedNetworkError,
        teardown: DisableReport,
    },
}

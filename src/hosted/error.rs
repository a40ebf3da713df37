//! Error types for the hosted network layer.

use thiserror::Error;

/// Error type for raw wireless service calls.
///
/// Describes what went wrong without dictating recovery strategy.
#[derive(Debug, Error)]
pub enum WlanError {
    /// The service ran but refused the operation.
    #[error("{operation} refused: {reason}")]
    Rejected {
        /// Which operation was attempted.
        operation: &'static str,
        /// Diagnostic reported by the service.
        reason: String,
    },

    /// The service could not be started.
    #[error("Failed to run wireless service: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for [`HostedNetworkController`](super::HostedNetworkController) operations.
#[derive(Debug, Error)]
pub enum HostedNetworkError {
    /// Capability query failed.
    #[error("Failed to query driver capabilities: {0}")]
    Capabilities(#[source] WlanError),

    /// Setting the hosted network mode and credentials failed.
    #[error("Failed to configure hosted network: {0}")]
    Configure(#[source] WlanError),

    /// The driver refused to start the hosted network.
    #[error("Failed to start hosted network: {0}")]
    StartFailed(#[source] WlanError),

    /// The hosted network could not be stopped or disallowed.
    #[error("Failed to stop hosted network: {0}")]
    StopFailed(#[source] WlanError),

    /// Status query failed.
    #[error("Failed to query hosted network status: {0}")]
    Status(#[source] WlanError),
}

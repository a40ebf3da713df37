//! Error types for connection sharing.

use thiserror::Error;

use crate::network::AdapterId;

/// Error type for connection-sharing operations.
#[derive(Debug, Error)]
pub enum SharingError {
    /// The OS refused the change.
    #[error("Failed to {action} sharing on {id}: {reason}")]
    Rejected {
        /// "enable" or "disable".
        action: &'static str,
        /// Connection the change was aimed at.
        id: AdapterId,
        /// Diagnostic reported by the OS.
        reason: String,
    },

    /// The identity cannot be safely passed to the sharing service.
    #[error("Refusing to address connection with malformed identity '{0}'")]
    InvalidIdentity(String),

    /// The sharing service could not be started.
    #[error("Failed to run sharing service: {0}")]
    Io(#[from] std::io::Error),
}

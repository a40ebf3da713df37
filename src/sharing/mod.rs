//! Internet connection sharing layer.
//!
//! This module provides:
//! - The OS sharing service seam ([`SharingService`])
//! - Idempotent enable and best-effort teardown ([`SharingController`])
//! - Error handling ([`SharingError`])

mod controller;
mod error;

pub use controller::{DisableReport, EnableOutcome, SharingController};
pub use error::SharingError;

use std::fmt;

use crate::network::{AdapterId, SharingRole};

/// Role to enable sharing in. Two-valued, unlike [`SharingRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareRole {
    /// Share this adapter's Internet connection.
    Public,
    /// Receive the shared connection on this adapter.
    Private,
}

impl ShareRole {
    /// The `SHARINGCONNECTIONTYPE` value for this role.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Public => 0,
            Self::Private => 1,
        }
    }
}

impl From<ShareRole> for SharingRole {
    fn from(role: ShareRole) -> Self {
        match role {
            ShareRole::Public => Self::Public,
            ShareRole::Private => Self::Private,
        }
    }
}

impl fmt::Display for ShareRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", SharingRole::from(*self))
    }
}

/// Trait for the OS connection-sharing service.
///
/// Both calls mutate live OS configuration.
pub trait SharingService {
    /// Enables sharing on the connection `id` in the given role.
    ///
    /// # Errors
    ///
    /// Returns [`SharingError`] if the OS refuses or cannot be reached.
    fn enable_sharing(&self, id: &AdapterId, role: ShareRole) -> Result<(), SharingError>;

    /// Disables sharing on the connection `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SharingError`] if the OS refuses or cannot be reached.
    fn disable_sharing(&self, id: &AdapterId) -> Result<(), SharingError>;
}

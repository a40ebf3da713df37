//! Network layer for enumerating connections and resolving their roles.
//!
//! This module provides types and traits for:
//! - Representing connection snapshots ([`AdapterRecord`], [`AdapterId`])
//! - Enumerating connections ([`ConnectionSource`], [`list_adapters`])
//! - Narrowing the uplink candidate list ([`filter`])
//! - Uplink/hotspot role resolution ([`resolver`])
//! - Platform-specific implementations ([`platform`])

mod adapter;
mod catalog;
pub mod filter;
pub mod platform;
pub mod resolver;

pub use adapter::{AdapterId, AdapterRecord, ConnectionStatus, MediaType, SharingRole};
pub use catalog::{
    ConnectionEntry, ConnectionProps, ConnectionSource, EnumerationError, SharingConfig,
    list_adapters,
};
pub use resolver::{
    AdapterLookup, LookupError, ResolveError, RetryPrompt, RolePair, filter_connected_candidates,
    resolve_hotspot_adapter, select_uplink, validate_index,
};

//! Name-based filtering of the uplink candidate list.
//!
//! # Design
//!
//! - **Pure Matcher**: [`NameRegexFilter`] only answers "does this adapter
//!   match?" without include/exclude semantics.
//! - **Filter Chain**: [`FilterChain`] combines matchers:
//!   - Exclude filters: AND logic (must pass ALL excludes)
//!   - Include filters: OR logic (pass ANY include, empty = match all)
//!
//! Filtering only narrows what the operator is shown; it never picks an
//! uplink on its own.

use regex::Regex;

use super::AdapterRecord;

/// Trait for filtering network adapters.
pub trait AdapterFilter {
    /// Returns `true` if the adapter matches.
    fn matches(&self, adapter: &AdapterRecord) -> bool;
}

/// Matches adapters whose display name matches a regex.
///
/// # Examples
///
/// ```
/// use hotshare::network::filter::{AdapterFilter, NameRegexFilter};
/// use hotshare::network::{AdapterId, AdapterRecord, ConnectionStatus};
///
/// let filter = NameRegexFilter::new(r"^vEthernet").unwrap();
///
/// let hyperv = AdapterRecord::new(AdapterId::new("a"), "vEthernet (WSL)", ConnectionStatus::Connected);
/// let wifi = AdapterRecord::new(AdapterId::new("b"), "Wi-Fi", ConnectionStatus::Connected);
///
/// assert!(filter.matches(&hyperv));
/// assert!(!filter.matches(&wifi));
/// ```
#[derive(Debug)]
pub struct NameRegexFilter {
    pattern: Regex,
}

impl NameRegexFilter {
    /// Creates a name filter with the given regex pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the regex pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl AdapterFilter for NameRegexFilter {
    fn matches(&self, adapter: &AdapterRecord) -> bool {
        self.pattern.is_match(&adapter.name)
    }
}

/// Filter chain with include/exclude semantics.
///
/// Evaluation order:
/// 1. **Exclude filters (AND)**: Any match → reject.
/// 2. **Include filters (OR)**: Any match → accept. Empty includes = match all.
#[derive(Default)]
pub struct FilterChain {
    includes: Vec<Box<dyn AdapterFilter>>,
    excludes: Vec<Box<dyn AdapterFilter>>,
}

impl FilterChain {
    /// Creates an empty filter chain (matches all adapters).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an include filter (OR semantics).
    #[must_use]
    pub fn include<F: AdapterFilter + 'static>(mut self, filter: F) -> Self {
        self.includes.push(Box::new(filter));
        self
    }

    /// Adds an exclude filter (AND semantics - must not match ANY).
    #[must_use]
    pub fn exclude<F: AdapterFilter + 'static>(mut self, filter: F) -> Self {
        self.excludes.push(Box::new(filter));
        self
    }

    /// Returns the number of include filters.
    #[must_use]
    pub fn include_count(&self) -> usize {
        self.includes.len()
    }

    /// Returns the number of exclude filters.
    #[must_use]
    pub fn exclude_count(&self) -> usize {
        self.excludes.len()
    }

    /// Returns true if no filters are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }

    /// Keeps only the adapters this chain matches, preserving order.
    #[must_use]
    pub fn apply(&self, adapters: Vec<AdapterRecord>) -> Vec<AdapterRecord> {
        adapters.into_iter().filter(|a| self.matches(a)).collect()
    }
}

impl AdapterFilter for FilterChain {
    fn matches(&self, adapter: &AdapterRecord) -> bool {
        if self.excludes.iter().any(|f| f.matches(adapter)) {
            return false;
        }

        self.includes.is_empty() || self.includes.iter().any(|f| f.matches(adapter))
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("include_count", &self.includes.len())
            .field("exclude_count", &self.excludes.len())
            .finish()
    }
}

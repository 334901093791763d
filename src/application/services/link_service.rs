//! Link allocation and resolution service.

use std::sync::Arc;

use crate::domain::LinkStore;

/// The store's public face for HTTP handlers.
///
/// Allocation is allocate-or-reuse: shortening a URL that already has an ID
/// returns the existing one, so repeated submissions never grow the store.
pub struct LinkService {
    store: Arc<LinkStore>,
}

impl LinkService {
    /// Creates a new link service over a shared store.
    pub fn new(store: Arc<LinkStore>) -> Self {
        Self { store }
    }

    /// Resolves a short ID to its long URL.
    pub fn resolve(&self, id: &str) -> Option<String> {
        self.store.lookup(id)
    }

    /// Returns the short ID for `url`, allocating one on first sight.
    ///
    /// The URL is stored verbatim; validating or normalizing it is
    /// deliberately not this service's business.
    pub fn shorten(&self, url: &str) -> String {
        self.store.get_or_create_id(url)
    }

    /// Number of stored links, for health reporting.
    pub fn link_count(&self) -> usize {
        self.store.len()
    }

    /// Whether the store has changes awaiting the next snapshot flush.
    pub fn has_pending_changes(&self) -> bool {
        self.store.is_dirty()
    }
}

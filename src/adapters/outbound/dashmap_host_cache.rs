//! DashMap Host Cache
//!
//! Implements HostCache using DashMap for lock-free concurrent access.

use crate::domain::entities::AddressRecord;
use crate::domain::ports::HostCache;
use dashmap::DashMap;
use std::sync::Arc;

/// DashMap-backed resolved host cache.
///
/// Clones share the same underlying map, so one cache can be handed to
/// every resolver in the process. Entries live until the cache is dropped
/// or explicitly cleared.
#[derive(Clone)]
pub struct DashMapHostCache {
    hosts: Arc<DashMap<String, Vec<AddressRecord>>>,
}

impl DashMapHostCache {
    /// Create a new, empty cache.
    pub fn new() -> Self {
        Self {
            hosts: Arc::new(DashMap::new()),
        }
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.hosts.clear();
    }

    /// Get the underlying DashMap (for advanced use cases).
    pub fn inner(&self) -> &Arc<DashMap<String, Vec<AddressRecord>>> {
        &self.hosts
    }
}

impl Default for DashMapHostCache {
    fn default() -> Self {
        Self::new()
    }
}

impl HostCache for DashMapHostCache {
    fn get(&self, hostname: &str) -> Option<Vec<AddressRecord>> {
        self.hosts.get(hostname).map(|e| e.value().clone())
    }

    fn insert(&self, hostname: &str, records: Vec<AddressRecord>) {
        self.hosts.insert(hostname.to_string(), records);
    }

    fn contains(&self, hostname: &str) -> bool {
        self.hosts.contains_key(hostname)
    }

    fn len(&self) -> usize {
        self.hosts.len()
    }
}

//! Host Cache Port
//!
//! Defines the interface for the resolved host cache shared by resolvers.

use crate::domain::entities::AddressRecord;

/// Mapping from hostname to its most recent successful resolution.
///
/// Entries are never expired by the resolver. Writes replace any
/// previous entry (last writer wins).
pub trait HostCache: Send + Sync {
    /// Get the cached records for a hostname.
    fn get(&self, hostname: &str) -> Option<Vec<AddressRecord>>;

    /// Store the records for a hostname.
    fn insert(&self, hostname: &str, records: Vec<AddressRecord>);

    fn contains(&self, hostname: &str) -> bool {
        self.get(hostname).is_some()
    }

    /// Number of cached hostnames.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

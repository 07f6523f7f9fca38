//! Geolocation Port
//!
//! Defines the interface for looking up the country record of an IP.

use crate::domain::entities::GeoRecord;
use crate::domain::errors::GeoLookupError;

/// Read-only lookup table from IP address to country/continent metadata.
///
/// Implementations may use MaxMind GeoLite2 or any table with the same shape.
pub trait GeoLookup: Send + Sync {
    /// Look up the record for `ip`.
    ///
    /// `Ok(None)` means the address is valid but the table has no entry
    /// for it. Errors cover a malformed table or an unusable key.
    fn lookup(&self, ip: &str) -> Result<Option<GeoRecord>, GeoLookupError>;
}

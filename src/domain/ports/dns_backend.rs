//! DNS Backend Port
//!
//! Defines the interface for the asynchronous name lookup engine.

use crate::domain::entities::{AddressFamily, AddressRecord};
use crate::domain::errors::DnsError;
use async_trait::async_trait;

/// Asynchronous name resolution backend.
///
/// Returned records are in backend order. When `family` is not `Any`
/// only records of that family should be returned.
#[async_trait]
pub trait DnsBackend: Send + Sync {
    async fn resolve(
        &self,
        hostname: &str,
        family: AddressFamily,
    ) -> Result<Vec<AddressRecord>, DnsError>;
}

//! Domain Errors
//!
//! Failures surfaced by the resolver and by its capabilities.

use std::time::Duration;

/// Errors returned to callers of the resolver.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    /// The name lookup failed; not retried and not cached.
    #[error("DNS resolution failed: {0}")]
    DnsResolution(String),

    /// The "what is my IP" request timed out or failed.
    #[error("could not get an external IP: {source}")]
    ExternalIpDiscovery {
        #[source]
        source: IpEchoError,
    },
}

impl From<DnsError> for ResolverError {
    fn from(err: DnsError) -> Self {
        ResolverError::DnsResolution(err.message)
    }
}

impl From<IpEchoError> for ResolverError {
    fn from(source: IpEchoError) -> Self {
        ResolverError::ExternalIpDiscovery { source }
    }
}

/// Failure reported by a DNS backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct DnsError {
    pub message: String,
}

impl DnsError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The two ways a geolocation lookup can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeoLookupError {
    #[error("invalid geolocation database: {0}")]
    InvalidDatabase(String),
    #[error("invalid address for geolocation lookup: {0}")]
    InvalidAddress(String),
}

/// Failure while asking the echo service for our public IP.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IpEchoError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

//! proxy-resolver Library
//!
//! Name resolution support for proxy discovery: hostname resolution with a
//! shared cache, IPv4 literal classification, country geolocation and
//! public IP discovery.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use adapters::outbound::{DashMapHostCache, HickoryDnsBackend, MaxMindGeoLookup, ReqwestIpEcho};
pub use application::{Resolver, ResolverContext};
pub use config::{load_config, Config};
pub use domain::entities::{AddressFamily, AddressFlags, AddressRecord, GeoData, GeoRecord, Protocol};
pub use domain::errors::{DnsError, GeoLookupError, IpEchoError, ResolverError};
pub use domain::ports::{DnsBackend, GeoLookup, HostCache, IpEcho};

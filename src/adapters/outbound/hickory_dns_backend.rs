//! Hickory DNS Backend
//!
//! Implements DnsBackend using the hickory async resolver on tokio.

use crate::domain::entities::{AddressFamily, AddressRecord};
use crate::domain::errors::DnsError;
use crate::domain::ports::DnsBackend;
use async_trait::async_trait;
use hickory_resolver::config::{LookupIpStrategy, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use std::time::Duration;

/// DNS backend backed by `hickory_resolver`.
///
/// Always asks for both A and AAAA records and filters by the requested
/// family, so a single resolver instance serves every family.
pub struct HickoryDnsBackend {
    resolver: TokioAsyncResolver,
}

impl HickoryDnsBackend {
    /// Build a backend with the given upstream configuration.
    pub fn new(config: ResolverConfig, timeout: Duration) -> Self {
        let opts = Self::options(ResolverOpts::default(), timeout);
        let resolver = TokioAsyncResolver::tokio(config, opts);
        Self { resolver }
    }

    /// Build a backend from the host's resolv.conf (or platform equivalent).
    pub fn from_system_conf(timeout: Duration) -> anyhow::Result<Self> {
        let (config, opts) = hickory_resolver::system_conf::read_system_conf()?;
        let resolver = TokioAsyncResolver::tokio(config, Self::options(opts, timeout));
        Ok(Self { resolver })
    }

    fn options(mut opts: ResolverOpts, timeout: Duration) -> ResolverOpts {
        if !timeout.is_zero() {
            opts.timeout = timeout;
        }
        opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
        opts
    }
}

#[async_trait]
impl DnsBackend for HickoryDnsBackend {
    async fn resolve(
        &self,
        hostname: &str,
        family: AddressFamily,
    ) -> Result<Vec<AddressRecord>, DnsError> {
        let lookup = self
            .resolver
            .lookup_ip(hostname)
            .await
            .map_err(|e| DnsError::new(format!("{}: {}", hostname, e)))?;

        let records: Vec<AddressRecord> = lookup
            .iter()
            .filter(|ip| family.matches(*ip))
            .map(|ip| AddressRecord::resolved(hostname, ip))
            .collect();

        if records.is_empty() {
            return Err(DnsError::new(format!(
                "{}: no {:?} addresses found",
                hostname, family
            )));
        }

        Ok(records)
    }
}

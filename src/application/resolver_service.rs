//! Resolver Service - Main application use case
//!
//! Turns hostnames into addresses (with a shared cache), attaches country
//! geolocation to addresses, and discovers our own public IP.

use crate::adapters::outbound::{
    DashMapHostCache, HickoryDnsBackend, MaxMindGeoLookup, ReqwestIpEcho,
};
use crate::config::Config;
use crate::domain::entities::{AddressFamily, AddressRecord, GeoData};
use crate::domain::errors::{IpEchoError, ResolverError};
use crate::domain::ports::{DnsBackend, GeoLookup, HostCache, IpEcho};
use crate::domain::services::{host_is_ip, looks_like_ipv4, parse_dotted_quad};
use hickory_resolver::config::ResolverConfig;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

/// Process-wide capabilities shared by every resolver.
///
/// Holds the DNS backend, the geolocation table, the echo client and the
/// resolved host cache. Build it once and hand out cheap `Resolver`s.
#[derive(Clone)]
pub struct ResolverContext {
    dns: Arc<dyn DnsBackend>,
    geo: Option<Arc<dyn GeoLookup>>,
    ip_echo: Arc<dyn IpEcho>,
    cache: Arc<dyn HostCache>,
}

impl ResolverContext {
    /// Create a context from explicit capabilities.
    pub fn new(
        dns: Arc<dyn DnsBackend>,
        geo: Option<Arc<dyn GeoLookup>>,
        ip_echo: Arc<dyn IpEcho>,
        cache: Arc<dyn HostCache>,
    ) -> Self {
        Self {
            dns,
            geo,
            ip_echo,
            cache,
        }
    }

    /// Wire the standard adapters from configuration.
    ///
    /// A missing or corrupt geolocation database is logged and tolerated;
    /// every lookup then degrades to the unknown sentinel.
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let timeout = cfg.timeout();

        let dns = match HickoryDnsBackend::from_system_conf(timeout) {
            Ok(backend) => backend,
            Err(e) => {
                tracing::warn!("failed to read system DNS config, using defaults: {:?}", e);
                HickoryDnsBackend::new(ResolverConfig::default(), timeout)
            }
        };

        let geo = match MaxMindGeoLookup::from_file(&cfg.geoip_path) {
            Ok(g) => {
                tracing::info!("GeoIP DB loaded from {}", cfg.geoip_path);
                Some(Arc::new(g) as Arc<dyn GeoLookup>)
            }
            Err(e) => {
                tracing::error!("failed to load GeoIP DB from {}: {:?}", cfg.geoip_path, e);
                None
            }
        };

        let ip_echo = ReqwestIpEcho::new(cfg.ext_ip_url.clone())?;

        Ok(Self::new(
            Arc::new(dns),
            geo,
            Arc::new(ip_echo),
            Arc::new(DashMapHostCache::new()),
        ))
    }

    /// Create a resolver bound to this context.
    pub fn resolver(&self, timeout: Duration) -> Resolver {
        Resolver::new(self, timeout)
    }

    /// The shared resolved host cache.
    pub fn cache(&self) -> &Arc<dyn HostCache> {
        &self.cache
    }
}

/// Per-use-site resolver handle.
///
/// Only stores a timeout next to the shared capabilities; creating and
/// dropping one performs no I/O.
#[derive(Clone)]
pub struct Resolver {
    timeout: Duration,
    dns: Arc<dyn DnsBackend>,
    geo: Option<Arc<dyn GeoLookup>>,
    ip_echo: Arc<dyn IpEcho>,
    cache: Arc<dyn HostCache>,
}

impl Resolver {
    /// Create a resolver sharing `ctx`'s capabilities.
    ///
    /// `timeout` bounds the backend lookup in `resolve` and the request in
    /// `get_real_ext_ip`. A zero timeout fails anything that is not ready
    /// on first poll.
    pub fn new(ctx: &ResolverContext, timeout: Duration) -> Self {
        Self {
            timeout,
            dns: ctx.dns.clone(),
            geo: ctx.geo.clone(),
            ip_echo: ctx.ip_echo.clone(),
            cache: ctx.cache.clone(),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Check whether `host` is a literal IPv4 address.
    pub fn host_is_ip(host: &str) -> bool {
        host_is_ip(host)
    }

    /// Return the country (or continent) of an IP address.
    ///
    /// Never fails: lookups that error out or find nothing yield
    /// `GeoData::unknown()`.
    pub fn get_ip_info(&self, ip: &str) -> GeoData {
        let Some(geo) = &self.geo else {
            return GeoData::unknown();
        };

        let record = match geo.lookup(ip) {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!("geo lookup for {} failed: {}", ip, e);
                None
            }
        };

        record
            .and_then(|r| r.to_geo_data())
            .unwrap_or_else(GeoData::unknown)
    }

    /// Resolve `hostname` to its address records.
    ///
    /// IPv4 literals are answered locally. Other names are served from the
    /// shared cache, or looked up through the DNS backend and cached on
    /// success. Failures are never cached. A family-constrained lookup
    /// replaces only that family's records in the cached entry.
    pub async fn resolve(
        &self,
        hostname: &str,
        family: AddressFamily,
    ) -> Result<Vec<AddressRecord>, ResolverError> {
        if host_is_ip(hostname) {
            return self.resolve_numeric(hostname, family);
        }

        if looks_like_ipv4(hostname) {
            return Err(ResolverError::DnsResolution(format!(
                "{}: invalid IPv4 address",
                hostname
            )));
        }

        if let Some(cached) = self.cache.get(hostname) {
            let records = filter_family(cached, family);
            if !records.is_empty() {
                tracing::debug!("cache hit for {} ({} records)", hostname, records.len());
                return Ok(records);
            }
        }

        tracing::debug!("cache miss for {}, querying backend", hostname);

        let records = match tokio::time::timeout(self.timeout, self.dns.resolve(hostname, family))
            .await
        {
            Ok(Ok(records)) => records,
            Ok(Err(e)) => {
                tracing::warn!("DNS lookup for {} failed: {}", hostname, e);
                return Err(e.into());
            }
            Err(_) => {
                tracing::warn!("DNS lookup for {} timed out after {:?}", hostname, self.timeout);
                return Err(ResolverError::DnsResolution(format!(
                    "{}: timed out after {:?}",
                    hostname, self.timeout
                )));
            }
        };

        let previous = self.cache.get(hostname);
        self.cache
            .insert(hostname, merge_family(previous, &records, family));
        Ok(records)
    }

    /// Like `resolve`, with `port` stamped on every returned record.
    pub async fn resolve_with_port(
        &self,
        hostname: &str,
        port: u16,
        family: AddressFamily,
    ) -> Result<Vec<AddressRecord>, ResolverError> {
        let records = self.resolve(hostname, family).await?;
        Ok(records.into_iter().map(|r| r.with_port(port)).collect())
    }

    /// Ask the echo service for our public IP address.
    ///
    /// When the request crossed proxies the service reports a list; the
    /// first entry is ours. The result is not cached.
    pub async fn get_real_ext_ip(&self) -> Result<String, ResolverError> {
        let origin = match tokio::time::timeout(self.timeout, self.ip_echo.fetch_origin(self.timeout))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(IpEchoError::Timeout(self.timeout)),
        }
        .map_err(|e| {
            tracing::warn!("could not get external IP: {}", e);
            ResolverError::from(e)
        })?;

        let ip = first_origin(&origin).ok_or_else(|| {
            ResolverError::from(IpEchoError::MalformedBody(format!(
                "empty origin: {:?}",
                origin
            )))
        })?;

        tracing::debug!("real external IP: {}", ip);
        Ok(ip.to_string())
    }

    fn resolve_numeric(
        &self,
        hostname: &str,
        family: AddressFamily,
    ) -> Result<Vec<AddressRecord>, ResolverError> {
        let ip = parse_dotted_quad(hostname)
            .map(IpAddr::V4)
            .ok_or_else(|| ResolverError::DnsResolution(format!("{}: invalid address", hostname)))?;

        if !family.matches(ip) {
            return Err(ResolverError::DnsResolution(format!(
                "{}: not an {:?} address",
                hostname, family
            )));
        }

        tracing::debug!("{} is a numeric host, skipping lookup", hostname);
        Ok(vec![AddressRecord::numeric(hostname, ip)])
    }
}

/// Keep the records whose address satisfies `family`.
fn filter_family(records: Vec<AddressRecord>, family: AddressFamily) -> Vec<AddressRecord> {
    if family == AddressFamily::Any {
        return records;
    }
    records
        .into_iter()
        .filter(|r| r.ip().is_some_and(|ip| family.matches(ip)))
        .collect()
}

/// Cache entry after a lookup for `family` returned `fresh`.
///
/// Records of other families already cached for the host are kept ahead
/// of the fresh ones.
fn merge_family(
    previous: Option<Vec<AddressRecord>>,
    fresh: &[AddressRecord],
    family: AddressFamily,
) -> Vec<AddressRecord> {
    match previous {
        Some(previous) if family != AddressFamily::Any => previous
            .into_iter()
            .filter(|r| !r.ip().is_some_and(|ip| family.matches(ip)))
            .chain(fresh.iter().cloned())
            .collect(),
        _ => fresh.to_vec(),
    }
}

/// First entry of an `origin` value such as `"1.2.3.4, 5.6.7.8"`.
fn first_origin(origin: &str) -> Option<&str> {
    origin
        .split(',')
        .next()
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
}

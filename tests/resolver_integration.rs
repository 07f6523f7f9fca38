//! Integration tests for the resolver with the real adapters
//!
//! Tests that need the packaged GeoLite2 database are `#[ignore]`d.

use hickory_resolver::config::ResolverConfig;
use proxy_resolver::{
    AddressFamily, Config, DashMapHostCache, GeoData, HickoryDnsBackend, HostCache,
    MaxMindGeoLookup, ReqwestIpEcho, Resolver, ResolverContext, ResolverError,
};
use std::sync::Arc;
use std::time::Duration;

fn context(geo: Option<MaxMindGeoLookup>) -> ResolverContext {
    ResolverContext::new(
        Arc::new(HickoryDnsBackend::new(ResolverConfig::default(), Duration::from_secs(1))),
        geo.map(|g| Arc::new(g) as Arc<dyn proxy_resolver::GeoLookup>),
        Arc::new(ReqwestIpEcho::new("http://127.0.0.1:1/ip").unwrap()),
        Arc::new(DashMapHostCache::new()),
    )
}

fn packaged_geo() -> MaxMindGeoLookup {
    MaxMindGeoLookup::from_file(&Config::default().geoip_path).unwrap()
}

#[test]
fn test_host_is_ip() {
    assert!(Resolver::host_is_ip("127.0.0.1"));
    assert!(!Resolver::host_is_ip("256.0.0.1"));
    assert!(!Resolver::host_is_ip("test.com"));
}

#[test]
#[ignore = "needs data/GeoLite2-Country.mmdb"]
fn test_get_ip_info_with_packaged_database() {
    let geo = packaged_geo();
    let rs = context(Some(geo)).resolver(Duration::from_millis(100));

    assert_eq!(rs.get_ip_info("test.com"), GeoData::new("--", "Unknown"));
    assert_eq!(rs.get_ip_info("127.0.0.1"), GeoData::new("--", "Unknown"));
    assert_eq!(rs.get_ip_info("8.8.8.8"), GeoData::new("US", "United States"));
}

#[test]
fn test_get_ip_info_without_database() {
    let rs = context(None).resolver(Duration::from_millis(100));
    assert_eq!(rs.get_ip_info("8.8.8.8"), GeoData::unknown());
}

#[tokio::test]
async fn test_resolve_literal() {
    let ctx = context(None);
    let rs = ctx.resolver(Duration::from_millis(100));

    let records = rs.resolve("127.0.0.1", AddressFamily::Any).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].host, "127.0.0.1");
    assert!(ctx.cache().is_empty());
}

#[tokio::test]
async fn test_resolve_invalid_literal() {
    let rs = context(None).resolver(Duration::from_millis(100));

    let result = rs.resolve("256.0.0.1", AddressFamily::Any).await;
    assert!(matches!(result, Err(ResolverError::DnsResolution(_))));
}

#[tokio::test]
async fn test_from_config_with_missing_database() {
    let cfg = Config {
        geoip_path: "/nonexistent/GeoLite2-Country.mmdb".to_string(),
        ..Config::default()
    };
    let ctx = ResolverContext::from_config(&cfg).unwrap();
    let rs = ctx.resolver(cfg.timeout());

    assert_eq!(rs.timeout(), Duration::from_secs(5));
    assert_eq!(rs.get_ip_info("8.8.8.8"), GeoData::unknown());
}

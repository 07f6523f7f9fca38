mod dashmap_host_cache;
mod hickory_dns_backend;
mod maxmind_geo_lookup;
mod reqwest_ip_echo;

pub use dashmap_host_cache::DashMapHostCache;
pub use hickory_dns_backend::HickoryDnsBackend;
pub use maxmind_geo_lookup::{MaxMindGeoLookup, DEFAULT_GEOIP_PATH};
pub use reqwest_ip_echo::{ReqwestIpEcho, DEFAULT_EXT_IP_URL};

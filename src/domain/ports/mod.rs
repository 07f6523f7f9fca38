mod dns_backend;
mod geo_lookup;
mod host_cache;
mod ip_echo;

pub use dns_backend::DnsBackend;
pub use geo_lookup::GeoLookup;
pub use host_cache::HostCache;
pub use ip_echo::IpEcho;

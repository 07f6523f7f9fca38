use crate::adapters::outbound::{DEFAULT_EXT_IP_URL, DEFAULT_GEOIP_PATH};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Bound on DNS lookups and the external IP request
    pub timeout_ms: u64,
    /// Packaged GeoLite2-Country database
    pub geoip_path: String,
    /// "What is my IP" endpoint returning `{"origin": ...}`
    pub ext_ip_url: String,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_ms: 5000,
            geoip_path: DEFAULT_GEOIP_PATH.to_string(),
            ext_ip_url: DEFAULT_EXT_IP_URL.to_string(),
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let timeout_ms = std::env::var("PROXYBROKER_TIMEOUT_MS")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()
        .unwrap_or(5000);

    let geoip_path = std::env::var("PROXYBROKER_GEOIP_PATH")
        .unwrap_or_else(|_| DEFAULT_GEOIP_PATH.to_string());

    let ext_ip_url = std::env::var("PROXYBROKER_EXT_IP_URL")
        .unwrap_or_else(|_| DEFAULT_EXT_IP_URL.to_string());

    Ok(Config {
        timeout_ms,
        geoip_path,
        ext_ip_url,
    })
}

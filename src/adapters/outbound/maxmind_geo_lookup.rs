//! MaxMind Geolocation Lookup
//!
//! Implements GeoLookup using a MaxMind GeoLite2-Country database.

use crate::domain::entities::GeoRecord;
use crate::domain::errors::GeoLookupError;
use crate::domain::ports::GeoLookup;
use maxminddb::{MaxMindDBError, Reader};
use std::net::IpAddr;
use std::sync::Arc;

/// Default location of the packaged country database.
pub const DEFAULT_GEOIP_PATH: &str = "data/GeoLite2-Country.mmdb";

/// MaxMind country lookup table.
///
/// Opened once and shared read-only; cloning only bumps the reader's
/// reference count.
#[derive(Clone)]
pub struct MaxMindGeoLookup {
    reader: Arc<Reader<Vec<u8>>>,
}

impl MaxMindGeoLookup {
    /// Load a GeoIP database from a file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let reader = Reader::open_readfile(path)?;
        Ok(Self {
            reader: Arc::new(reader),
        })
    }

    /// Load a GeoIP database already read into memory.
    pub fn from_bytes(buf: Vec<u8>) -> anyhow::Result<Self> {
        let reader = Reader::from_source(buf)?;
        Ok(Self {
            reader: Arc::new(reader),
        })
    }
}

impl GeoLookup for MaxMindGeoLookup {
    fn lookup(&self, ip: &str) -> Result<Option<GeoRecord>, GeoLookupError> {
        let addr: IpAddr = ip
            .parse()
            .map_err(|_| GeoLookupError::InvalidAddress(ip.to_string()))?;

        match self.reader.lookup::<GeoRecord>(addr) {
            Ok(record) => Ok(Some(record)),
            Err(MaxMindDBError::AddressNotFoundError(_)) => Ok(None),
            Err(e) => Err(GeoLookupError::InvalidDatabase(e.to_string())),
        }
    }
}

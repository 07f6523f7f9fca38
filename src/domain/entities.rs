//! Domain Entities - Core resolution objects
//!
//! These entities describe what the resolver hands back to callers.
//! They have no external dependencies beyond serde.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::net::IpAddr;

/// Country-level geolocation of an IP address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeoData {
    /// ISO 3166-1 alpha-2 code, a continent code, or `--`
    pub code: String,
    /// English name of the country or continent, or `Unknown`
    pub name: String,
}

impl GeoData {
    pub const UNKNOWN_CODE: &'static str = "--";
    pub const UNKNOWN_NAME: &'static str = "Unknown";

    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// The sentinel returned when no geolocation data is available.
    pub fn unknown() -> Self {
        Self::new(Self::UNKNOWN_CODE, Self::UNKNOWN_NAME)
    }

    pub fn is_unknown(&self) -> bool {
        self.code == Self::UNKNOWN_CODE
    }
}

impl fmt::Display for GeoData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Address family requested from (or reported by) a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AddressFamily {
    /// No constraint
    #[default]
    Any,
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    /// Family of a concrete address.
    pub fn of(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => AddressFamily::Ipv4,
            IpAddr::V6(_) => AddressFamily::Ipv6,
        }
    }

    /// Whether an address satisfies this family constraint.
    pub fn matches(&self, ip: IpAddr) -> bool {
        match self {
            AddressFamily::Any => true,
            AddressFamily::Ipv4 => ip.is_ipv4(),
            AddressFamily::Ipv6 => ip.is_ipv6(),
        }
    }
}

/// Transport protocol of an address record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Protocol {
    /// Unspecified (IPPROTO_IP)
    #[default]
    Ip,
    Tcp,
    Udp,
}

/// getaddrinfo-style flags attached to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AddressFlags(u32);

impl AddressFlags {
    pub const NONE: AddressFlags = AddressFlags(0);
    /// `host` is a numeric address; no name lookup is needed to use it.
    pub const NUMERIC_HOST: AddressFlags = AddressFlags(0x0004);
    /// `port` is numeric.
    pub const NUMERIC_SERV: AddressFlags = AddressFlags(0x0400);

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn contains(&self, other: AddressFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for AddressFlags {
    type Output = AddressFlags;

    fn bitor(self, rhs: AddressFlags) -> AddressFlags {
        AddressFlags(self.0 | rhs.0)
    }
}

/// One resolved address for a queried hostname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Hostname that was queried
    pub hostname: String,
    /// Resolved IP literal
    pub host: String,
    pub port: u16,
    pub family: AddressFamily,
    pub proto: Protocol,
    pub flags: AddressFlags,
}

impl AddressRecord {
    /// Build a record for an address returned by a name lookup.
    pub fn resolved(hostname: impl Into<String>, ip: IpAddr) -> Self {
        Self {
            hostname: hostname.into(),
            host: ip.to_string(),
            port: 0,
            family: AddressFamily::of(ip),
            proto: Protocol::Ip,
            flags: AddressFlags::NUMERIC_HOST,
        }
    }

    /// Build a record for a host that was already a literal address.
    pub fn numeric(hostname: impl Into<String>, ip: IpAddr) -> Self {
        Self {
            hostname: hostname.into(),
            host: ip.to_string(),
            port: 0,
            family: AddressFamily::of(ip),
            proto: Protocol::Ip,
            flags: AddressFlags::NUMERIC_HOST | AddressFlags::NUMERIC_SERV,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Parsed form of `host`, if it is a valid address.
    pub fn ip(&self) -> Option<IpAddr> {
        self.host.parse().ok()
    }
}

/// A named place in a geolocation record (country or continent).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeoPlace {
    /// `iso_code` for countries
    #[serde(default)]
    pub iso_code: Option<String>,
    /// `code` for continents
    #[serde(default)]
    pub code: Option<String>,
    /// Localised names keyed by language (`en`, `de`, ...)
    #[serde(default)]
    pub names: BTreeMap<String, String>,
}

impl GeoPlace {
    pub fn english_name(&self) -> Option<&str> {
        self.names.get("en").map(String::as_str)
    }
}

/// Raw record returned by the geolocation table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeoRecord {
    #[serde(default)]
    pub country: Option<GeoPlace>,
    #[serde(default)]
    pub continent: Option<GeoPlace>,
}

impl GeoRecord {
    /// Reduce the record to a `GeoData`, preferring country over continent.
    ///
    /// Returns `None` when neither level carries a code and an English name.
    pub fn to_geo_data(&self) -> Option<GeoData> {
        let country = self.country.as_ref().and_then(|c| {
            Some(GeoData::new(c.iso_code.as_deref()?, c.english_name()?))
        });
        country.or_else(|| {
            self.continent
                .as_ref()
                .and_then(|c| Some(GeoData::new(c.code.as_deref()?, c.english_name()?)))
        })
    }
}

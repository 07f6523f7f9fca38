//! Host Classifier
//!
//! The single numeric-host predicate shared by the classifier API and the
//! resolution fast path.

use std::net::Ipv4Addr;

/// Parse a dotted-quad IPv4 literal.
///
/// Exactly four groups of one to three ASCII digits, each in `[0, 255]`.
/// Leading zeros are decimal (`010` is 10), unlike `Ipv4Addr::from_str`.
pub fn parse_dotted_quad(host: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut groups = host.split('.');

    for octet in octets.iter_mut() {
        let part = groups.next()?;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *octet = part.parse().ok()?;
    }

    if groups.next().is_some() {
        return None;
    }
    Some(Ipv4Addr::from(octets))
}

/// Check whether `host` is a literal IPv4 dotted-quad address.
///
/// IPv6 literals are not recognised here.
pub fn host_is_ip(host: &str) -> bool {
    parse_dotted_quad(host).is_some()
}

/// Check whether `host` has the shape of a dotted quad (four groups of
/// one to three digits), whether or not each octet is in range.
///
/// Used to reject strings like `256.0.0.1` before they reach DNS.
pub fn looks_like_ipv4(host: &str) -> bool {
    let mut groups = 0;
    for part in host.split('.') {
        groups += 1;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }
    groups == 4
}

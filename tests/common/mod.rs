//! Test fixtures shared by the integration tests.
//!
//! `MmdbBuilder` writes a small IPv4 MaxMind DB (24-bit records) so the
//! real `maxminddb::Reader` decoding path runs without the packaged file.

#![allow(dead_code)]

use serde_json::Value;
use std::net::Ipv4Addr;

const METADATA_MARKER: &[u8] = b"\xab\xcd\xefMaxMind.com";

#[derive(Clone, Copy)]
enum Slot {
    Empty,
    Node(usize),
    Data(usize),
}

/// Builder for an IPv4 country-shaped MaxMind DB.
pub struct MmdbBuilder {
    nodes: Vec<[Slot; 2]>,
    data: Vec<u8>,
}

impl MmdbBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![[Slot::Empty, Slot::Empty]],
            data: Vec::new(),
        }
    }

    /// Map `network/prefix_len` to `record`. Networks must not overlap.
    pub fn insert(mut self, network: Ipv4Addr, prefix_len: u8, record: Value) -> Self {
        assert!((1..=32).contains(&prefix_len));

        let offset = self.data.len();
        encode(&record, &mut self.data);

        let bits = u32::from(network);
        let mut node = 0;
        for i in 0..prefix_len {
            let bit = ((bits >> (31 - i)) & 1) as usize;
            if i + 1 == prefix_len {
                self.nodes[node][bit] = Slot::Data(offset);
                break;
            }
            node = match self.nodes[node][bit] {
                Slot::Node(next) => next,
                Slot::Empty => {
                    self.nodes.push([Slot::Empty, Slot::Empty]);
                    let next = self.nodes.len() - 1;
                    self.nodes[node][bit] = Slot::Node(next);
                    next
                }
                Slot::Data(_) => panic!("overlapping networks"),
            };
        }
        self
    }

    pub fn build(self) -> Vec<u8> {
        let node_count = self.nodes.len();
        let mut buf = Vec::new();

        for node in &self.nodes {
            for slot in node {
                let value = match *slot {
                    Slot::Empty => node_count,
                    Slot::Node(next) => next,
                    Slot::Data(offset) => node_count + 16 + offset,
                };
                buf.extend_from_slice(&(value as u32).to_be_bytes()[1..]);
            }
        }

        buf.extend_from_slice(&[0u8; 16]);
        buf.extend_from_slice(&self.data);
        buf.extend_from_slice(METADATA_MARKER);
        encode(
            &serde_json::json!({
                "binary_format_major_version": 2,
                "binary_format_minor_version": 0,
                "build_epoch": 1_700_000_000u64,
                "database_type": "GeoLite2-Country",
                "description": {"en": "country fixture"},
                "ip_version": 4,
                "languages": ["en"],
                "node_count": node_count,
                "record_size": 24
            }),
            &mut buf,
        );
        buf
    }
}

impl Default for MmdbBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Country fixture: a full US record, a continent-only block and a record
/// whose `country` has the wrong shape.
pub fn country_fixture() -> Vec<u8> {
    MmdbBuilder::new()
        .insert(
            Ipv4Addr::new(8, 8, 8, 8),
            32,
            serde_json::json!({
                "continent": {
                    "code": "NA",
                    "geoname_id": 6255149,
                    "names": {"en": "North America", "de": "Nordamerika"}
                },
                "country": {
                    "geoname_id": 6252001,
                    "iso_code": "US",
                    "names": {"en": "United States", "es": "Estados Unidos"}
                },
                "registered_country": {
                    "geoname_id": 6252001,
                    "iso_code": "US",
                    "names": {"en": "United States"}
                }
            }),
        )
        .insert(
            Ipv4Addr::new(2, 0, 0, 0),
            8,
            serde_json::json!({
                "continent": {
                    "code": "EU",
                    "geoname_id": 6255148,
                    "names": {"en": "Europe"}
                }
            }),
        )
        .insert(
            Ipv4Addr::new(81, 2, 69, 160),
            32,
            serde_json::json!({
                "continent": {"code": "EU", "names": {"en": "Europe"}},
                "country": {
                    "is_in_european_union": false,
                    "iso_code": "GB",
                    "names": {"en": "United Kingdom"}
                }
            }),
        )
        .insert(
            Ipv4Addr::new(9, 9, 9, 9),
            32,
            serde_json::json!({"country": true}),
        )
        .build()
}

fn encode(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::String(s) => {
            write_ctrl(out, 2, s.len());
            out.extend_from_slice(s.as_bytes());
        }
        Value::Number(n) => {
            let n = n.as_u64().expect("fixture numbers are unsigned");
            let bytes = n.to_be_bytes();
            let skip = bytes.iter().take_while(|b| **b == 0).count();
            let payload = &bytes[skip..];
            if n <= u32::MAX as u64 {
                write_ctrl(out, 6, payload.len());
            } else {
                write_ctrl(out, 9, payload.len());
            }
            out.extend_from_slice(payload);
        }
        Value::Bool(b) => write_ctrl(out, 14, *b as usize),
        Value::Array(items) => {
            write_ctrl(out, 11, items.len());
            for item in items {
                encode(item, out);
            }
        }
        Value::Object(map) => {
            write_ctrl(out, 7, map.len());
            for (key, item) in map {
                write_ctrl(out, 2, key.len());
                out.extend_from_slice(key.as_bytes());
                encode(item, out);
            }
        }
        Value::Null => panic!("null has no MaxMind DB encoding"),
    }
}

/// Control byte, extended type byte and size bytes for a field.
fn write_ctrl(out: &mut Vec<u8>, type_num: u8, size: usize) {
    let (marker, extra): (u8, Vec<u8>) = if size < 29 {
        (size as u8, Vec::new())
    } else if size < 285 {
        (29, vec![(size - 29) as u8])
    } else if size < 65_821 {
        (30, ((size - 285) as u16).to_be_bytes().to_vec())
    } else {
        (31, ((size - 65_821) as u32).to_be_bytes()[1..].to_vec())
    };

    if type_num <= 7 {
        out.push((type_num << 5) | marker);
    } else {
        out.push(marker);
        out.push(type_num - 7);
    }
    out.extend_from_slice(&extra);
}

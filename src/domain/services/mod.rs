pub mod host_classifier;

pub use host_classifier::{host_is_ip, looks_like_ipv4, parse_dotted_quad};

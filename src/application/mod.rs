//! Application Layer
//!
//! Use cases composed from domain ports.

pub mod resolver_service;

pub use resolver_service::{Resolver, ResolverContext};

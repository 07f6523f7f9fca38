//! IP Echo Port
//!
//! Defines the interface for asking an external service which address
//! our requests come from.

use crate::domain::errors::IpEchoError;
use async_trait::async_trait;
use std::time::Duration;

/// Client for a "what is my IP" endpoint.
#[async_trait]
pub trait IpEcho: Send + Sync {
    /// Fetch the raw `origin` value reported by the service.
    ///
    /// This may be a comma separated list when the request went through
    /// proxies. The request must give up after `timeout`.
    async fn fetch_origin(&self, timeout: Duration) -> Result<String, IpEchoError>;
}

//! Reqwest IP Echo Client
//!
//! Implements IpEcho with a plain HTTP GET against an httpbin-style
//! `/ip` endpoint returning `{"origin": "..."}`.

use crate::domain::errors::IpEchoError;
use crate::domain::ports::IpEcho;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Default echo endpoint.
pub const DEFAULT_EXT_IP_URL: &str = "http://httpbin.org/ip";

#[derive(Debug, Deserialize)]
struct OriginBody {
    origin: String,
}

/// HTTP client for the external IP echo service.
pub struct ReqwestIpEcho {
    client: reqwest::Client,
    url: String,
}

impl ReqwestIpEcho {
    /// Create a client for the given echo URL.
    pub fn new(url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn classify(err: reqwest::Error, timeout: Duration) -> IpEchoError {
        if err.is_timeout() {
            IpEchoError::Timeout(timeout)
        } else {
            IpEchoError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl IpEcho for ReqwestIpEcho {
    async fn fetch_origin(&self, timeout: Duration) -> Result<String, IpEchoError> {
        let resp = self
            .client
            .get(&self.url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| Self::classify(e, timeout))?;

        if !resp.status().is_success() {
            return Err(IpEchoError::Transport(format!(
                "unexpected status: {}",
                resp.status()
            )));
        }

        let body = resp.bytes().await.map_err(|e| Self::classify(e, timeout))?;
        let parsed: OriginBody =
            serde_json::from_slice(&body).map_err(|e| IpEchoError::MalformedBody(e.to_string()))?;

        Ok(parsed.origin)
    }
}

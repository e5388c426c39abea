// Transport configuration for building the gateway's reqwest::Client.
//
// Base URL, timeout, and default headers live here so the client itself
// stays a thin request/response wrapper. Construction is explicit: callers
// build a TransportConfig and hand it in, there is no ambient base URL.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use url::Url;

use crate::error::Error;

/// Configuration for the HTTP transport behind [`GatewayClient`].
///
/// [`GatewayClient`]: crate::GatewayClient
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Backend API root, e.g. `http://127.0.0.1:5000/api`.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Extra default headers merged over the built-ins.
    pub extra_headers: HeaderMap,
}

impl TransportConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(30),
            extra_headers: HeaderMap::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a `reqwest::Client` from this config.
    ///
    /// Applies `Content-Type: application/json` as a default header;
    /// per-call headers override it.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &self.extra_headers {
            headers.insert(name.clone(), value.clone());
        }

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("leadwire/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(client)
    }
}

// Gateway HTTP client
//
// Wraps `reqwest::Client` with backend-specific URL construction and
// error normalization. All endpoint modules (numbers, leads, chat, etc.)
// are implemented as inherent methods via separate files to keep this
// module focused on transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Truncation limit for error bodies carried in [`Error::Http`].
const ERROR_BODY_LIMIT: usize = 512;

/// Raw HTTP client for the Leadwire backend's JSON API.
///
/// Stateless beyond the connection pool: owns URL construction, default
/// headers, and error normalization. Any non-2xx response is a failure --
/// error bodies are never passed through as success. Retry policy belongs
/// to callers.
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GatewayClient {
    /// Create a new gateway client from a [`TransportConfig`].
    pub fn new(transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: transport.base_url.clone(),
        })
    }

    /// Create a gateway client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The backend API root.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for an API path.
    ///
    /// `path` must start with `/`; the base URL's own path (e.g. `/api`)
    /// is preserved, which `Url::join` would clobber.
    pub(crate) fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.endpoint_url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::decode(resp).await
    }

    /// Send a POST request with a JSON body and decode the response.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, Error> {
        let url = self.endpoint_url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        Self::decode(resp).await
    }

    /// Send a bodyless POST request and decode the response.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.endpoint_url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).send().await?;
        Self::decode(resp).await
    }

    /// Check the HTTP status and decode the body.
    ///
    /// Non-2xx responses become [`Error::Http`], with the backend's
    /// `{"error": ...}` field extracted when present.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}

/// Pull the `error` field out of a failure body, falling back to the
/// (truncated) raw text.
fn extract_error_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }

    let mut message = body.trim().to_owned();
    if message.len() > ERROR_BODY_LIMIT {
        message.truncate(ERROR_BODY_LIMIT);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_error_message_prefers_error_field() {
        let body = r#"{"error": "Doctor not found"}"#;
        assert_eq!(extract_error_message(body), "Doctor not found");
    }

    #[test]
    fn extract_error_message_falls_back_to_raw_body() {
        assert_eq!(extract_error_message("  Forbidden  "), "Forbidden");
    }

    #[test]
    fn endpoint_url_preserves_base_path() {
        let client = GatewayClient::with_client(
            reqwest::Client::new(),
            "http://127.0.0.1:5000/api".parse().expect("valid URL"),
        );
        let url = client.endpoint_url("/chat/7/messages").expect("valid path");
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/chat/7/messages");
    }
}

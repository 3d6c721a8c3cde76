use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Method, Proxy};
use std::env;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Remote host used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.wit.ai";

/// Shared HTTP handle for one client instance.
///
/// Authorization and accept headers are fixed at construction; every request sent
/// through this transport carries them. The underlying `reqwest::Client` is
/// connection-pooled and safe to use from concurrent tasks.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(access_token: &str, base_url_override: Option<&str>) -> Result<Self> {
        let base = base_url_override.unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(base).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL '{}': {}", base, e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_source("http_transport"),
            )
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::configuration_with_context(
                format!("Base URL '{}' cannot carry path segments", base),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_source("http_transport"),
            ));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", access_token.trim()))
            .map_err(|e| {
                Error::configuration_with_context(
                    format!("Access token is not a valid header value: {}", e),
                    ErrorContext::new()
                        .with_field_path("config.access_token")
                        .with_source("http_transport"),
                )
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        // Pool defaults are env-overridable; no request timeout is imposed here.
        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .pool_max_idle_per_host(
                env::var("WIT_HTTP_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(32),
            )
            .pool_idle_timeout(Some(Duration::from_secs(
                env::var("WIT_HTTP_POOL_IDLE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(90),
            )));

        if let Ok(proxy_url) = env::var("WIT_PROXY_URL") {
            if let Ok(proxy) = Proxy::all(&proxy_url) {
                builder = builder.proxy(proxy);
            }
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve path segments against the base URL. Segments are percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                Error::configuration_with_context(
                    "Base URL cannot carry path segments",
                    ErrorContext::new().with_source("http_transport"),
                )
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Send a single request. Non-success statuses are returned as responses, not errors.
    pub async fn send(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<reqwest::Response> {
        let url = self.endpoint(segments)?;
        debug!(method = %method, path = url.path(), "sending wit request");

        let mut request = self.client.request(method, url).query(query);
        if let Some(body) = body {
            request = request.json(body);
        }

        request
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

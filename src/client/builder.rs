use crate::client::config::ClientConfig;
use crate::client::core::WitClient;
use crate::logging::{LogSink, Reporter, Severity};
use crate::transport::HttpTransport;
use crate::Result;
use std::sync::Arc;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable.
pub struct WitClientBuilder {
    config: ClientConfig,
    sinks: Vec<Arc<dyn LogSink>>,
    api_version: Option<String>,
    /// Override base URL (primarily for testing with mock servers)
    base_url_override: Option<String>,
}

impl WitClientBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            sinks: Vec::new(),
            api_version: None,
            base_url_override: None,
        }
    }

    /// Replace token and severity in one go.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.access_token = token.into();
        self
    }

    pub fn log_severity(mut self, severity: Severity) -> Self {
        self.config.log_severity = severity;
        self
    }

    /// Register an observer for log events. Can be called repeatedly.
    ///
    /// Sinks only receive events under [`Severity::Info`].
    pub fn log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Value of the `v` query parameter. Defaults to this crate's version.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Override the service host.
    ///
    /// This is primarily for testing with mock servers.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Build the client. Fails when the access token is blank.
    pub fn build(self) -> Result<WitClient> {
        self.config.validate()?;

        let transport =
            HttpTransport::new(&self.config.access_token, self.base_url_override.as_deref())?;
        let api_version = self
            .api_version
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

        Ok(WitClient {
            transport,
            reporter: Reporter::new(self.config.log_severity, self.sinks),
            api_version,
        })
    }
}

impl Default for WitClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

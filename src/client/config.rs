use crate::logging::Severity;
use crate::{Error, ErrorContext, Result};
use serde::Deserialize;
use std::fmt;

/// Environment variable holding the access token for [`ClientConfig::from_env`].
pub const ACCESS_TOKEN_ENV: &str = "WIT_ACCESS_TOKEN";
/// Environment variable holding the log severity for [`ClientConfig::from_env`].
pub const LOG_SEVERITY_ENV: &str = "WIT_LOG_SEVERITY";

/// Token and severity for one client instance.
///
/// Deserializable so applications can load it from whatever format they use.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    pub access_token: String,
    #[serde(default)]
    pub log_severity: Severity,
}

impl ClientConfig {
    pub fn new(access_token: impl Into<String>, log_severity: Severity) -> Self {
        Self {
            access_token: access_token.into(),
            log_severity,
        }
    }

    /// Read `WIT_ACCESS_TOKEN` and `WIT_LOG_SEVERITY`. A missing severity means silent.
    pub fn from_env() -> Result<Self> {
        let access_token = std::env::var(ACCESS_TOKEN_ENV).map_err(|_| {
            Error::configuration_with_context(
                format!("{} is not set", ACCESS_TOKEN_ENV),
                ErrorContext::new()
                    .with_field_path("config.access_token")
                    .with_source("client_config"),
            )
        })?;
        let log_severity = match std::env::var(LOG_SEVERITY_ENV) {
            Ok(s) => s.parse()?,
            Err(_) => Severity::default(),
        };
        let config = Self::new(access_token, log_severity);
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.access_token.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "access_token is required.",
                ErrorContext::new()
                    .with_field_path("config.access_token")
                    .with_source("client_config"),
            ));
        }
        Ok(())
    }
}

// Keeps the token out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &"<redacted>")
            .field("log_severity", &self.log_severity)
            .finish()
    }
}

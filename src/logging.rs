//! Severity-driven error reporting and the client's log event.
//!
//! Every failure site in the client (input validation, non-success responses) hands its
//! error to a [`Reporter`]. The reporter is the only place the configured [`Severity`]
//! is consulted:
//!
//! | Severity | Effect |
//! |----------|--------|
//! | [`Severity::Exceptions`] | the error is returned and the operation aborts |
//! | [`Severity::Info`] | a [`LogEvent`] is delivered to every registered [`LogSink`]; the operation continues |
//! | [`Severity::Silent`] | nothing happens |
//!
//! Sinks are registered per client through [`crate::WitClientBuilder::log_sink`].

use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// How the client reacts to validation and remote failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    #[default]
    Silent,
    Info,
    Exceptions,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Silent => "silent",
            Severity::Info => "info",
            Severity::Exceptions => "exceptions",
        };
        f.write_str(s)
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" | "none" | "" => Ok(Severity::Silent),
            "info" => Ok(Severity::Info),
            "exceptions" | "exception" | "error" => Ok(Severity::Exceptions),
            other => Err(Error::configuration_with_context(
                format!("Unknown log severity '{}'", other),
                ErrorContext::new()
                    .with_field_path("config.log_severity")
                    .with_details("expected one of: silent, info, exceptions"),
            )),
        }
    }
}

/// A failure observed under [`Severity::Info`].
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub message: Option<String>,
    pub error: Arc<Error>,
    pub timestamp: DateTime<Utc>,
}

impl LogEvent {
    pub fn new(message: Option<String>, error: Error) -> Self {
        Self {
            message,
            error: Arc::new(error),
            timestamp: Utc::now(),
        }
    }
}

/// Observer for the client's log events.
#[async_trait]
pub trait LogSink: Send + Sync {
    async fn on_log(&self, event: LogEvent) -> Result<()>;
}

/// Sink that drops every event.
pub struct NoopLogSink;

#[async_trait]
impl LogSink for NoopLogSink {
    async fn on_log(&self, _event: LogEvent) -> Result<()> {
        Ok(())
    }
}

/// Bounded in-memory sink; oldest events are dropped first.
pub struct InMemoryLogSink {
    events: RwLock<Vec<LogEvent>>,
    max_events: usize,
}

impl InMemoryLogSink {
    pub fn new(max: usize) -> Self {
        Self {
            events: RwLock::new(Vec::new()),
            max_events: max.max(1),
        }
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn clear(&self) {
        self.events
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    pub fn len(&self) -> usize {
        self.events.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryLogSink {
    fn default() -> Self {
        Self::new(1024)
    }
}

#[async_trait]
impl LogSink for InMemoryLogSink {
    async fn on_log(&self, event: LogEvent) -> Result<()> {
        let mut events = self.events.write().unwrap_or_else(|e| e.into_inner());
        events.push(event);
        if events.len() > self.max_events {
            events.remove(0);
        }
        Ok(())
    }
}

/// Forwards events to `tracing` at warn level.
#[derive(Default)]
pub struct TracingLogSink;

#[async_trait]
impl LogSink for TracingLogSink {
    async fn on_log(&self, event: LogEvent) -> Result<()> {
        warn!(
            detail = event.message.as_deref().unwrap_or(""),
            error = %event.error,
            "wit client failure"
        );
        Ok(())
    }
}

/// Fans an event out to several sinks.
#[derive(Default)]
pub struct CompositeLogSink {
    sinks: Vec<Arc<dyn LogSink>>,
}

impl CompositeLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sinks.push(sink);
        self
    }
}

#[async_trait]
impl LogSink for CompositeLogSink {
    async fn on_log(&self, event: LogEvent) -> Result<()> {
        for s in &self.sinks {
            if let Err(e) = s.on_log(event.clone()).await {
                debug!(error = %e, "composite log sink member failed");
            }
        }
        Ok(())
    }
}

/// Severity plus the sinks registered on one client.
#[derive(Clone, Default)]
pub struct Reporter {
    severity: Severity,
    sinks: Vec<Arc<dyn LogSink>>,
}

impl Reporter {
    pub fn new(severity: Severity, sinks: Vec<Arc<dyn LogSink>>) -> Self {
        Self { severity, sinks }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Apply the severity policy to a failure.
    ///
    /// Returns `Err(error)` only under [`Severity::Exceptions`]. Sink failures are
    /// ignored.
    pub async fn report(&self, message: Option<&str>, error: Error) -> Result<()> {
        match self.severity {
            Severity::Exceptions => Err(error),
            Severity::Info => {
                let event = LogEvent::new(message.map(str::to_string), error);
                debug!(error = %event.error, sinks = self.sinks.len(), "reporting wit failure");
                for sink in &self.sinks {
                    if let Err(e) = sink.on_log(event.clone()).await {
                        debug!(error = %e, "log sink failed");
                    }
                }
                Ok(())
            }
            Severity::Silent => Ok(()),
        }
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("severity", &self.severity)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

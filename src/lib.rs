//! # wit-client
//!
//! Typed async client for the Wit.ai natural-language-understanding HTTP API.
//!
//! ## Overview
//!
//! The client builds authenticated requests, fills in a default request context and
//! fallback message/thread ids, decodes JSON responses into typed results, and applies a
//! configurable severity policy to failures:
//!
//! - **Exceptions**: validation and HTTP failures are returned as [`Error`]
//! - **Info**: failures are delivered to registered [`LogSink`]s and the call continues
//! - **Silent**: failures are ignored
//!
//! Malformed response bodies and transport failures are always returned.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wit_client::{ClientConfig, SentenceRequest, Severity, WitClient};
//!
//! #[tokio::main]
//! async fn main() -> wit_client::Result<()> {
//!     let client = WitClient::new(ClientConfig::new("your-token", Severity::Exceptions))?;
//!
//!     let meaning = client
//!         .sentence_meaning(&SentenceRequest::new("wake me up at 7am").with_max_traits(3))
//!         .await?;
//!     if let Some(intent) = meaning.top_intent() {
//!         println!("{} ({:.2})", intent.name, intent.confidence);
//!     }
//!
//!     for entity in client.list_entities().await? {
//!         println!("{}", entity);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client façade, builder and configuration |
//! | [`logging`] | Severity policy, log events and sinks |
//! | [`types`] | Request and result models |
//! | [`snowflake`] | Time-derived fallback identifiers |
//! | [`transport`] | Shared HTTP transport |

pub mod client;
pub mod logging;
pub mod snowflake;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, WitClient, WitClientBuilder};
pub use logging::{
    CompositeLogSink, InMemoryLogSink, LogEvent, LogSink, NoopLogSink, Reporter, Severity,
    TracingLogSink,
};
pub use types::{
    default_context, ContextObject, Entity, EntityDescriptor, SentenceRequest, SentenceResult,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};

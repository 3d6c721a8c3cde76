//! HTTP transport: the shared `reqwest::Client` with the fixed Wit headers.

mod http;

pub use http::{HttpTransport, TransportError, DEFAULT_BASE_URL};

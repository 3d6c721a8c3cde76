//! Client façade for the Wit API.
//!
//! Implementation details are split into submodules under `src/client/`: request
//! assembly, validation and response processing are internal; the builder, config and
//! client are public.

pub mod builder;
pub mod config;
pub mod core;
mod request;
mod response;
pub(crate) mod validation;

pub use builder::WitClientBuilder;
pub use config::{ClientConfig, ACCESS_TOKEN_ENV, LOG_SEVERITY_ENV};
pub use core::WitClient;

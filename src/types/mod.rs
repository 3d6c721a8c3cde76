//! # Types Module
//!
//! Value types exchanged with the Wit service. Request models are built by callers,
//! result models are deserialized from the service's JSON and carry any fields this
//! crate does not model in `extra`.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ContextObject`] | Locale / reference time / timezone sent with a sentence |
//! | [`SentenceRequest`] | Input to sentence-meaning extraction |
//! | [`SentenceResult`] | Intents, entities and traits returned for a sentence |
//! | [`EntityDescriptor`] | Input to entity creation |
//! | [`Entity`] | Entity returned by creation and lookup |
//!
//! ## Example
//!
//! ```rust
//! use wit_client::types::SentenceRequest;
//!
//! let request = SentenceRequest::new("set an alarm for 7am")
//!     .with_max_traits(3)
//!     .with_verbose(true);
//! assert_eq!(request.max_traits, 3);
//! ```

pub mod context;
pub mod entity;
pub mod sentence;

pub use context::{default_context, Coordinates, ContextObject};
pub use entity::{Entity, EntityDescriptor, EntityKeyword, EntityRole, EntityValue};
pub use sentence::{
    EntityMatch, Intent, SentenceRequest, SentenceResult, TraitValue, MAX_MESSAGE_LEN,
    MAX_TRAITS,
};

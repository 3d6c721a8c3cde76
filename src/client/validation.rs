//! Sentence request validation.

use crate::types::{SentenceRequest, MAX_MESSAGE_LEN, MAX_TRAITS};
use crate::{Error, ErrorContext};

/// First constraint the request violates, if any.
///
/// Checks run in a fixed order (blank message, message length, traits above the
/// maximum, negative traits) and stop at the first failure. Message length is counted
/// in characters, not bytes.
pub(crate) fn validate_sentence(sentence: &SentenceRequest) -> Option<Error> {
    if sentence.message.trim().is_empty() {
        return Some(invalid(
            "message cannot be empty or whitespace.",
            "sentence.message",
            None,
        ));
    }

    let len = sentence.message.chars().count();
    if len > MAX_MESSAGE_LEN {
        return Some(invalid(
            format!("message length cannot be greater than {}.", MAX_MESSAGE_LEN),
            "sentence.message",
            Some(format!("length {}", len)),
        ));
    }

    if sentence.max_traits > MAX_TRAITS {
        return Some(invalid(
            format!("max_traits cannot be greater than {}.", MAX_TRAITS),
            "sentence.max_traits",
            Some(format!("got {}", sentence.max_traits)),
        ));
    }

    if sentence.max_traits < 0 {
        return Some(invalid(
            "max_traits cannot be less than 0.",
            "sentence.max_traits",
            Some(format!("got {}", sentence.max_traits)),
        ));
    }

    None
}

/// Error for an entity id that cannot address a single entity.
pub(crate) fn validate_entity_id(id: &str) -> Option<Error> {
    if id.trim().is_empty() {
        return Some(blank_entity_id());
    }
    None
}

pub(crate) fn blank_entity_id() -> Error {
    Error::validation_with_context(
        "entity id cannot be empty or whitespace.",
        ErrorContext::new()
            .with_field_path("entity.id")
            .with_source("entity_validator"),
    )
}

fn invalid(message: impl Into<String>, field: &str, details: Option<String>) -> Error {
    let mut context = ErrorContext::new()
        .with_field_path(field)
        .with_source("sentence_validator");
    if let Some(details) = details {
        context = context.with_details(details);
    }
    Error::validation_with_context(message, context)
}

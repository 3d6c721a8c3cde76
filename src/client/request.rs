//! Outbound request assembly.

use crate::snowflake::generate_id;
use crate::types::{default_context, SentenceRequest};
use crate::Result;

/// Remote path of the sentence-meaning endpoint.
pub(crate) const MESSAGE_PATH: &str = "message";
/// Remote path of the entity endpoints.
pub(crate) const ENTITIES_PATH: &str = "entities";

/// Query parameter carrying the API version on every request.
pub(crate) const VERSION_PARAM: &str = "v";

/// Query pairs for a sentence-meaning request.
///
/// Absent context, message id and thread id are filled with the default context and
/// freshly generated ids (message and thread ids are generated separately).
pub(crate) fn sentence_query(
    sentence: &SentenceRequest,
    api_version: &str,
) -> Result<Vec<(&'static str, String)>> {
    let context = match &sentence.context {
        Some(ctx) => serde_json::to_string(ctx)?,
        None => serde_json::to_string(&default_context())?,
    };
    let msg_id = sentence
        .message_id
        .clone()
        .unwrap_or_else(|| generate_id().to_string());
    let thread_id = sentence
        .thread_id
        .clone()
        .unwrap_or_else(|| generate_id().to_string());

    Ok(vec![
        (VERSION_PARAM, api_version.to_string()),
        ("q", sentence.message.clone()),
        ("context", context),
        ("msg_id", msg_id),
        ("thread_id", thread_id),
        ("n", sentence.max_traits.to_string()),
        ("verbose", sentence.verbose.to_string()),
    ])
}

pub(crate) fn version_query(api_version: &str) -> Vec<(&'static str, String)> {
    vec![(VERSION_PARAM, api_version.to_string())]
}

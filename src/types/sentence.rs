//! Sentence-meaning request and result models.

use super::context::ContextObject;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Longest message the service accepts, in characters.
pub const MAX_MESSAGE_LEN: usize = 256;
/// Upper bound for `max_traits` (the `n` query parameter).
pub const MAX_TRAITS: i32 = 8;

/// Input to sentence-meaning extraction.
///
/// `max_traits` is signed so out-of-range input can be reported through the client's
/// severity policy instead of being rejected by the type system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentenceRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ContextObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(default)]
    pub max_traits: i32,
    #[serde(default)]
    pub verbose: bool,
}

impl SentenceRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_context(mut self, context: ContextObject) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_message_id(mut self, id: impl Into<String>) -> Self {
        self.message_id = Some(id.into());
        self
    }

    pub fn with_thread_id(mut self, id: impl Into<String>) -> Self {
        self.thread_id = Some(id.into());
        self
    }

    pub fn with_max_traits(mut self, n: i32) -> Self {
        self.max_traits = n;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Meaning extracted from a sentence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub intents: Vec<Intent>,
    /// Keyed by `name:role`, e.g. `wit$datetime:datetime`.
    pub entities: BTreeMap<String, Vec<EntityMatch>>,
    /// Keyed by trait name, e.g. `wit$sentiment`.
    pub traits: BTreeMap<String, Vec<TraitValue>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SentenceResult {
    /// Intent with the highest confidence, if any.
    pub fn top_intent(&self) -> Option<&Intent> {
        self.intents
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }

    /// Most confident value for a trait.
    pub fn top_trait(&self, name: &str) -> Option<&TraitValue> {
        self.traits
            .get(name)?
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityMatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub value: serde_json::Value,
    pub confidence: f64,
}

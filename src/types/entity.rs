//! Entity models for the `/entities` endpoints.

use serde::{Deserialize, Serialize};

/// Body of an entity-creation request: `{"id": .., "doc": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDescriptor {
    pub id: String,
    /// Short sentence describing the entity.
    #[serde(rename = "doc")]
    pub description: String,
}

impl EntityDescriptor {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

/// Entity as returned by creation and lookup.
///
/// Older API versions return `values` with validated expressions; newer ones return
/// `keywords` and `roles`. Both shapes deserialize here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub builtin: bool,
    pub lookups: Vec<String>,
    pub roles: Vec<EntityRole>,
    pub keywords: Vec<EntityKeyword>,
    pub values: Vec<EntityValue>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Entity {
    /// All validated expressions across the entity's values.
    pub fn expressions(&self) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .flat_map(|v| v.expressions.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityRole {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityKeyword {
    pub keyword: String,
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityValue {
    pub value: String,
    pub expressions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

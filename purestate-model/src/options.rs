use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ModelResult;

/// Construction options handed to a descriptor alongside its data.
///
/// The adapters pass this through untouched; only descriptors read it. The
/// conventional keys have typed fields, anything else lands in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Attribute a collection sorts by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparator: Option<String>,

    /// Attribute holding an item's identity. Descriptors fall back to their
    /// own `id_attribute` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(alias = "idAttribute")]
    pub id_attribute: Option<String>,

    /// Whether incoming data should go through the descriptor's parse step.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub parse: bool,

    /// Descriptor-specific keys.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object.
    pub fn from_value(value: Value) -> ModelResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn with_comparator(mut self, attribute: impl Into<String>) -> Self {
        self.comparator = Some(attribute.into());
        self
    }

    pub fn with_id_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.id_attribute = Some(attribute.into());
        self
    }

    pub fn with_parse(mut self, parse: bool) -> Self {
        self.parse = parse;
        self
    }

    /// Set a descriptor-specific key.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Look up a descriptor-specific key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

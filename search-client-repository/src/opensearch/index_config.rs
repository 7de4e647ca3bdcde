//! Index settings and mappings.
//!
//! `IndexConfig` renders a create-index body from shard/replica counts and
//! per-field mappings, for callers who don't want to hand-write the JSON.

use serde_json::{json, Map, Value};

/// Settings and field mappings for a new index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexConfig {
    /// Number of primary shards.
    pub number_of_shards: u32,
    /// Number of replicas per primary shard.
    pub number_of_replicas: u32,
    /// Field name to mapping definition (e.g. `{"type": "keyword"}`).
    pub properties: Map<String, Value>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            number_of_shards: 1,
            number_of_replicas: 1,
            properties: Map::new(),
        }
    }
}

impl IndexConfig {
    /// Create a config with the given shard and replica counts and no mappings.
    pub fn new(number_of_shards: u32, number_of_replicas: u32) -> Self {
        Self {
            number_of_shards,
            number_of_replicas,
            properties: Map::new(),
        }
    }

    /// Map a field to a raw mapping definition.
    pub fn field(mut self, name: impl Into<String>, mapping: Value) -> Self {
        self.properties.insert(name.into(), mapping);
        self
    }

    /// Map a field as `keyword` (exact match, usable in term queries).
    pub fn keyword(self, name: impl Into<String>) -> Self {
        self.field(name, json!({ "type": "keyword" }))
    }

    /// Map a field as analyzed `text`.
    pub fn text(self, name: impl Into<String>) -> Self {
        self.field(name, json!({ "type": "text" }))
    }

    /// Map a field as `long`.
    pub fn long(self, name: impl Into<String>) -> Self {
        self.field(name, json!({ "type": "long" }))
    }

    /// Map a field as `date`.
    pub fn date(self, name: impl Into<String>) -> Self {
        self.field(name, json!({ "type": "date" }))
    }

    /// Render the create-index request body.
    pub fn to_body(&self) -> Value {
        let mut body = json!({
            "settings": {
                "number_of_shards": self.number_of_shards,
                "number_of_replicas": self.number_of_replicas
            }
        });

        if !self.properties.is_empty() {
            body["mappings"] = json!({ "properties": self.properties });
        }

        body
    }
}

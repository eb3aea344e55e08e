use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A tag document for one movie, passed through from the document store untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagDocument(pub Map<String, Value>);

impl TagDocument {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for TagDocument {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

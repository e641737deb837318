//! Result document and conversion statistics

use crate::config::{DocumentMetadata, NAME_FIELD, VERSION_FIELD};
use crate::core::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// Top-level output: `Name`, `Version`, then one entry per record key
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultDocument {
    fields: Map<String, Value>,
}

impl ResultDocument {
    /// Creates a document holding only the metadata fields
    pub fn new(metadata: &DocumentMetadata) -> Self {
        let mut fields = Map::new();
        fields.insert(NAME_FIELD.to_string(), Value::String(metadata.name.clone()));
        fields.insert(
            VERSION_FIELD.to_string(),
            Value::String(metadata.version.clone()),
        );
        Self { fields }
    }

    /// Inserts a record, returning the one it replaced
    pub fn insert(&mut self, key: String, record: Value) -> Option<Value> {
        self.fields.insert(key, record)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Number of records, metadata fields excluded
    pub fn record_count(&self) -> usize {
        self.fields.len().saturating_sub(2)
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Two-space indented JSON with a trailing newline
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Statistics of a finished conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Data rows read, header excluded
    pub rows_read: usize,
    /// Records in the output document
    pub records: usize,
    /// Rows that replaced an earlier record with the same key
    pub duplicates: usize,
    /// Columns skipped because their header is empty
    pub empty_headers: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata_comes_first() {
        let mut document = ResultDocument::new(&DocumentMetadata::default());
        document.insert("Taro".to_string(), json!({"age": 20}));

        let keys: Vec<&String> = document.fields.keys().collect();
        assert_eq!(keys, ["Name", "Version", "Taro"]);
        assert_eq!(document.record_count(), 1);
    }

    #[test]
    fn test_pretty_json_layout() {
        let mut document = ResultDocument::new(&DocumentMetadata::default());
        document.insert("Taro".to_string(), json!({"tags": ["a"]}));

        let expected = "{\n  \"Name\": \"Address\",\n  \"Version\": \"1.0\",\n  \"Taro\": {\n    \"tags\": [\n      \"a\"\n    ]\n  }\n}\n";
        assert_eq!(document.to_pretty_json().unwrap(), expected);
    }
}

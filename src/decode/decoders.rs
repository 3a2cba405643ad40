//! JSON decoder with record extraction

use crate::error::{Error, Result};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Key holding the field map inside each record
pub const DEFAULT_RECORD_KEY: &str = "image";

/// Field map of one record
pub type FieldMap = Map<String, Value>;

/// JSON decoder that extracts the field map of every record
#[derive(Debug, Clone)]
pub struct JsonDecoder {
    /// Key of the sub-object holding the fields
    record_key: String,
}

impl Default for JsonDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonDecoder {
    /// Create a decoder for `image` records
    pub fn new() -> Self {
        Self::with_record_key(DEFAULT_RECORD_KEY)
    }

    /// Create a decoder reading fields from a different record key
    pub fn with_record_key(key: impl Into<String>) -> Self {
        Self {
            record_key: key.into(),
        }
    }

    /// Record key this decoder looks for
    pub fn record_key(&self) -> &str {
        &self.record_key
    }

    /// Decode a document.
    ///
    /// A document consisting of the `null` literal is rejected the same way
    /// as malformed JSON.
    pub fn decode(&self, body: &str) -> Result<Value> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| Error::decode(format!("{e}")))?;

        if value.is_null() {
            return Err(Error::decode("document is null"));
        }

        Ok(value)
    }

    /// Extract the field map of every record in a decoded document.
    ///
    /// An array yields one record per element and an object one record per
    /// value. Anything that does not fit the expected shape is skipped with
    /// a warning.
    pub fn extract_records<'a>(&self, document: &'a Value) -> Vec<&'a FieldMap> {
        let records: Vec<&Value> = match document {
            Value::Array(arr) => arr.iter().collect(),
            Value::Object(map) => map.values().collect(),
            other => {
                warn!(
                    "Expected a list of records, got {}; nothing to generate",
                    kind_name(other)
                );
                return Vec::new();
            }
        };

        let fields: Vec<&FieldMap> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| self.record_fields(index, record))
            .collect();

        debug!(
            "Extracted {} field maps using record key '{}'",
            fields.len(),
            self.record_key
        );

        fields
    }

    /// Field map of a single record, if it has one
    fn record_fields<'a>(&self, index: usize, record: &'a Value) -> Option<&'a FieldMap> {
        let Value::Object(map) = record else {
            warn!("Skipping record {index}: expected object, got {}", kind_name(record));
            return None;
        };

        match map.get(&self.record_key) {
            Some(Value::Object(fields)) => Some(fields),
            Some(other) => {
                warn!(
                    "Skipping record {index}: '{}' is {}, expected object",
                    self.record_key,
                    kind_name(other)
                );
                None
            }
            None => {
                warn!("Skipping record {index}: missing '{}' key", self.record_key);
                None
            }
        }
    }
}

/// Human-readable JSON kind for log messages
fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

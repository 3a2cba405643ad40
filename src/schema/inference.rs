//! Field type inference from JSON values

use super::types::FieldType;
use serde_json::Value;

/// Prefix of pointer types generated for array fields
pub const DEFAULT_TYPE_PREFIX: &str = "ImageMagick";

/// Field type inferrer
#[derive(Debug, Clone)]
pub struct TypeInferrer {
    /// Prefix for pointer types of array fields
    type_prefix: String,
}

impl Default for TypeInferrer {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInferrer {
    /// Create an inferrer using the `ImageMagick` prefix
    pub fn new() -> Self {
        Self {
            type_prefix: DEFAULT_TYPE_PREFIX.to_string(),
        }
    }

    /// Set the prefix for pointer types
    #[must_use]
    pub fn with_type_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.type_prefix = prefix.into();
        self
    }

    /// Infer the type of a field.
    ///
    /// `field_name` is the already upper-cased name, used to name the pointer
    /// type of array fields. Checks run bool, integer, float, array, then
    /// fall back to string.
    pub fn infer(&self, field_name: &str, value: &Value) -> FieldType {
        match value {
            Value::Bool(_) => FieldType::Bool,
            // Numbers keep their source text, so `-0` is an integer and
            // `1.0` or `1e3` are not
            Value::Number(n) if n.is_i64() => FieldType::Int64,
            // u64 beyond i64::MAX does not fit int64
            Value::Number(_) => FieldType::Float64,
            Value::Array(_) => FieldType::pointer(&self.type_prefix, field_name),
            Value::Null | Value::String(_) | Value::Object(_) => FieldType::String,
        }
    }
}

/// Derive a field name from a JSON key by upper-casing its first character.
///
/// Only an ASCII first character changes; the rest of the key is left
/// untouched.
pub fn field_name(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => std::iter::once(first.to_ascii_uppercase())
            .chain(chars)
            .collect(),
        None => String::new(),
    }
}

//! Field type labels

use serde::{Serialize, Serializer};
use std::fmt;

/// Inferred type of a struct field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Bool,
    Int64,
    Float64,
    /// Pointer to a named struct, rendered as `*<name>`
    Pointer(String),
    /// Fallback for strings, nulls and objects
    String,
}

impl FieldType {
    /// Create a pointer type named `<prefix><field_name>`
    pub fn pointer(prefix: &str, field_name: &str) -> Self {
        FieldType::Pointer(format!("{prefix}{field_name}"))
    }

    /// Check if this is the fallback type
    pub fn is_fallback(&self) -> bool {
        matches!(self, FieldType::String)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Bool => f.pad("bool"),
            FieldType::Int64 => f.pad("int64"),
            FieldType::Float64 => f.pad("float64"),
            FieldType::Pointer(name) => f.pad(&format!("*{name}")),
            FieldType::String => f.pad("string"),
        }
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

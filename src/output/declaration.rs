//! Field declaration lines

use crate::schema::FieldType;
use serde::Serialize;

/// Minimum width of the field name column
pub const DEFAULT_NAME_WIDTH: usize = 17;

/// Minimum width of the type column
pub const DEFAULT_TYPE_WIDTH: usize = 60;

/// Column widths for rendered declaration lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Minimum width of the name column
    pub name_width: usize,
    /// Minimum width of the type column
    pub type_width: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            name_width: DEFAULT_NAME_WIDTH,
            type_width: DEFAULT_TYPE_WIDTH,
        }
    }
}

/// One generated struct field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDeclaration {
    /// Struct field name
    pub name: String,
    /// Inferred type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Serialization tag embedding the original key
    pub tag: String,
    /// Original JSON key
    pub key: String,
}

impl FieldDeclaration {
    /// Create a declaration for `key`, tagged with the key as-is
    pub fn new(name: impl Into<String>, field_type: FieldType, key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            name: name.into(),
            field_type,
            tag: json_tag(&key),
            key,
        }
    }

    /// Render as a line of left-justified columns.
    ///
    /// Values wider than their column are written in full.
    pub fn render(&self, layout: &ColumnLayout) -> String {
        format!(
            "{:<name_width$} {:<type_width$} {}",
            self.name,
            self.field_type,
            self.tag,
            name_width = layout.name_width,
            type_width = layout.type_width,
        )
    }
}

/// Build the `json:"<key>"` struct tag
pub fn json_tag(key: &str) -> String {
    format!("`json:\"{key}\"`")
}

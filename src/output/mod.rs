//! Output module
//!
//! Formats declarations as fixed-width lines, collects them into a sorted
//! deduplicated set, and renders the set as text or JSON.

mod declaration;
mod writer;

pub use declaration::{
    json_tag, ColumnLayout, FieldDeclaration, DEFAULT_NAME_WIDTH, DEFAULT_TYPE_WIDTH,
};
pub use writer::{DeclarationSet, OutputFormat, OutputWriter};

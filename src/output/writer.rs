//! Declaration set and output rendering

use super::declaration::{ColumnLayout, FieldDeclaration};
use crate::error::Result;
use std::collections::BTreeMap;

/// Sorted, deduplicated set of declarations.
///
/// Entries are keyed by their rendered line, so ordering and equality follow
/// the full line (name, type and tag together), not the name alone.
#[derive(Debug, Clone, Default)]
pub struct DeclarationSet {
    layout: ColumnLayout,
    entries: BTreeMap<String, FieldDeclaration>,
}

impl DeclarationSet {
    /// Create an empty set with the default layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set rendering with `layout`
    pub fn with_layout(layout: ColumnLayout) -> Self {
        Self {
            layout,
            entries: BTreeMap::new(),
        }
    }

    /// Layout used to render lines
    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// Add a declaration. Returns `false` if its line was already present.
    pub fn insert(&mut self, declaration: FieldDeclaration) -> bool {
        let line = declaration.render(&self.layout);
        if self.entries.contains_key(&line) {
            return false;
        }
        self.entries.insert(line, declaration);
        true
    }

    /// Number of unique lines
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered lines in ascending byte order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Declarations in line order
    pub fn declarations(&self) -> impl Iterator<Item = &FieldDeclaration> {
        self.entries.values()
    }
}

impl Extend<FieldDeclaration> for DeclarationSet {
    fn extend<I: IntoIterator<Item = FieldDeclaration>>(&mut self, iter: I) {
        for declaration in iter {
            self.insert(declaration);
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Declaration lines, one per field
    #[default]
    Text,
    /// JSON array of declarations
    Json,
}

/// Renders a declaration set
#[derive(Debug, Clone, Default)]
pub struct OutputWriter {
    format: OutputFormat,
    /// Wrap text output in `type <name> struct { ... }`
    struct_name: Option<String>,
}

impl OutputWriter {
    /// Create a writer for `format`
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            struct_name: None,
        }
    }

    /// Wrap text output in a struct definition
    #[must_use]
    pub fn with_struct_name(mut self, name: impl Into<String>) -> Self {
        self.struct_name = Some(name.into());
        self
    }

    /// Render the set.
    ///
    /// Text lines are joined with `\n` and carry no trailing newline. JSON
    /// output is pretty-printed and newline-terminated.
    pub fn render(&self, set: &DeclarationSet) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.render_text(set)),
            OutputFormat::Json => {
                let declarations: Vec<&FieldDeclaration> = set.declarations().collect();
                let mut out = serde_json::to_string_pretty(&declarations)?;
                out.push('\n');
                Ok(out)
            }
        }
    }

    fn render_text(&self, set: &DeclarationSet) -> String {
        match &self.struct_name {
            None => set.lines().collect::<Vec<_>>().join("\n"),
            Some(name) => {
                let mut lines = Vec::with_capacity(set.len() + 2);
                lines.push(format!("type {name} struct {{"));
                lines.extend(set.lines().map(|line| format!("\t{line}")));
                lines.push("}".to_string());
                lines.join("\n")
            }
        }
    }
}

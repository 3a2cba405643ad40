//! Field declaration generator
//!
//! Runs the whole pipeline over one input document:
//! normalize → decode → extract records → infer types → collect lines.

use crate::decode::{JsonDecoder, DEFAULT_RECORD_KEY};
use crate::error::Result;
use crate::normalize::normalize;
use crate::output::{ColumnLayout, DeclarationSet, FieldDeclaration};
use crate::schema::{field_name, TypeInferrer, DEFAULT_TYPE_PREFIX};
use tracing::debug;

/// Generator settings. The defaults produce `ImageDetails`-style lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Key of the field map inside each record
    pub record_key: String,
    /// Prefix for pointer types of array fields
    pub type_prefix: String,
    /// Column widths of rendered lines
    pub layout: ColumnLayout,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            record_key: DEFAULT_RECORD_KEY.to_string(),
            type_prefix: DEFAULT_TYPE_PREFIX.to_string(),
            layout: ColumnLayout::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the record key
    #[must_use]
    pub fn with_record_key(mut self, key: impl Into<String>) -> Self {
        self.record_key = key.into();
        self
    }

    /// Set the pointer type prefix
    #[must_use]
    pub fn with_type_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.type_prefix = prefix.into();
        self
    }

    /// Set the column layout
    #[must_use]
    pub fn with_layout(mut self, layout: ColumnLayout) -> Self {
        self.layout = layout;
        self
    }
}

/// Generates declaration sets from fixture text
#[derive(Debug, Clone)]
pub struct Generator {
    decoder: JsonDecoder,
    inferrer: TypeInferrer,
    layout: ColumnLayout,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Generator {
    /// Create a generator from a configuration
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            decoder: JsonDecoder::with_record_key(config.record_key),
            inferrer: TypeInferrer::new().with_type_prefix(config.type_prefix),
            layout: config.layout,
        }
    }

    /// Generate the declaration set for a raw input document.
    ///
    /// Fails only if the input cannot be decoded; nothing is produced in
    /// that case.
    pub fn generate(&self, input: &str) -> Result<DeclarationSet> {
        let normalized = normalize(input);
        let document = self.decoder.decode(&normalized)?;

        let mut set = DeclarationSet::with_layout(self.layout);
        let mut generated = 0usize;

        for fields in self.decoder.extract_records(&document) {
            for (key, value) in fields {
                let name = field_name(key);
                let field_type = self.inferrer.infer(&name, value);
                set.insert(FieldDeclaration::new(name, field_type, key.as_str()));
                generated += 1;
            }
        }

        debug!(
            "Generated {} declarations, {} unique",
            generated,
            set.len()
        );

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::schema::FieldType;

    fn types_of(set: &DeclarationSet) -> Vec<(String, String)> {
        set.declarations()
            .map(|d| (d.name.clone(), d.field_type.to_string()))
            .collect()
    }

    #[test]
    fn test_generate_single_record() {
        let set = Generator::default()
            .generate(r#"[{"image": {"width": 10, "tainted": false, "gamma": 0.454545}}]"#)
            .unwrap();

        assert_eq!(
            types_of(&set),
            vec![
                ("Gamma".to_string(), "float64".to_string()),
                ("Tainted".to_string(), "bool".to_string()),
                ("Width".to_string(), "int64".to_string()),
            ]
        );
    }

    #[test]
    fn test_generate_dedups_across_records() {
        let set = Generator::default()
            .generate(r#"[{"image": {"width": 10}}, {"image": {"width": 20}}]"#)
            .unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_generate_normalizes_non_finite() {
        let set = Generator::default()
            .generate(r#"[{"image": {"entropy": -nan, "kurtosis": inf}}]"#)
            .unwrap();

        for decl in set.declarations() {
            assert_eq!(decl.field_type, FieldType::String);
        }
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_generate_decode_error() {
        let err = Generator::default()
            .generate(r#"[{"image": {"width": "#)
            .unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_generate_null_document() {
        assert!(Generator::default().generate("null").is_err());
    }

    #[test]
    fn test_generate_custom_config() {
        let config = GeneratorConfig::new()
            .with_record_key("frame")
            .with_type_prefix("Magick")
            .with_layout(ColumnLayout {
                name_width: 0,
                type_width: 0,
            });
        let set = Generator::new(config)
            .generate(r#"[{"frame": {"delays": [10, 20]}}, {"image": {"width": 1}}]"#)
            .unwrap();

        assert_eq!(
            set.lines().collect::<Vec<_>>(),
            vec!["Delays *MagickDelays `json:\"delays\"`"]
        );
    }

    #[test]
    fn test_generate_idempotent() {
        let input = r#"[{"image": {"b": 1, "a": [1], "c": "x"}}, {"image": {"a": 2.5}}]"#;
        let generator = Generator::default();

        let first: Vec<String> = generator
            .generate(input)
            .unwrap()
            .lines()
            .map(String::from)
            .collect();
        let second: Vec<String> = generator
            .generate(input)
            .unwrap()
            .lines()
            .map(String::from)
            .collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }
}

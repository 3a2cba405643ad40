//! CLI arguments

use crate::decode::DEFAULT_RECORD_KEY;
use crate::generator::GeneratorConfig;
use crate::output::{ColumnLayout, OutputFormat, DEFAULT_NAME_WIDTH, DEFAULT_TYPE_WIDTH};
use crate::schema::DEFAULT_TYPE_PREFIX;
use clap::Parser;
use std::path::PathBuf;

/// Generate struct field declarations from ImageMagick JSON fixtures.
///
/// Reads `convert <file> json:` output and prints one declaration line per
/// unique field of the `image` objects, sorted.
#[derive(Parser, Debug)]
#[command(name = "magick-fieldgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Fixture file to read instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Key of the field object inside each record
    #[arg(short = 'k', long, default_value = DEFAULT_RECORD_KEY)]
    pub record_key: String,

    /// Prefix for pointer types generated for array fields
    #[arg(short = 'p', long, default_value = DEFAULT_TYPE_PREFIX)]
    pub type_prefix: String,

    /// Minimum width of the name column
    #[arg(long, default_value_t = DEFAULT_NAME_WIDTH)]
    pub name_width: usize,

    /// Minimum width of the type column
    #[arg(long, default_value_t = DEFAULT_TYPE_WIDTH)]
    pub type_width: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Wrap the lines in `type <NAME> struct { ... }` (text format only)
    #[arg(short, long, value_name = "NAME")]
    pub struct_name: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Generator configuration from the arguments
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new()
            .with_record_key(self.record_key.clone())
            .with_type_prefix(self.type_prefix.clone())
            .with_layout(ColumnLayout {
                name_width: self.name_width,
                type_width: self.type_width,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_generator_defaults() {
        let cli = Cli::parse_from(["magick-fieldgen"]);

        assert!(cli.input.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.struct_name.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.generator_config(), GeneratorConfig::default());
    }

    #[test]
    fn test_parse_all_options() {
        let cli = Cli::parse_from([
            "magick-fieldgen",
            "--input",
            "fixture.json",
            "-k",
            "frame",
            "-p",
            "Magick",
            "--name-width",
            "20",
            "--type-width",
            "30",
            "--format",
            "json",
            "--struct-name",
            "ImageDetails",
            "-v",
        ]);

        assert_eq!(cli.input, Some(PathBuf::from("fixture.json")));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.struct_name.as_deref(), Some("ImageDetails"));
        assert!(cli.verbose);

        let config = cli.generator_config();
        assert_eq!(config.record_key, "frame");
        assert_eq!(config.type_prefix, "Magick");
        assert_eq!(config.layout.name_width, 20);
        assert_eq!(config.layout.type_width, 30);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["magick-fieldgen", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

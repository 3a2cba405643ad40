//! # magick-fieldgen
//!
//! Bootstraps struct definitions from ImageMagick JSON fixtures.
//!
//! Given the output of `convert <file> json:` (a list of `{"image": {...}}`
//! records), infers a type for every field of the `image` objects and emits
//! one fixed-width declaration line per unique field, sorted:
//!
//! ```text
//! Width             int64                                                        `json:"width"`
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use magick_fieldgen::{Generator, OutputWriter};
//!
//! let set = Generator::default()
//!     .generate(r#"[{"image": {"width": 10, "gamma": nan}}]"#)
//!     .unwrap();
//! let text = OutputWriter::default().render(&set).unwrap();
//! assert!(text.starts_with("Gamma "));
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! stdin → normalize → decode → extract records → infer types → DeclarationSet → stdout
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Non-finite token normalization
pub mod normalize;

/// JSON decoding and record extraction
pub mod decode;

/// Field type inference
pub mod schema;

/// Declaration lines and rendering
pub mod output;

/// End-to-end generation pipeline
pub mod generator;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use generator::{Generator, GeneratorConfig};
pub use output::{DeclarationSet, FieldDeclaration, OutputFormat, OutputWriter};
pub use schema::FieldType;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

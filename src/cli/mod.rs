//! CLI module
//!
//! Command-line interface for the generator. Input comes from stdin (or
//! `--input`), declarations go to stdout, diagnostics go to stderr.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;

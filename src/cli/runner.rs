//! CLI runner - reads input, generates, writes output

use crate::cli::commands::Cli;
use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::output::OutputWriter;
use std::fs;
use std::io::{self, Read, Write};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run against the process stdin/stdout
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with(io::stdin().lock(), &mut out)
    }

    /// Run against arbitrary streams.
    ///
    /// `input` is only read when no `--input` file was given. Nothing is
    /// written to `output` unless generation succeeds.
    pub fn run_with<R: Read, W: Write>(&self, input: R, output: &mut W) -> Result<()> {
        let text = self.read_input(input)?;
        debug!("Read {} bytes of input", text.len());

        let set = Generator::new(self.cli.generator_config()).generate(&text)?;
        let rendered = self.writer().render(&set)?;

        output.write_all(rendered.as_bytes())?;
        output.flush()?;
        Ok(())
    }

    /// Read the whole input. Bytes that are not UTF-8 are malformed JSON,
    /// not an I/O failure.
    fn read_input<R: Read>(&self, mut input: R) -> Result<String> {
        let bytes = match &self.cli.input {
            Some(path) => {
                debug!("Reading input from {}", path.display());
                fs::read(path)?
            }
            None => {
                let mut bytes = Vec::new();
                input.read_to_end(&mut bytes)?;
                bytes
            }
        };

        String::from_utf8(bytes).map_err(|e| Error::decode(format!("invalid UTF-8: {e}")))
    }

    fn writer(&self) -> OutputWriter {
        let writer = OutputWriter::new(self.cli.format);
        match &self.cli.struct_name {
            Some(name) => writer.with_struct_name(name.clone()),
            None => writer,
        }
    }
}

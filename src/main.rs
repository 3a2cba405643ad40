//! magick-fieldgen CLI
//!
//! Reads ImageMagick JSON from stdin and prints struct field declarations

use clap::Parser;
use magick_fieldgen::cli::{Cli, Runner};
use magick_fieldgen::Error;
use tracing::Level;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries generated output
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        if let Error::Decode { message } = &e {
            tracing::debug!("Decode failure: {message}");
        }
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}

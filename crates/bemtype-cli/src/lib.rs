//! CLI logic for the bemtype generator.
//!
//! Reads a BEM file, parses it with [`BlockBuilder`] and writes the chosen
//! output format to a file or stdout.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use bemtype::{Block, BlockBuilder, BemError};

/// Run the bemtype CLI application
///
/// # Errors
///
/// Returns `BemError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
pub fn run(args: &Args) -> Result<(), BemError> {
    info!(
        input_path = args.input,
        output_path:? = args.output,
        format:? = args.format;
        "Processing block"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = BlockBuilder::new(app_config);
    let block = builder.parse(&source)?;
    let output = render(&builder, &block, args.format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            info!(output_file = path; "Output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn render(builder: &BlockBuilder, block: &Block, format: OutputFormat) -> Result<String, BemError> {
    match format {
        OutputFormat::Types => Ok(builder.render_types(block)),
        OutputFormat::Bem => Ok(builder.render_bem(block)),
        OutputFormat::Snapshot => toml::to_string_pretty(&block.snapshot())
            .map_err(|err| BemError::Io(io::Error::other(err))),
    }
}

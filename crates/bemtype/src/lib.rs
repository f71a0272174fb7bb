//! bemtype - static type declarations from BEM block notation.
//!
//! Parses a textual BEM (Block-Element-Modifier) description, exposes it as
//! a mutable [`Block`], and renders it back as canonical BEM text or as a
//! TypeScript type that enumerates every legal name, element and modifier.

pub mod config;
pub mod printer;

mod block;
mod error;

pub use bemtype_core::{
    BemModel, BemSnapshot, Element, FieldType, LineBreak, RecordType, TypeDeclaration, case,
};

pub use block::Block;
pub use error::BemError;

use log::{debug, info, trace};

use config::AppConfig;
use printer::{PrinterOptions, TypeScriptPrinter};

/// Options for [`parse`].
///
/// There are currently no recognized options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParseOptions {}

/// Parse BEM text into a block model.
///
/// # Errors
///
/// Returns [`BemError::Parse`] with every diagnostic of the failing parse
/// stage and a copy of `text` for rendering.
///
/// # Examples
///
/// ```
/// use bemtype::{ParseOptions, parse};
///
/// let model = parse("foo[bar,baz]\nqux", &ParseOptions::default())?;
///
/// assert_eq!(model.name(), "foo");
/// assert_eq!(model.modifiers(), ["bar", "baz"]);
/// assert_eq!(model.elements()[0].name(), "qux");
/// # Ok::<(), bemtype::BemError>(())
/// ```
pub fn parse(text: &str, _options: &ParseOptions) -> Result<BemModel, BemError> {
    bemtype_parser::parse(text).map_err(|err| BemError::new_parse_error(err, text))
}

/// Builder for parsing and rendering BEM blocks with a shared configuration.
///
/// # Examples
///
/// ```
/// use bemtype::{BlockBuilder, config::AppConfig};
///
/// let builder = BlockBuilder::new(AppConfig::default());
///
/// let block = builder.parse("button[primary]\nicon")?;
/// let types = builder.render_types(&block);
///
/// assert!(types.contains("modifiers: \"primary\""));
/// # Ok::<(), bemtype::BemError>(())
/// ```
#[derive(Debug, Default)]
pub struct BlockBuilder {
    config: AppConfig,
}

impl BlockBuilder {
    /// Create a new block builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source text into a [`Block`].
    ///
    /// # Errors
    ///
    /// Returns `BemError::Parse` for lexical, syntax and duplicate-name
    /// errors.
    pub fn parse(&self, source: &str) -> Result<Block, BemError> {
        info!("Parsing block");

        let model = parse(source, &ParseOptions::default())?;

        debug!(name = model.name(); "Block parsed successfully");
        trace!(model:?; "Parsed block");

        Ok(Block::new(model))
    }

    /// Render the block's type declaration as TypeScript.
    pub fn render_types(&self, block: &Block) -> String {
        let declaration = block.to_type_declaration();
        info!(identifier = declaration.identifier(); "Rendering type declaration");

        let printer = TypeScriptPrinter::new(PrinterOptions::from(self.config.output()));
        printer.print(&declaration)
    }

    /// Render the block as canonical BEM text.
    pub fn render_bem(&self, block: &Block) -> String {
        info!(name = block.name(); "Rendering BEM text");

        block.to_bem_text(Some(self.config.output().line_break().as_str()))
    }
}

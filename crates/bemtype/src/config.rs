//! Configuration types for bemtype output.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Every field is optional and falls back to its default.
//!
//! ```toml
//! [output]
//! line_break = "lf"
//! semicolons = false
//! indent = 2
//! ```
//!
//! # Example
//!
//! ```
//! # use bemtype::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.output().semicolons());
//! assert_eq!(config.output().indent(), 4);
//! ```

use serde::Deserialize;

use bemtype_core::LineBreak;

const DEFAULT_INDENT: usize = 4;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output formatting section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    pub fn new(output: OutputConfig) -> Self {
        Self { output }
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// How generated text is laid out.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Line separator for every generated line.
    #[serde(default)]
    line_break: LineBreak,

    /// Whether the type declaration ends with `;`.
    #[serde(default = "default_semicolons")]
    semicolons: bool,

    /// Spaces per nesting level in type declarations.
    #[serde(default = "default_indent")]
    indent: usize,
}

fn default_semicolons() -> bool {
    true
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            line_break: LineBreak::default(),
            semicolons: default_semicolons(),
            indent: default_indent(),
        }
    }
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`].
    ///
    /// # Arguments
    ///
    /// * `line_break` - Line separator for generated text.
    /// * `semicolons` - Whether declarations end with a trailing `;`.
    /// * `indent` - Spaces per nesting level.
    pub fn new(line_break: LineBreak, semicolons: bool, indent: usize) -> Self {
        Self {
            line_break,
            semicolons,
            indent,
        }
    }

    pub fn line_break(&self) -> LineBreak {
        self.line_break
    }

    pub fn semicolons(&self) -> bool {
        self.semicolons
    }

    pub fn indent(&self) -> usize {
        self.indent
    }
}

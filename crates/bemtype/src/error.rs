//! Error types for bemtype operations.
//!
//! This module provides the main error type [`BemError`] which wraps the
//! error conditions that can occur while turning BEM text into declarations.

use std::io;

use thiserror::Error;

use bemtype_parser::error::ParseError;

/// The main error type for bemtype operations.
///
/// The `Parse` variant keeps the source text next to the diagnostics so the
/// caller can render labeled snippets.
#[derive(Debug, Error)]
pub enum BemError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BemError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

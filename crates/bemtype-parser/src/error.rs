//! Error and diagnostic system for the BEM parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error message with optional error code, multiple source
//! locations, and help text. Multiple diagnostics are wrapped in [`ParseError`]
//! for returning from the parsing pipeline.
//!
//! # Example
//!
//! ```
//! # use bemtype_parser::error::{Diagnostic, ErrorCode};
//! # use bemtype_parser::Span;
//!
//! let span = Span::new(12..16);
//! let first_span = Span::new(4..8);
//!
//! let diag = Diagnostic::error("element `icon` is declared multiple times")
//!     .with_code(ErrorCode::E200)
//!     .with_label(span, "duplicate element")
//!     .with_secondary_label(first_span, "first declared here")
//!     .with_help("merge the modifiers into a single element line");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;

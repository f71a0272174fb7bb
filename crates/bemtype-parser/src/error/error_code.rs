//! Error codes for the BEM diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Lexer errors
//! - `E1xx` - Parser errors
//! - `E2xx` - Validation errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Lexer Errors (E0xx)
    // =========================================================================
    /// Unexpected character.
    ///
    /// A character was encountered that cannot appear in BEM notation.
    /// Names may contain letters, digits, `_` and `-`.
    E001,

    // =========================================================================
    // Parser Errors (E1xx)
    // =========================================================================
    /// Unexpected token.
    ///
    /// The parser encountered a token it did not expect at this position.
    E100,

    /// Incomplete input.
    ///
    /// The input ended inside a modifier list before the closing `]`.
    E101,

    /// Missing block name.
    ///
    /// The input is empty or does not start with a block name.
    E102,

    /// Empty modifier list.
    ///
    /// A `[]` group was written without any modifier inside.
    E103,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// Duplicate element.
    ///
    /// Two element lines name the same element (after case normalization).
    E200,

    /// Duplicate modifier.
    ///
    /// A modifier appears twice in the same modifier list (after case
    /// normalization).
    E201,

    /// Empty name.
    ///
    /// A block, element or modifier name has no letter or digit, so it
    /// normalizes to an empty string.
    E202,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer errors
            ErrorCode::E001 => "E001",
            // Parser errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            // Validation errors
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Lexer errors
            ErrorCode::E001 => "unexpected character",
            // Parser errors
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "incomplete input",
            ErrorCode::E102 => "missing block name",
            ErrorCode::E103 => "empty modifier list",
            // Validation errors
            ErrorCode::E200 => "duplicate element",
            ErrorCode::E201 => "duplicate modifier",
            ErrorCode::E202 => "empty name",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

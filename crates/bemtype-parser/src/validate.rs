//! Validation of parsed block syntax using the visitor pattern.
//!
//! Runs between parsing and lowering. The rendered type declaration keys
//! elements and modifiers by their param-cased names, so two names that
//! normalize to the same string would silently collapse. The validator
//! rejects them instead.
//!
//! ## Validations Performed
//!
//! - **Unique elements**: element names are unique after normalization (`E200`)
//! - **Unique modifiers**: each modifier list is free of duplicates after
//!   normalization (`E201`)
//! - **Non-empty names**: every name keeps at least one letter or digit after
//!   normalization (`E202`)

use indexmap::IndexMap;
use log::debug;

use bemtype_core::case::to_param_case;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    parser_types::{BlockSyntax, LineSyntax},
    span::{Span, Spanned},
};

/// Visitor trait for read-only traversal of block syntax.
///
/// Default implementations walk the whole tree so implementors override only
/// the methods they care about.
pub trait Visitor<'a> {
    fn visit_block(&mut self, block: &BlockSyntax<'a>) {
        self.visit_block_line(&block.block);
        self.visit_elements(&block.elements);
    }

    fn visit_block_line(&mut self, line: &LineSyntax<'a>) {
        self.visit_name(&line.name);
        self.visit_modifiers(&line.modifiers);
    }

    fn visit_elements(&mut self, elements: &[LineSyntax<'a>]) {
        for element in elements {
            self.visit_element(element);
        }
    }

    fn visit_element(&mut self, element: &LineSyntax<'a>) {
        self.visit_name(&element.name);
        self.visit_modifiers(&element.modifiers);
    }

    fn visit_name(&mut self, _name: &Spanned<&'a str>) {}

    fn visit_modifiers(&mut self, _modifiers: &[Spanned<&'a str>]) {}
}

/// Rejects names that are empty or collide after param-case normalization.
struct NameValidator {
    /// First span of each element, keyed by normalized name.
    elements: IndexMap<String, Span>,
    diagnostics: DiagnosticCollector,
}

impl NameValidator {
    fn new() -> Self {
        Self {
            elements: IndexMap::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    fn finish(self) -> Result<(), ParseError> {
        self.diagnostics.finish()
    }

    fn empty_name(&mut self, kind: &str, name: &Spanned<&str>) {
        debug!(kind, name = *name.inner(); "Name without letters or digits");
        self.diagnostics.emit(
            Diagnostic::error(format!(
                "{kind} `{}` has no letters or digits",
                name.inner()
            ))
            .with_code(ErrorCode::E202)
            .with_label(name.span(), "empty after normalization")
            .with_help("names need at least one letter or digit"),
        );
    }
}

impl<'a> Visitor<'a> for NameValidator {
    /// Only reached for the block line; element names are checked in
    /// `visit_element`.
    fn visit_name(&mut self, name: &Spanned<&'a str>) {
        if to_param_case(name.inner()).is_empty() {
            self.empty_name("block", name);
        }
    }

    fn visit_element(&mut self, element: &LineSyntax<'a>) {
        let key = to_param_case(element.name.inner());

        if key.is_empty() {
            self.empty_name("element", &element.name);
        } else if let Some(first) = self.elements.get(&key) {
            debug!(element = key.as_str(); "Duplicate element");
            self.diagnostics.emit(
                Diagnostic::error(format!(
                    "element `{}` is declared multiple times",
                    element.name.inner()
                ))
                .with_code(ErrorCode::E200)
                .with_label(element.name.span(), "duplicate element")
                .with_secondary_label(*first, "first declared here")
                .with_help("merge the modifiers into a single element line"),
            );
        } else {
            self.elements.insert(key, element.name.span());
        }

        self.visit_modifiers(&element.modifiers);
    }

    fn visit_modifiers(&mut self, modifiers: &[Spanned<&'a str>]) {
        let mut seen: IndexMap<String, Span> = IndexMap::new();

        for modifier in modifiers {
            let key = to_param_case(modifier.inner());

            if key.is_empty() {
                self.empty_name("modifier", modifier);
            } else if let Some(first) = seen.get(&key) {
                debug!(modifier = key.as_str(); "Duplicate modifier");
                self.diagnostics.emit(
                    Diagnostic::error(format!(
                        "modifier `{}` is listed multiple times",
                        modifier.inner()
                    ))
                    .with_code(ErrorCode::E201)
                    .with_label(modifier.span(), "duplicate modifier")
                    .with_secondary_label(*first, "first listed here")
                    .with_help("remove the repeated modifier"),
                );
            } else {
                seen.insert(key, modifier.span());
            }
        }
    }
}

/// Validate a parsed block, reporting every problem in one pass.
pub fn validate_block(block: &BlockSyntax<'_>) -> Result<(), ParseError> {
    let mut validator = NameValidator::new();
    validator.visit_block(block);
    validator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lexer::tokenize, parser::build_block};

    fn validate_source(source: &str) -> Result<(), ParseError> {
        let tokens = tokenize(source).expect("tokenize");
        let block = build_block(&tokens).expect("parse");
        validate_block(&block)
    }

    #[test]
    fn test_valid_block() {
        assert!(validate_source("button[primary,large]\nicon[small]\nlabel").is_ok());
    }

    #[test]
    fn test_same_modifier_on_block_and_element_is_allowed() {
        assert!(validate_source("button[active]\nicon[active]").is_ok());
    }

    #[test]
    fn test_element_name_may_match_block_name() {
        assert!(validate_source("button\nbutton").is_ok());
    }

    #[test]
    fn test_duplicate_element() {
        let err = validate_source("button\nicon\nlabel\nicon[small]").unwrap_err();

        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E200));
        assert_eq!(diag.labels()[0].span(), Span::new(18..22));
        assert_eq!(diag.labels()[1].span(), Span::new(7..11));
        assert_eq!(diag.labels()[1].message(), "first declared here");
    }

    #[test]
    fn test_duplicate_element_after_normalization() {
        let err = validate_source("form\nsubmitButton\nsubmit-button").unwrap_err();

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(
            err.diagnostics()[0].message(),
            "element `submit-button` is declared multiple times"
        );
    }

    #[test]
    fn test_duplicate_block_modifier() {
        let err = validate_source("button[dark,large,dark]").unwrap_err();

        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E201));
        assert_eq!(diag.labels()[0].span(), Span::new(18..22));
        assert_eq!(diag.labels()[1].span(), Span::new(7..11));
    }

    #[test]
    fn test_reports_all_duplicates() {
        let err = validate_source("button[a,a]\nicon[b,B]\nicon").unwrap_err();

        let codes: Vec<_> = err.diagnostics().iter().map(|d| d.code()).collect();
        assert_eq!(
            codes,
            vec![
                Some(ErrorCode::E201),
                Some(ErrorCode::E201),
                Some(ErrorCode::E200)
            ]
        );
    }

    #[test]
    fn test_block_name_without_letters() {
        let err = validate_source("--\nicon").unwrap_err();

        assert_eq!(err.diagnostics().len(), 1);
        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E202));
        assert_eq!(diag.message(), "block `--` has no letters or digits");
        assert_eq!(diag.labels()[0].span(), Span::new(0..2));
    }

    #[test]
    fn test_element_and_modifier_names_without_letters() {
        let err = validate_source("button[_,large]\n-[small]\n-").unwrap_err();

        let messages: Vec<_> = err.diagnostics().iter().map(|d| d.message()).collect();
        assert_eq!(
            messages,
            vec![
                "modifier `_` has no letters or digits",
                "element `-` has no letters or digits",
                "element `-` has no letters or digits",
            ]
        );
        assert!(
            err.diagnostics()
                .iter()
                .all(|d| d.code() == Some(ErrorCode::E202))
        );
    }

    #[test]
    fn test_names_with_separators_around_letters_are_valid() {
        assert!(validate_source("-button_\n_icon[-large-]").is_ok());
    }
}

//! Unit tests for the winnow parser
//!
//! These tests drive the lexer and parser together over complete sources and
//! check both accepted layouts and the diagnostics of rejected ones.

use crate::{
    error::{Diagnostic, ErrorCode},
    lexer, parser,
    parser_types::{BlockSyntax, LineSyntax},
    span::Span,
};

/// Block name, block modifiers and `(element, modifiers)` pairs
type Flat = (String, Vec<String>, Vec<(String, Vec<String>)>);

/// Parse a source string into owned names for easy comparison
fn parse_source(source: &str) -> Result<Flat, String> {
    let tokens = lexer::tokenize(source).map_err(|err| format!("Lexer error: {}", err))?;
    let block = parser::build_block(&tokens).map_err(|err| format!("Parser error: {}", err))?;
    Ok(flatten(&block))
}

fn flatten(block: &BlockSyntax<'_>) -> Flat {
    let modifiers = |line: &LineSyntax<'_>| {
        line.modifiers.iter().map(|m| m.inner().to_string()).collect::<Vec<_>>()
    };
    (
        block.block.name.inner().to_string(),
        modifiers(&block.block),
        block
            .elements
            .iter()
            .map(|e| (e.name.inner().to_string(), modifiers(e)))
            .collect(),
    )
}

fn assert_parses_successfully(source: &str) {
    if let Err(e) = parse_source(source) {
        panic!("Expected parsing to succeed for {source:?}, but got error: {e}");
    }
}

/// Parse a source the lexer accepts and return the parser diagnostic
fn parse_error(source: &str) -> Diagnostic {
    let tokens = lexer::tokenize(source).expect("Lexer should succeed");
    match parser::build_block(&tokens) {
        Ok(block) => panic!("Expected parsing to fail, got {block:?}"),
        Err(diag) => diag,
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

mod accepted {
    use super::*;

    #[test]
    fn test_block_only() {
        let (name, modifiers, elements) = parse_source("foo").unwrap();

        assert_eq!(name, "foo");
        assert!(modifiers.is_empty());
        assert!(elements.is_empty());
    }

    #[test]
    fn test_block_with_modifiers_and_element() {
        let (name, modifiers, elements) = parse_source("foo[bar,baz]\nqux").unwrap();

        assert_eq!(name, "foo");
        assert_eq!(modifiers, owned(&["bar", "baz"]));
        assert_eq!(elements, vec![("qux".to_string(), vec![])]);
    }

    #[test]
    fn test_element_with_modifiers() {
        let (_, modifiers, elements) = parse_source("foo\nqux[a,b]").unwrap();

        assert!(modifiers.is_empty());
        assert_eq!(elements, vec![("qux".to_string(), owned(&["a", "b"]))]);
    }

    #[test]
    fn test_element_order_is_preserved() {
        let (_, _, elements) = parse_source("menu\nitem\nseparator\nheader").unwrap();

        let names: Vec<_> = elements.into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, owned(&["item", "separator", "header"]));
    }

    #[test]
    fn test_modifier_order_is_preserved() {
        let (_, modifiers, _) = parse_source("button[zeta,alpha,mid]").unwrap();

        assert_eq!(modifiers, owned(&["zeta", "alpha", "mid"]));
    }

    #[test]
    fn test_layout_variations() {
        assert_parses_successfully("foo\n");
        assert_parses_successfully("foo\r\nbar\r\n");
        assert_parses_successfully("\n\nfoo\n\n\nbar\n\n");
        assert_parses_successfully("foo\n    bar[a]\n\tbaz");
        assert_parses_successfully("foo [ a , b ]\nbar [c]  ");
        assert_parses_successfully("   \nfoo\n   \n");
    }

    #[test]
    fn test_indented_elements_match_flat_ones() {
        let flat = parse_source("foo[a]\nbar[b,c]\nbaz").unwrap();
        let indented = parse_source("\n  foo [a]\n\n    bar [ b, c ]\n    baz\n").unwrap();

        assert_eq!(flat, indented);
    }

    #[test]
    fn test_names_keep_their_spelling() {
        let (name, modifiers, elements) =
            parse_source("SearchForm[dark_mode]\nsubmit-Button[isPrimary]").unwrap();

        assert_eq!(name, "SearchForm");
        assert_eq!(modifiers, owned(&["dark_mode"]));
        assert_eq!(elements[0], ("submit-Button".to_string(), owned(&["isPrimary"])));
    }
}

mod rejected {
    use super::*;

    #[test]
    fn test_empty_input() {
        let diag = parse_error("");

        assert_eq!(diag.code(), Some(ErrorCode::E102));
        assert_eq!(diag.labels()[0].span(), Span::default());
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(parse_error("\n  \n").code(), Some(ErrorCode::E102));
    }

    #[test]
    fn test_input_starting_with_bracket() {
        let diag = parse_error("[a]\nfoo");

        assert_eq!(diag.code(), Some(ErrorCode::E102));
        assert_eq!(diag.labels()[0].span(), Span::new(0..1));
    }

    #[test]
    fn test_empty_modifier_list() {
        let diag = parse_error("foo[]");

        assert_eq!(diag.code(), Some(ErrorCode::E103));
        assert_eq!(diag.labels()[0].span(), Span::new(3..5));
    }

    #[test]
    fn test_empty_modifier_list_with_spaces() {
        assert_eq!(parse_error("foo\nbar[  ]").code(), Some(ErrorCode::E103));
    }

    #[test]
    fn test_unclosed_modifier_list_at_eof() {
        let diag = parse_error("foo[a");

        assert_eq!(diag.code(), Some(ErrorCode::E101));
        assert_eq!(diag.message(), "unclosed modifier list");
    }

    #[test]
    fn test_unclosed_modifier_list_at_line_end() {
        let diag = parse_error("foo[a,\nb]");

        assert_eq!(diag.code(), Some(ErrorCode::E101));
        assert_eq!(diag.labels()[0].span(), Span::new(3..6));
    }

    #[test]
    fn test_trailing_comma() {
        let diag = parse_error("foo[a,]");

        assert_eq!(diag.code(), Some(ErrorCode::E100));
        assert_eq!(diag.message(), "unexpected `]`");
        assert_eq!(diag.labels()[0].message(), "expected modifier name");
    }

    #[test]
    fn test_missing_comma() {
        let diag = parse_error("foo[a b]");

        assert_eq!(diag.code(), Some(ErrorCode::E100));
        assert_eq!(diag.labels()[0].span(), Span::new(6..7));
        assert_eq!(diag.labels()[0].message(), "expected `,` or `]`");
    }

    #[test]
    fn test_two_modifier_lists() {
        let diag = parse_error("foo[a][b]");

        assert_eq!(diag.code(), Some(ErrorCode::E100));
        assert_eq!(diag.labels()[0].span(), Span::new(6..7));
    }

    #[test]
    fn test_two_names_on_one_line() {
        let diag = parse_error("foo\nbar baz");

        assert_eq!(diag.code(), Some(ErrorCode::E100));
        assert_eq!(diag.message(), "unexpected `baz`");
    }

    #[test]
    fn test_element_line_without_name() {
        let diag = parse_error("foo\n[a]");

        assert_eq!(diag.code(), Some(ErrorCode::E100));
        assert_eq!(diag.labels()[0].message(), "expected element name");
        assert_eq!(diag.labels()[0].span(), Span::new(4..5));
    }

    #[test]
    fn test_stray_closing_bracket() {
        assert_eq!(parse_error("foo]").code(), Some(ErrorCode::E100));
    }

    #[test]
    fn test_stray_comma_between_lines() {
        assert_eq!(parse_error("foo,\nbar").code(), Some(ErrorCode::E100));
    }
}

mod validated {
    use crate::{error::ErrorCode, parse};

    fn codes(source: &str) -> Vec<Option<ErrorCode>> {
        match parse(source) {
            Ok(model) => panic!("Expected {source:?} to be rejected, got {model:?}"),
            Err(err) => err.diagnostics().iter().map(|d| d.code()).collect(),
        }
    }

    #[test]
    fn test_separator_only_block_name() {
        // Would render as an empty first line, turning `icon` into the block.
        assert_eq!(codes("-\nicon"), vec![Some(ErrorCode::E202)]);
        assert_eq!(codes("__"), vec![Some(ErrorCode::E202)]);
    }

    #[test]
    fn test_separator_only_element_and_modifier() {
        assert_eq!(
            codes("button[-]\n_"),
            vec![Some(ErrorCode::E202), Some(ErrorCode::E202)]
        );
    }

    #[test]
    fn test_separators_around_letters_are_accepted() {
        let model = parse("-button-\n__icon[--large]").unwrap();

        assert_eq!(model.name(), "button");
        assert_eq!(model.elements()[0].name(), "__icon");
        assert_eq!(model.elements()[0].modifiers(), ["--large"]);
    }
}

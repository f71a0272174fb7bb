//! # bemtype Parser
//!
//! Parser for BEM block notation. This crate turns source text such as
//!
//! ```text
//! search-form[dark]
//! input[focused,disabled]
//! submit
//! ```
//!
//! into a [`bemtype_core::BemModel`].
//!
//! ## Usage
//!
//! ```
//! # use bemtype_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let model = parse("button[primary]\nicon")?;
//!
//!     assert_eq!(model.name(), "button");
//!     assert_eq!(model.elements().len(), 1);
//!     Ok(())
//! }
//! ```

pub mod error;

mod lexer;
mod parser;
#[cfg(test)]
mod parser_tests;
mod parser_types;
mod span;
mod tokens;
mod validate;

pub use span::{Span, Spanned};

use log::{debug, info, trace};

use bemtype_core::{BemModel, Element};

use error::ParseError;
use parser_types::{BlockSyntax, LineSyntax};

/// Parse BEM source text into a block model.
///
/// This is the main entry point of the crate. It runs the whole pipeline:
///
/// 1. **Tokenize** - Convert source text to tokens
/// 2. **Parse** - Build the block syntax from tokens
/// 3. **Validate** - Reject duplicate elements and modifiers
/// 4. **Lower** - Transform the syntax into a [`BemModel`]
///
/// Names are stored exactly as written; normalization happens when the
/// model is read or rendered.
///
/// # Errors
///
/// Returns a [`ParseError`] holding every diagnostic of the first failing
/// stage.
pub fn parse(source: &str) -> Result<BemModel, ParseError> {
    info!(source_len = source.len(); "Parsing block");

    let tokens = lexer::tokenize(source)?;
    debug!(tokens_count = tokens.len(); "Tokenized source");

    let syntax = parser::build_block(&tokens)?;
    debug!(
        elements_count = syntax.elements.len(),
        span:? = syntax.span();
        "Parsed block syntax"
    );

    validate::validate_block(&syntax)?;

    let model = lower(&syntax);
    trace!(model:?; "Lowered block model");

    Ok(model)
}

fn lower(syntax: &BlockSyntax<'_>) -> BemModel {
    let elements = syntax
        .elements
        .iter()
        .map(|element| Element::new(*element.name.inner(), modifier_names(element)))
        .collect();

    BemModel::new(
        *syntax.block.name.inner(),
        elements,
        modifier_names(&syntax.block),
    )
}

fn modifier_names(line: &LineSyntax<'_>) -> Vec<String> {
    line.modifiers
        .iter()
        .map(|modifier| modifier.inner().to_string())
        .collect()
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::error::ErrorCode;
    use bemtype_core::{case::to_param_case, text::render};
    use proptest::prelude::*;

    /// Names with at least one letter, optionally wrapped in separators.
    fn name_strategy() -> impl Strategy<Value = String> {
        "[_-]{0,2}[a-zA-Z][a-zA-Z0-9_-]{0,10}"
    }

    /// Names that stay distinct after param-case normalization.
    fn distinct_names(max: usize) -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(name_strategy(), 0..max).prop_map(|names| {
            let mut seen = std::collections::HashSet::new();
            names
                .into_iter()
                .filter(|name| seen.insert(to_param_case(name)))
                .collect()
        })
    }

    fn model_strategy() -> impl Strategy<Value = BemModel> {
        (
            name_strategy(),
            distinct_names(5),
            prop::collection::vec(distinct_names(4), 0..5),
        )
            .prop_flat_map(|(name, modifiers, element_modifiers)| {
                distinct_names(element_modifiers.len() + 1).prop_map(move |element_names| {
                    let elements = element_names
                        .into_iter()
                        .zip(element_modifiers.clone())
                        .map(|(element, modifiers)| Element::new(element, modifiers))
                        .collect();
                    BemModel::new(name.clone(), elements, modifiers.clone())
                })
            })
    }

    proptest! {
        #[test]
        fn rendered_text_reparses_to_same_snapshot(model in model_strategy()) {
            let text = render(&model, "\n");
            let reparsed = parse(&text).unwrap();

            let mut expected = model.snapshot();
            expected.name = model.name();
            prop_assert_eq!(reparsed.snapshot(), expected);
        }

        #[test]
        fn separator_only_block_name_is_rejected(
            name in "[_-]{1,4}",
            model in model_strategy(),
        ) {
            let mut text = render(&model, "\n");
            text.replace_range(..model.name().len(), &name);

            let err = parse(&text).unwrap_err();
            prop_assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E202));
        }

        #[test]
        fn crlf_rendering_reparses(model in model_strategy()) {
            let lf = parse(&render(&model, "\n")).unwrap();
            let crlf = parse(&render(&model, "\r\n")).unwrap();

            prop_assert_eq!(lf.snapshot(), crlf.snapshot());
        }
    }
}

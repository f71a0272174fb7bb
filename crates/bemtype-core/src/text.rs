//! Canonical BEM notation output.
//!
//! The rendered form is one line per entity: the block first, then each
//! element in order. A non-empty modifier set follows its owner as
//! `[mod1,mod2]`. Every line, including the last, ends with the configured
//! line break.
//!
//! ```text
//! search-form[dark]
//! input[focused,disabled]
//! submit
//! ```

use crate::model::BemModel;

/// Render `model` as BEM notation text.
///
/// The block name is written in param case (as returned by
/// [`BemModel::name`]); element names and modifiers are written as stored.
///
/// # Examples
///
/// ```
/// use bemtype_core::{BemModel, Element, text::render};
///
/// let model = BemModel::new(
///     "foo",
///     vec![Element::new("qux", Vec::<String>::new())],
///     vec!["bar".to_string(), "baz".to_string()],
/// );
///
/// assert_eq!(render(&model, "\n"), "foo[bar,baz]\nqux\n");
/// ```
pub fn render(model: &BemModel, line_break: &str) -> String {
    let mut out = model.name();
    push_modifiers(&mut out, model.modifiers_ref());

    for element in model.elements_ref() {
        out.push_str(line_break);
        out.push_str(element.name());
        push_modifiers(&mut out, element.modifiers());
    }

    out.push_str(line_break);
    out
}

fn push_modifiers(out: &mut String, modifiers: &[String]) {
    if modifiers.is_empty() {
        return;
    }
    out.push('[');
    out.push_str(&modifiers.join(","));
    out.push(']');
}

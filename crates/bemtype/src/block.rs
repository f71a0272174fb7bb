//! The stateful [`Block`] wrapper.

use bemtype_core::{
    BemModel, BemSnapshot, Element, TypeDeclaration, build_type_declaration, native_line_break,
    text,
};

use crate::printer::{PrinterOptions, TypeScriptPrinter};

/// A BEM block with its transforms exposed as methods.
///
/// Reads return independent copies and writes replace whole sequences, so a
/// `Block` never shares its elements or modifiers with the caller.
///
/// # Examples
///
/// ```
/// use bemtype::{Block, ParseOptions, parse, printer::PrinterOptions};
/// use bemtype_core::LineBreak;
///
/// let block = Block::from(parse("foo[bar,baz]\nqux", &ParseOptions::default())?);
///
/// assert_eq!(block.to_bem_text(Some("\n")), "foo[bar,baz]\nqux\n");
///
/// let options = PrinterOptions::default().with_line_break(LineBreak::Lf);
/// assert!(block.to_type_declaration_text(&options).starts_with("export type FooBlock = {"));
/// # Ok::<(), bemtype::BemError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    model: BemModel,
}

impl Block {
    pub fn new(model: BemModel) -> Self {
        Self { model }
    }

    /// The block name in param case.
    pub fn name(&self) -> String {
        self.model.name()
    }

    /// Store a new block name as given.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.model.set_name(name);
    }

    pub fn elements(&self) -> Vec<Element> {
        self.model.elements()
    }

    pub fn set_elements(&mut self, elements: Vec<Element>) {
        self.model.set_elements(elements);
    }

    pub fn modifiers(&self) -> Vec<String> {
        self.model.modifiers()
    }

    pub fn set_modifiers(&mut self, modifiers: Vec<String>) {
        self.model.set_modifiers(modifiers);
    }

    /// The abstract type declaration for this block.
    pub fn to_type_declaration(&self) -> TypeDeclaration {
        build_type_declaration(&self.model)
    }

    /// The type declaration printed as TypeScript source.
    pub fn to_type_declaration_text(&self, options: &PrinterOptions) -> String {
        TypeScriptPrinter::new(*options).print(&self.to_type_declaration())
    }

    /// The block in canonical BEM notation.
    ///
    /// `line_break` defaults to the platform's native separator.
    pub fn to_bem_text(&self, line_break: Option<&str>) -> String {
        text::render(&self.model, line_break.unwrap_or(native_line_break()))
    }

    /// A deep copy of the raw, unnormalized block.
    pub fn snapshot(&self) -> BemSnapshot {
        self.model.snapshot()
    }

    pub fn model(&self) -> &BemModel {
        &self.model
    }

    pub fn into_model(self) -> BemModel {
        self.model
    }
}

impl From<BemModel> for Block {
    fn from(model: BemModel) -> Self {
        Self::new(model)
    }
}

impl From<BemSnapshot> for Block {
    fn from(snapshot: BemSnapshot) -> Self {
        Self::new(BemModel::from(snapshot))
    }
}

//! Syntax tree produced by the parser.
//!
//! Leaf values keep their source spans so the validator can point at the
//! offending name. Composite types derive their span from their parts.

use crate::span::{Span, Spanned};

/// One line of BEM notation: a name with an optional modifier list.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSyntax<'src> {
    pub name: Spanned<&'src str>,
    pub modifiers: Vec<Spanned<&'src str>>,
}

impl<'src> LineSyntax<'src> {
    pub fn new(name: Spanned<&'src str>, modifiers: Vec<Spanned<&'src str>>) -> Self {
        Self { name, modifiers }
    }

    pub fn span(&self) -> Span {
        self.modifiers
            .iter()
            .fold(self.name.span(), |acc, modifier| acc.union(modifier.span()))
    }
}

/// A whole block description: the block line followed by its element lines.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockSyntax<'src> {
    pub block: LineSyntax<'src>,
    pub elements: Vec<LineSyntax<'src>>,
}

impl BlockSyntax<'_> {
    pub fn span(&self) -> Span {
        self.elements
            .iter()
            .fold(self.block.span(), |acc, element| acc.union(element.span()))
    }
}

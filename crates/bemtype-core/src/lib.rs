//! bemtype Core Types and Transforms
//!
//! This crate provides the foundational model and pure transforms for BEM
//! (Block-Element-Modifier) block descriptions. It includes:
//!
//! - **Naming**: param-case and pascal-case conversion ([`case`] module)
//! - **Model**: the structural block model ([`BemModel`], [`Element`])
//! - **Declarations**: abstract type declarations ([`declaration`] module)
//! - **Text**: canonical BEM notation output ([`text`] module)
//! - **Line breaks**: configurable line separators ([`LineBreak`])

pub mod case;
pub mod declaration;
pub mod model;
pub mod text;

mod line_break;

pub use declaration::{FieldType, RecordType, TypeDeclaration, build_type_declaration};
pub use line_break::{LineBreak, native_line_break};
pub use model::{BemModel, BemSnapshot, Element};

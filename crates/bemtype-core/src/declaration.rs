//! Abstract type declarations describing a BEM block.
//!
//! [`build_type_declaration`] maps a [`BemModel`] to a [`TypeDeclaration`]:
//! a named record type with the fields `name`, `elements` and `modifiers`
//! whose types enumerate every legal value. The declaration is a plain value;
//! turning it into source text is the job of a printer.
//!
//! Field order always mirrors the input order. Two structurally equal models
//! produce equal declarations.

use indexmap::{IndexMap, IndexSet};
use log::trace;

use crate::{
    case::{to_param_case, to_pascal_case},
    model::BemModel,
};

/// Suffix appended to the block name to form the declaration identifier.
pub const IDENTIFIER_SUFFIX: &str = "Block";

/// The type of a single record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// One of an enumerated, ordered set of exact string values.
    ///
    /// Never empty; an empty set is expressed by one of the sentinels below.
    StringUnion(IndexSet<String>),
    /// The field carries no value (an element without modifiers).
    Undefined,
    /// No value is valid (a block without block-level modifiers).
    Never,
    /// A nested record type.
    Record(RecordType),
}

impl FieldType {
    /// Build a string union from `values`, or return `empty` when there are none.
    ///
    /// Values are kept in first-seen order; repeated values are dropped.
    pub fn union_or<I, S>(values: I, empty: FieldType) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: IndexSet<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            empty
        } else {
            Self::StringUnion(values)
        }
    }

    /// The literal values if this is a string union.
    pub fn literals(&self) -> Option<impl Iterator<Item = &str>> {
        match self {
            Self::StringUnion(values) => Some(values.iter().map(String::as_str)),
            _ => None,
        }
    }
}

/// An ordered mapping from field name to [`FieldType`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordType {
    fields: IndexMap<String, FieldType>,
}

impl RecordType {
    /// Create an empty record type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keeping the position of an existing field with the same name.
    pub fn with_field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.insert(name.into(), field_type);
        self
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldType> {
        self.fields.get(name)
    }

    /// Iterate over the fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldType)> {
        self.fields.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldType)> for RecordType {
    fn from_iter<T: IntoIterator<Item = (K, FieldType)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, ty)| (name.into(), ty))
                .collect(),
        }
    }
}

/// A named record type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    exported: bool,
    identifier: String,
    shape: RecordType,
}

impl TypeDeclaration {
    /// Create a new declaration.
    pub fn new(exported: bool, identifier: impl Into<String>, shape: RecordType) -> Self {
        Self {
            exported,
            identifier: identifier.into(),
            shape,
        }
    }

    /// Whether the declaration is exported from its module.
    pub fn exported(&self) -> bool {
        self.exported
    }

    /// The declared type name.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The record type being declared.
    pub fn shape(&self) -> &RecordType {
        &self.shape
    }
}

/// Build the type declaration describing every legal combination of `model`.
///
/// - `identifier` is the pascal-cased block name followed by `Block`.
/// - `name` is a single-value union of the param-cased block name.
/// - `elements` is a record keyed by param-cased element name; each field is
///   the union of the element's param-cased modifiers, or
///   [`FieldType::Undefined`] when it has none.
/// - `modifiers` is the union of the param-cased block modifiers, or
///   [`FieldType::Never`] when there are none.
///
/// # Examples
///
/// ```
/// use bemtype_core::{BemModel, Element, FieldType, build_type_declaration};
///
/// let model = BemModel::new(
///     "foo",
///     vec![Element::new("qux", Vec::<String>::new())],
///     vec!["bar".to_string(), "baz".to_string()],
/// );
///
/// let decl = build_type_declaration(&model);
/// assert_eq!(decl.identifier(), "FooBlock");
///
/// let elements = decl.shape().get("elements");
/// let Some(FieldType::Record(elements)) = elements else { panic!("elements record") };
/// assert_eq!(elements.get("qux"), Some(&FieldType::Undefined));
/// ```
pub fn build_type_declaration(model: &BemModel) -> TypeDeclaration {
    let name = model.name();
    let identifier = to_pascal_case(&format!("{name}{IDENTIFIER_SUFFIX}"));

    let elements: RecordType = model
        .elements_ref()
        .iter()
        .map(|element| {
            let modifiers = element.modifiers().iter().map(|m| to_param_case(m));
            (
                to_param_case(element.name()),
                FieldType::union_or(modifiers, FieldType::Undefined),
            )
        })
        .collect();

    let modifiers = FieldType::union_or(
        model.modifiers_ref().iter().map(|m| to_param_case(m)),
        FieldType::Never,
    );

    let shape = RecordType::new()
        .with_field("name", FieldType::union_or([name], FieldType::Never))
        .with_field("elements", FieldType::Record(elements))
        .with_field("modifiers", modifiers);

    trace!(identifier = identifier.as_str(), fields = shape.len(); "Built type declaration");

    TypeDeclaration::new(true, identifier, shape)
}

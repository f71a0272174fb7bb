//! The structural model of a BEM block.
//!
//! A [`BemModel`] owns a block name, its ordered [`Element`]s and its ordered
//! block-level modifiers. Reads hand out independent copies and writes replace
//! whole sequences, so a value obtained from the model can be changed freely
//! without affecting the model, and vice versa.
//!
//! The model trusts its input: names are expected to be non-empty, element
//! names unique within the block, and modifiers unique within each set. The
//! parser enforces these rules before a model is constructed.

use serde::{Deserialize, Serialize};

use crate::case::to_param_case;

/// A named sub-part of a block with its own modifier set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    name: String,
    #[serde(default)]
    modifiers: Vec<String>,
}

impl Element {
    /// Create a new element.
    ///
    /// # Arguments
    ///
    /// * `name` - The element name as written in the source
    /// * `modifiers` - The element's modifiers in declaration order
    pub fn new<I, S>(name: impl Into<String>, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            modifiers: modifiers.into_iter().map(Into::into).collect(),
        }
    }

    /// The element name as stored.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element modifiers in declaration order.
    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    /// Returns `true` if the element declares at least one modifier.
    pub fn has_modifiers(&self) -> bool {
        !self.modifiers.is_empty()
    }

    /// Replace the element's modifier set.
    pub fn set_modifiers<I, S>(&mut self, modifiers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifiers = modifiers.into_iter().map(Into::into).collect();
    }
}

/// A raw, unnormalized copy of a [`BemModel`].
///
/// Snapshots compare structurally and serialize with serde, which makes them
/// the value of choice for equality checks, debugging output and export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BemSnapshot {
    /// The block name as stored.
    pub name: String,
    /// The block elements in declaration order.
    #[serde(default)]
    pub elements: Vec<Element>,
    /// The block-level modifiers in declaration order.
    #[serde(default)]
    pub modifiers: Vec<String>,
}

/// The in-memory representation of a BEM block.
///
/// # Examples
///
/// ```
/// use bemtype_core::{BemModel, Element};
///
/// let mut model = BemModel::new(
///     "SearchForm",
///     vec![Element::new("input", ["focused"])],
///     vec!["dark".to_string()],
/// );
///
/// // Reads normalize the name but keep the stored value intact.
/// assert_eq!(model.name(), "search-form");
/// assert_eq!(model.snapshot().name, "SearchForm");
///
/// // Writes replace whole sequences.
/// model.set_modifiers(vec!["light".to_string()]);
/// assert_eq!(model.modifiers(), ["light"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BemModel {
    name: String,
    elements: Vec<Element>,
    modifiers: Vec<String>,
}

impl BemModel {
    /// Create a new model.
    ///
    /// # Arguments
    ///
    /// * `name` - The block name as written in the source
    /// * `elements` - The block elements in declaration order
    /// * `modifiers` - The block-level modifiers in declaration order
    pub fn new(name: impl Into<String>, elements: Vec<Element>, modifiers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            elements,
            modifiers,
        }
    }

    /// The block name in param case.
    ///
    /// Normalization happens on read; the stored value is kept as given to
    /// [`set_name`](Self::set_name) and is visible through
    /// [`snapshot`](Self::snapshot).
    pub fn name(&self) -> String {
        to_param_case(&self.name)
    }

    /// Store a new block name as given.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// An independent copy of the block elements.
    pub fn elements(&self) -> Vec<Element> {
        self.elements.clone()
    }

    /// Replace the full element sequence.
    pub fn set_elements(&mut self, elements: Vec<Element>) {
        self.elements = elements;
    }

    /// An independent copy of the block-level modifiers.
    pub fn modifiers(&self) -> Vec<String> {
        self.modifiers.clone()
    }

    /// Replace the full block-level modifier sequence.
    pub fn set_modifiers(&mut self, modifiers: Vec<String>) {
        self.modifiers = modifiers;
    }

    /// A deep copy of the raw model.
    pub fn snapshot(&self) -> BemSnapshot {
        BemSnapshot {
            name: self.name.clone(),
            elements: self.elements.clone(),
            modifiers: self.modifiers.clone(),
        }
    }

    /// Borrow the elements for read-only traversal.
    pub(crate) fn elements_ref(&self) -> &[Element] {
        &self.elements
    }

    /// Borrow the block-level modifiers for read-only traversal.
    pub(crate) fn modifiers_ref(&self) -> &[String] {
        &self.modifiers
    }
}

impl From<BemSnapshot> for BemModel {
    fn from(snapshot: BemSnapshot) -> Self {
        Self {
            name: snapshot.name,
            elements: snapshot.elements,
            modifiers: snapshot.modifiers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> BemModel {
        BemModel::new(
            "MenuBar",
            vec![
                Element::new("item", ["active", "disabled"]),
                Element::new("separator", Vec::<String>::new()),
            ],
            vec!["vertical".to_string()],
        )
    }

    #[test]
    fn test_name_is_normalized_on_read() {
        let model = sample_model();
        assert_eq!(model.name(), "menu-bar");
        assert_eq!(model.snapshot().name, "MenuBar");
    }

    #[test]
    fn test_set_name_stores_raw_value() {
        let mut model = sample_model();
        model.set_name("Side_Panel");

        assert_eq!(model.name(), "side-panel");
        assert_eq!(model.snapshot().name, "Side_Panel");
    }

    #[test]
    fn test_elements_getter_returns_independent_copy() {
        let model = sample_model();

        let mut elements = model.elements();
        elements[0].set_modifiers(["changed"]);
        elements.push(Element::new("extra", ["x"]));

        let fresh = model.elements();
        assert_eq!(fresh.len(), 2);
        assert_eq!(fresh[0].modifiers(), ["active", "disabled"]);
    }

    #[test]
    fn test_modifiers_getter_returns_independent_copy() {
        let model = sample_model();

        let mut modifiers = model.modifiers();
        modifiers.clear();

        assert_eq!(model.modifiers(), ["vertical"]);
    }

    #[test]
    fn test_setters_replace_whole_sequences() {
        let mut model = sample_model();

        model.set_elements(vec![Element::new("icon", Vec::<String>::new())]);
        model.set_modifiers(Vec::new());

        let snapshot = model.snapshot();
        assert_eq!(snapshot.elements, vec![Element::new("icon", Vec::<String>::new())]);
        assert!(snapshot.modifiers.is_empty());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut model = sample_model();
        let before = model.snapshot();

        model.set_modifiers(vec!["horizontal".to_string()]);

        assert_eq!(before.modifiers, vec!["vertical".to_string()]);
        assert_ne!(before, model.snapshot());
    }

    #[test]
    fn test_model_from_snapshot() {
        let model = sample_model();
        let rebuilt = BemModel::from(model.snapshot());
        assert_eq!(rebuilt, model);
    }

    #[test]
    fn test_element_accessors() {
        let element = Element::new("title", ["large"]);
        assert_eq!(element.name(), "title");
        assert!(element.has_modifiers());
        assert!(!Element::new("body", Vec::<String>::new()).has_modifiers());
    }
}

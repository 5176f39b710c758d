//! Formal context: the object/attribute incidence relation consumed by the
//! lattice engine.
//!
//! Objects (labels) and attributes (tokens) are interned into id tables in
//! sorted order, so the same relation always yields the same context and the
//! engine's enumeration order is reproducible.

use std::collections::{HashMap, HashSet};

use crate::lexicon::token_set;

/// A finite binary relation between a set of objects and a set of attributes.
#[derive(Debug, Clone, Default)]
pub struct FormalContext {
    objects: Vec<String>,
    attributes: Vec<String>,
    rows: Vec<HashSet<u32>>,
}

impl FormalContext {
    /// Build a context from an explicit object → attribute-set relation.
    /// Objects with an empty attribute set are skipped: a degenerate object
    /// would carry an empty intent and match everything.
    pub fn from_relation(relation: &HashMap<String, HashSet<String>>) -> Self {
        let mut objects: Vec<&String> = relation
            .iter()
            .filter(|(_, attrs)| !attrs.is_empty())
            .map(|(object, _)| object)
            .collect();
        objects.sort();

        let mut attributes: Vec<&String> = relation
            .values()
            .flatten()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        attributes.sort();

        let attribute_ids: HashMap<&str, u32> = attributes
            .iter()
            .enumerate()
            .map(|(id, attribute)| (attribute.as_str(), id as u32))
            .collect();

        let rows = objects
            .iter()
            .map(|object| {
                relation[*object]
                    .iter()
                    .map(|attribute| attribute_ids[attribute.as_str()])
                    .collect()
            })
            .collect();

        Self {
            objects: objects.into_iter().cloned().collect(),
            attributes: attributes.into_iter().cloned().collect(),
            rows,
        }
    }

    /// Build a context from raw labels, deriving each label's attribute set
    /// through the lexicon pipeline (normalize, tokenize, stem).
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let relation = labels
            .into_iter()
            .map(|label| (label.to_string(), token_set(label)))
            .collect();
        Self::from_relation(&relation)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn object(&self, id: u32) -> &str {
        &self.objects[id as usize]
    }

    pub fn attribute(&self, id: u32) -> &str {
        &self.attributes[id as usize]
    }

    pub fn objects(&self) -> &[String] {
        &self.objects
    }

    /// Attribute ids of one object row.
    pub fn row(&self, object: u32) -> &HashSet<u32> {
        &self.rows[object as usize]
    }

    pub fn has(&self, object: u32, attribute: u32) -> bool {
        self.rows[object as usize].contains(&attribute)
    }
}

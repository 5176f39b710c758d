//! Alignment mappings: cross-graph equivalence pairs.

pub mod writer;

use std::collections::hash_set;
use std::collections::HashSet;

use serde::Serialize;

/// One equivalence assertion between a source and a target resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MappingCell {
    pub source: String,
    pub target: String,
}

/// A deduplicated set of mapping cells.
///
/// Multiple extents may independently emit the same pair; the sink absorbs
/// duplicates. Insertion order carries no meaning, writers sort on output.
#[derive(Debug, Default)]
pub struct Mapping {
    cells: HashSet<MappingCell>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair; returns false when it was already present.
    pub fn add(&mut self, source: impl Into<String>, target: impl Into<String>) -> bool {
        self.cells.insert(MappingCell {
            source: source.into(),
            target: target.into(),
        })
    }

    pub fn contains(&self, source: &str, target: &str) -> bool {
        self.cells.iter().any(|cell| cell.source == source && cell.target == target)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, MappingCell> {
        self.cells.iter()
    }

    /// Cells sorted by (source, target), for deterministic output.
    pub fn sorted_cells(&self) -> Vec<&MappingCell> {
        let mut cells: Vec<&MappingCell> = self.cells.iter().collect();
        cells.sort();
        cells
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = &'a MappingCell;
    type IntoIter = hash_set::Iter<'a, MappingCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

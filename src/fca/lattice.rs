//! Concept lattice engine.
//!
//! Enumerates all formal concepts of a [`FormalContext`] with Ganter's
//! Next-Closure algorithm: closed attribute sets are generated in lectic
//! order, each exactly once, so the output is duplicate-free and
//! deterministic without materializing the attribute power set. Worst case is
//! exponential in the attribute count, which stays small here (distinct
//! stemmed tokens per run).
//!
//! Lifecycle mirrors the matcher's use: [`init`](LatticeEngine::init)
//! validates and stores the context, [`compute`](LatticeEngine::compute)
//! enumerates (idempotent), extent accessors project concepts back to object
//! names, [`close`](LatticeEngine::close) releases everything.

use std::collections::HashSet;

use tracing::debug;

use crate::error::FcaError;

use super::context::FormalContext;

/// Which concept extents to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Every concept's extent.
    Lattice,
    /// Only introducer concepts: the Galois sub-hierarchy reduction.
    Gsh,
}

/// A computed concept: closed (extent, intent) pair over context ids.
#[derive(Debug, Clone)]
struct Concept {
    extent: Vec<u32>,
    intent: AttrSet,
    /// True when some object's full attribute row equals the intent, i.e.
    /// the concept introduces a new object grouping rather than arising as
    /// an intersection of coarser ones.
    introducer: bool,
}

/// Computes concepts of a formal context and exposes their extents.
#[derive(Debug, Default)]
pub struct LatticeEngine {
    context: Option<FormalContext>,
    concepts: Option<Vec<Concept>>,
}

impl LatticeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store the context. Fails on an empty object set or any
    /// object with an empty attribute row; the lattice algorithm requires
    /// every object to carry at least one attribute.
    pub fn init(&mut self, context: FormalContext) -> Result<(), FcaError> {
        if context.object_count() == 0 {
            return Err(FcaError::InvalidContext("empty object set".to_string()));
        }
        for id in 0..context.object_count() as u32 {
            if context.row(id).is_empty() {
                return Err(FcaError::InvalidContext(format!(
                    "object {:?} has an empty attribute set",
                    context.object(id)
                )));
            }
        }
        self.context = Some(context);
        self.concepts = None;
        Ok(())
    }

    /// Enumerate all concepts. Requires a prior successful [`init`]; calling
    /// it again after a successful run is a no-op.
    ///
    /// [`init`]: Self::init
    pub fn compute(&mut self) -> Result<(), FcaError> {
        let context = self.context.as_ref().ok_or(FcaError::NotInitialized)?;
        if self.concepts.is_some() {
            return Ok(());
        }

        let attribute_count = context.attribute_count();
        let rows: Vec<AttrSet> = (0..context.object_count() as u32)
            .map(|object| AttrSet::from_ids(attribute_count, context.row(object)))
            .collect();

        let mut concepts = Vec::new();

        // First concept: the closure of the empty attribute set.
        let (extent, intent) = close(&rows, attribute_count, &AttrSet::new(attribute_count));
        let introducer = is_introducer(&rows, &extent, &intent);
        let mut current = intent.clone();
        concepts.push(Concept {
            extent,
            intent,
            introducer,
        });

        while let Some((extent, intent)) = next_closure(&rows, attribute_count, &current) {
            let introducer = is_introducer(&rows, &extent, &intent);
            current = intent.clone();
            concepts.push(Concept {
                extent,
                intent,
                introducer,
            });
        }

        debug!(
            objects = context.object_count(),
            attributes = attribute_count,
            concepts = concepts.len(),
            "computed concept lattice"
        );
        self.concepts = Some(concepts);
        Ok(())
    }

    /// Extents for the requested mode, as sets of object names.
    pub fn extents(&self, mode: ExtractionMode) -> Result<Vec<HashSet<String>>, FcaError> {
        let context = self.context.as_ref().ok_or(FcaError::NotInitialized)?;
        let concepts = self.concepts.as_ref().ok_or(FcaError::NotComputed)?;
        let extents = concepts
            .iter()
            .filter(|concept| match mode {
                ExtractionMode::Lattice => true,
                ExtractionMode::Gsh => concept.introducer,
            })
            .map(|concept| {
                concept
                    .extent
                    .iter()
                    .map(|&object| context.object(object).to_string())
                    .collect()
            })
            .collect();
        Ok(extents)
    }

    /// Every concept's extent.
    pub fn lattice_extents(&self) -> Result<Vec<HashSet<String>>, FcaError> {
        self.extents(ExtractionMode::Lattice)
    }

    /// Extents of the Galois sub-hierarchy (introducer concepts only).
    pub fn gsh_extents(&self) -> Result<Vec<HashSet<String>>, FcaError> {
        self.extents(ExtractionMode::Gsh)
    }

    /// All computed concepts as named (extent, intent) pairs.
    pub fn concepts(&self) -> Result<Vec<(HashSet<String>, HashSet<String>)>, FcaError> {
        let context = self.context.as_ref().ok_or(FcaError::NotInitialized)?;
        let concepts = self.concepts.as_ref().ok_or(FcaError::NotComputed)?;
        Ok(concepts
            .iter()
            .map(|concept| {
                let extent = concept
                    .extent
                    .iter()
                    .map(|&object| context.object(object).to_string())
                    .collect();
                let intent = (0..context.attribute_count() as u32)
                    .filter(|&attribute| concept.intent.contains(attribute))
                    .map(|attribute| context.attribute(attribute).to_string())
                    .collect();
                (extent, intent)
            })
            .collect())
    }

    /// Number of computed concepts.
    pub fn concept_count(&self) -> Result<usize, FcaError> {
        Ok(self.concepts.as_ref().ok_or(FcaError::NotComputed)?.len())
    }

    /// Release the stored context and computed concepts.
    pub fn close(&mut self) {
        self.context = None;
        self.concepts = None;
    }
}

/// Closure of an attribute set: derive the extent (objects whose rows contain
/// every attribute), then the intent (attributes common to that extent). An
/// empty extent closes to the full attribute set.
fn close(rows: &[AttrSet], attribute_count: usize, attributes: &AttrSet) -> (Vec<u32>, AttrSet) {
    let mut extent = Vec::new();
    for (object, row) in rows.iter().enumerate() {
        if attributes.is_subset_of(row) {
            extent.push(object as u32);
        }
    }

    let mut intent = AttrSet::full(attribute_count);
    if !extent.is_empty() {
        for &object in &extent {
            intent.intersect_with(&rows[object as usize]);
        }
    }
    (extent, intent)
}

/// Next-Closure step: the lectically smallest closed set greater than
/// `current`, or `None` when `current` is the last one.
fn next_closure(
    rows: &[AttrSet],
    attribute_count: usize,
    current: &AttrSet,
) -> Option<(Vec<u32>, AttrSet)> {
    let mut working = current.clone();
    for i in (0..attribute_count as u32).rev() {
        if working.contains(i) {
            working.remove(i);
        } else {
            let mut candidate = working.clone();
            candidate.insert(i);
            let (extent, closed) = close(rows, attribute_count, &candidate);
            // Canonicity: the closure may not add any attribute before i.
            if !closed.has_extra_below(&working, i) {
                return Some((extent, closed));
            }
        }
    }
    None
}

fn is_introducer(rows: &[AttrSet], extent: &[u32], intent: &AttrSet) -> bool {
    extent.iter().any(|&object| rows[object as usize] == *intent)
}

// ---------------------------------------------------------------------------
// AttrSet: fixed-width bit set over attribute ids
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrSet {
    blocks: Vec<u64>,
}

impl AttrSet {
    fn new(bits: usize) -> Self {
        Self {
            blocks: vec![0; bits.div_ceil(64)],
        }
    }

    fn full(bits: usize) -> Self {
        let mut set = Self::new(bits);
        for (index, block) in set.blocks.iter_mut().enumerate() {
            let used = bits.saturating_sub(index * 64).min(64);
            if used == 64 {
                *block = u64::MAX;
            } else {
                *block = (1u64 << used) - 1;
            }
        }
        set
    }

    fn from_ids(bits: usize, ids: &HashSet<u32>) -> Self {
        let mut set = Self::new(bits);
        for &id in ids {
            set.insert(id);
        }
        set
    }

    fn contains(&self, bit: u32) -> bool {
        self.blocks[(bit / 64) as usize] & (1u64 << (bit % 64)) != 0
    }

    fn insert(&mut self, bit: u32) {
        self.blocks[(bit / 64) as usize] |= 1u64 << (bit % 64);
    }

    fn remove(&mut self, bit: u32) {
        self.blocks[(bit / 64) as usize] &= !(1u64 << (bit % 64));
    }

    fn is_subset_of(&self, other: &AttrSet) -> bool {
        self.blocks
            .iter()
            .zip(&other.blocks)
            .all(|(mine, theirs)| mine & !theirs == 0)
    }

    fn intersect_with(&mut self, other: &AttrSet) {
        for (mine, theirs) in self.blocks.iter_mut().zip(&other.blocks) {
            *mine &= theirs;
        }
    }

    /// True when `self` holds a bit below `limit` that `other` does not.
    fn has_extra_below(&self, other: &AttrSet, limit: u32) -> bool {
        let full_blocks = (limit / 64) as usize;
        for index in 0..full_blocks {
            if self.blocks[index] & !other.blocks[index] != 0 {
                return true;
            }
        }
        let remainder = limit % 64;
        if remainder > 0 {
            let mask = (1u64 << remainder) - 1;
            if self.blocks[full_blocks] & !other.blocks[full_blocks] & mask != 0 {
                return true;
            }
        }
        false
    }
}

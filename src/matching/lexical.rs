//! Lexical matcher: labels to formal context to concept lattice to mappings.
//!
//! The pipeline for one run: harvest labels for every resource of both
//! graphs into a [`LabelIndex`], build a [`FormalContext`] from the distinct
//! labels, compute the concept lattice, then project each extracted extent
//! back through the index and emit the cross product of source-origin and
//! target-origin URIs. All run state is owned here and dropped at return.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::alignment::Mapping;
use crate::error::FcaError;
use crate::fca::{FormalContext, LatticeEngine};
use crate::model::Resource;

use super::harvest::harvest_labels;
use super::{MatcherConfig, Origin, ResourceKind};

/// A resource URI tagged with its origin graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRef {
    pub uri: String,
    pub origin: Origin,
}

/// Label → resources index for one matching run.
#[derive(Debug, Default)]
pub struct LabelIndex {
    entries: HashMap<String, HashSet<ResourceRef>>,
}

impl LabelIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Harvest labels for a resource and record it under each of them.
    /// A resource with no harvestable label contributes nothing.
    pub fn index(&mut self, resource: &Resource<'_>, origin: Origin, lowercase: bool) {
        for label in harvest_labels(resource, lowercase) {
            self.entries.entry(label).or_default().insert(ResourceRef {
                uri: resource.uri().to_string(),
                origin,
            });
        }
    }

    /// All distinct labels indexed so far.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The resources carrying a label; empty when the label is absent.
    pub fn resources_for(&self, label: &str) -> impl Iterator<Item = &ResourceRef> {
        self.entries.get(label).into_iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Matches resources across two graphs by shared lexical clusters.
#[derive(Debug, Clone, Default)]
pub struct LexicalMatcher {
    config: MatcherConfig,
}

impl LexicalMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Match class resources. The lexical method is kind-agnostic, so this
    /// and its siblings share one implementation.
    pub fn match_classes(
        &self,
        sources: &[Resource<'_>],
        targets: &[Resource<'_>],
        mapping: &mut Mapping,
    ) -> Result<(), FcaError> {
        self.match_resources(ResourceKind::Class, sources, targets, mapping)
    }

    /// Match property resources.
    pub fn match_properties(
        &self,
        sources: &[Resource<'_>],
        targets: &[Resource<'_>],
        mapping: &mut Mapping,
    ) -> Result<(), FcaError> {
        self.match_resources(ResourceKind::Property, sources, targets, mapping)
    }

    /// Match instance resources.
    pub fn match_instances(
        &self,
        sources: &[Resource<'_>],
        targets: &[Resource<'_>],
        mapping: &mut Mapping,
    ) -> Result<(), FcaError> {
        self.match_resources(ResourceKind::Instance, sources, targets, mapping)
    }

    /// Match `sources` against `targets`, populating `mapping` with
    /// discovered (source URI, target URI) equivalence pairs.
    ///
    /// An empty side yields no mappings: without both origins no cross-graph
    /// pair is possible.
    pub fn match_resources(
        &self,
        kind: ResourceKind,
        sources: &[Resource<'_>],
        targets: &[Resource<'_>],
        mapping: &mut Mapping,
    ) -> Result<(), FcaError> {
        if sources.is_empty() || targets.is_empty() {
            return Ok(());
        }

        let mut index = LabelIndex::new();
        for resource in sources {
            index.index(resource, Origin::Source, self.config.lowercase);
        }
        for resource in targets {
            index.index(resource, Origin::Target, self.config.lowercase);
        }
        if index.is_empty() {
            debug!(kind = kind.as_str(), "no labels harvested");
            return Ok(());
        }

        let context = FormalContext::from_labels(index.labels());
        if context.is_empty() {
            debug!(kind = kind.as_str(), "all labels tokenize to nothing");
            return Ok(());
        }

        let mut engine = LatticeEngine::new();
        engine.init(context)?;
        engine.compute()?;

        let before = mapping.len();
        if self.config.extract_gsh {
            extract_mapping(&engine.gsh_extents()?, &index, mapping);
        }
        if self.config.extract_lattice {
            extract_mapping(&engine.lattice_extents()?, &index, mapping);
        }
        engine.close();

        info!(
            kind = kind.as_str(),
            sources = sources.len(),
            targets = targets.len(),
            labels = index.len(),
            mappings = mapping.len() - before,
            "lexical matching pass done"
        );
        Ok(())
    }
}

/// Project extents back to tagged URIs and emit cross-origin pairs.
fn extract_mapping(extents: &[HashSet<String>], index: &LabelIndex, mapping: &mut Mapping) {
    for extent in extents {
        let mut source_uris: HashSet<&str> = HashSet::new();
        let mut target_uris: HashSet<&str> = HashSet::new();
        for label in extent {
            for resource in index.resources_for(label) {
                match resource.origin {
                    Origin::Source => source_uris.insert(resource.uri.as_str()),
                    Origin::Target => target_uris.insert(resource.uri.as_str()),
                };
            }
        }
        // No cross-graph pair possible without both origins.
        if source_uris.is_empty() || target_uris.is_empty() {
            continue;
        }
        for source in &source_uris {
            for target in &target_uris {
                if source != target {
                    mapping.add(*source, *target);
                }
            }
        }
    }
}

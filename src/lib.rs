//! Align two independently-authored RDF knowledge graphs by discovering
//! which classes, properties and instances denote the same concept.
//!
//! The matching core is lexical: labels harvested per resource are normalized
//! into stemmed token sets, the label/token relation becomes a formal
//! context, and Formal Concept Analysis clusters labels sharing maximal
//! common token sets. Clusters spanning both graphs project back to
//! cross-graph equivalence pairs.
//!
//! Pipeline modules, leaves first: [`lexicon`] (normalize/tokenize/stem),
//! [`model`] (graphs, resources, classification), [`fca`] (formal context
//! and concept lattice engine), [`matching`] (label index and the lexical
//! matcher), [`alignment`] (mapping sink and output writers).

pub mod alignment;
pub mod error;
pub mod fca;
pub mod lexicon;
pub mod matching;
pub mod model;

pub use alignment::{Mapping, MappingCell};
pub use error::{AlignError, FcaError};
pub use fca::{ExtractionMode, FormalContext, LatticeEngine};
pub use matching::{LexicalMatcher, MatcherConfig, Origin, ResourceKind};

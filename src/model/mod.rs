//! RDF data model: triples, graphs and resource handles.

pub mod graph;
pub mod ntriples;
pub mod vocab;

pub use graph::{Graph, Node, Resource, Triple};
pub use ntriples::{read_ntriples, read_ntriples_file};

//! Formal Concept Analysis: context construction and concept lattice
//! computation.

pub mod context;
pub mod lattice;

pub use context::FormalContext;
pub use lattice::{ExtractionMode, LatticeEngine};

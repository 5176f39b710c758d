//! Lexical matching of resources across two knowledge graphs.

pub mod harvest;
pub mod lexical;

pub use lexical::{LabelIndex, LexicalMatcher, ResourceRef};

/// Which graph a resource came from. Supplied by the caller, never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Source,
    Target,
}

/// The kind of resources being matched. The lexical method is kind-agnostic;
/// the kind tags logs and lets hosts route results per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Class,
    Property,
    Instance,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Class => "class",
            ResourceKind::Property => "property",
            ResourceKind::Instance => "instance",
        }
    }
}

/// Configuration for a lexical matching run.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Lowercase harvested label literals before indexing. Off by default:
    /// tokenization lowercases anyway, and early folding would erase the
    /// camelCase boundaries the normalizer splits on.
    pub lowercase: bool,
    /// Extract clusters from the Galois sub-hierarchy.
    pub extract_gsh: bool,
    /// Extract clusters from the full concept lattice.
    pub extract_lattice: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            lowercase: false,
            extract_gsh: true,
            extract_lattice: false,
        }
    }
}

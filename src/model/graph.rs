//! In-memory RDF graph with RDFS-style resource classification.
//!
//! A [`Graph`] stores triples for one knowledge graph and answers the three
//! questions the matcher needs: which resources are classes, which are
//! properties, which are instances. [`Resource`] is a borrowed handle pairing
//! a URI with the graph it lives in, so label lookups stay one call away.

use std::collections::HashSet;

use tracing::info;

use super::vocab::{owl, rdf, rdfs, skos};

/// Object position of a triple: IRI reference or literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Iri(String),
    Literal(String),
}

impl Node {
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            Node::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Node::Literal(value) => Some(value),
            Node::Iri(_) => None,
        }
    }
}

/// A single RDF triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Node,
}

impl Triple {
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Node) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}

/// In-memory triple store for one graph.
#[derive(Debug, Default)]
pub struct Graph {
    triples: Vec<Triple>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Borrow a resource handle for a URI in this graph.
    pub fn resource<'g>(&'g self, uri: &str) -> Resource<'g> {
        Resource {
            graph: self,
            uri: uri.to_string(),
        }
    }

    /// All literal values asserted for (subject, predicate), in assertion order.
    pub fn literal_values(&self, subject: &str, predicate: &str) -> Vec<&str> {
        self.triples
            .iter()
            .filter(|t| t.subject == subject && t.predicate == predicate)
            .filter_map(|t| t.object.as_literal())
            .collect()
    }

    /// IRI objects asserted for (subject, predicate).
    pub fn iri_values(&self, subject: &str, predicate: &str) -> Vec<&str> {
        self.triples
            .iter()
            .filter(|t| t.subject == subject && t.predicate == predicate)
            .filter_map(|t| t.object.as_iri())
            .collect()
    }

    /// Class resources, RDFS-style: anything typed as a class, anything on
    /// either side of `rdfs:subClassOf`, and anything used as an `rdf:type`
    /// object. Vocabulary terms themselves are excluded.
    pub fn classes(&self) -> HashSet<String> {
        let mut classes = HashSet::new();
        for t in &self.triples {
            match t.predicate.as_str() {
                rdf::TYPE => {
                    if let Some(object) = t.object.as_iri() {
                        if object == rdfs::CLASS || object == owl::CLASS {
                            classes.insert(t.subject.clone());
                        }
                        classes.insert(object.to_string());
                    }
                }
                rdfs::SUBCLASS_OF => {
                    classes.insert(t.subject.clone());
                    if let Some(object) = t.object.as_iri() {
                        classes.insert(object.to_string());
                    }
                }
                _ => {}
            }
        }
        classes.retain(|uri| !is_vocabulary_term(uri));
        classes
    }

    /// Property resources: anything typed as a property, anything on either
    /// side of `rdfs:subPropertyOf`, and every predicate in use.
    pub fn properties(&self) -> HashSet<String> {
        let mut properties = HashSet::new();
        for t in &self.triples {
            match t.predicate.as_str() {
                rdf::TYPE => {
                    if let Some(object) = t.object.as_iri() {
                        if is_property_class(object) {
                            properties.insert(t.subject.clone());
                        }
                    }
                }
                rdfs::SUBPROPERTY_OF => {
                    properties.insert(t.subject.clone());
                    if let Some(object) = t.object.as_iri() {
                        properties.insert(object.to_string());
                    }
                }
                _ => {}
            }
            properties.insert(t.predicate.clone());
        }
        properties.retain(|uri| !is_vocabulary_term(uri));
        properties
    }

    /// Instance resources: subjects of `rdf:type` that are neither classes
    /// nor properties of this graph.
    pub fn instances(&self) -> HashSet<String> {
        let classes = self.classes();
        let properties = self.properties();
        let mut instances = HashSet::new();
        for t in &self.triples {
            if t.predicate == rdf::TYPE
                && !classes.contains(&t.subject)
                && !properties.contains(&t.subject)
                && !is_vocabulary_term(&t.subject)
            {
                instances.insert(t.subject.clone());
            }
        }
        instances
    }

    /// Log the classification counts for this graph.
    pub fn log_summary(&self, name: &str) {
        info!(
            graph = name,
            instances = self.instances().len(),
            properties = self.properties().len(),
            classes = self.classes().len(),
            triples = self.triples.len(),
            "classified graph"
        );
    }
}

/// True for terms in the RDF, RDFS, OWL, SKOS or XSD namespaces.
fn is_vocabulary_term(uri: &str) -> bool {
    uri.starts_with(rdf::NS)
        || uri.starts_with(rdfs::NS)
        || uri.starts_with(owl::NS)
        || uri.starts_with(skos::NS)
        || uri.starts_with("http://www.w3.org/2001/XMLSchema#")
}

fn is_property_class(uri: &str) -> bool {
    uri == rdf::PROPERTY
        || uri == owl::OBJECT_PROPERTY
        || uri == owl::DATATYPE_PROPERTY
        || uri == owl::ANNOTATION_PROPERTY
}

/// A URI bound to the graph it came from.
#[derive(Debug, Clone)]
pub struct Resource<'g> {
    graph: &'g Graph,
    uri: String,
}

impl<'g> Resource<'g> {
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// All literal values of `predicate` on this resource.
    pub fn literal_values(&self, predicate: &str) -> Vec<&'g str> {
        self.graph.literal_values(&self.uri, predicate)
    }

    /// The last URI segment, after `#` if present, otherwise after the last
    /// `/`. Empty when the URI ends with the separator.
    pub fn local_name(&self) -> &str {
        let uri = self.uri.as_str();
        if let Some((_, fragment)) = uri.rsplit_once('#') {
            return fragment;
        }
        match uri.rsplit_once('/') {
            Some((_, segment)) => segment,
            None => uri,
        }
    }
}

use std::collections::HashSet;

use rdfalign::matching::harvest::harvest_labels;
use rdfalign::matching::{LabelIndex, LexicalMatcher, MatcherConfig, Origin, ResourceKind};
use rdfalign::model::{read_ntriples, Graph, Resource};
use rdfalign::Mapping;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn graph(nt: &str) -> Graph {
    read_ntriples(nt).expect("fixture graph parses")
}

fn labeled(uri: &str, label: &str) -> String {
    format!("<{uri}> <http://www.w3.org/2000/01/rdf-schema#label> \"{label}\" .\n")
}

fn resources<'g>(graph: &'g Graph, uris: &[&str]) -> Vec<Resource<'g>> {
    uris.iter().map(|uri| graph.resource(uri)).collect()
}

// ---------------------------------------------------------------------------
// Cross-graph matching
// ---------------------------------------------------------------------------

#[test]
fn camel_and_snake_labels_match_across_graphs() {
    let source = graph(&labeled("http://s/DarkScape", "DarkScape"));
    let target = graph(&labeled("http://t/dark_scape", "dark_scape"));
    let mut mapping = Mapping::new();

    LexicalMatcher::new()
        .match_classes(
            &resources(&source, &["http://s/DarkScape"]),
            &resources(&target, &["http://t/dark_scape"]),
            &mut mapping,
        )
        .unwrap();

    assert_eq!(mapping.len(), 1);
    assert!(mapping.contains("http://s/DarkScape", "http://t/dark_scape"));
}

#[test]
fn shared_token_subset_clusters_match() {
    // "has director" and "director" share the stemmed token "director"; the
    // concept with that intent groups both labels even though the strings
    // differ.
    let source = graph(&labeled("http://s/hasDirector", "has director"));
    let target = graph(&labeled("http://t/director", "director"));
    let mut mapping = Mapping::new();

    LexicalMatcher::new()
        .match_properties(
            &resources(&source, &["http://s/hasDirector"]),
            &resources(&target, &["http://t/director"]),
            &mut mapping,
        )
        .unwrap();

    assert!(mapping.contains("http://s/hasDirector", "http://t/director"));
}

#[test]
fn all_entry_points_share_one_implementation() {
    let source = graph(&labeled("http://s/Thing", "widget"));
    let target = graph(&labeled("http://t/Thing", "widget"));
    let sources = resources(&source, &["http://s/Thing"]);
    let targets = resources(&target, &["http://t/Thing"]);
    let matcher = LexicalMatcher::new();

    let mut by_class = Mapping::new();
    let mut by_property = Mapping::new();
    let mut by_instance = Mapping::new();
    matcher.match_classes(&sources, &targets, &mut by_class).unwrap();
    matcher.match_properties(&sources, &targets, &mut by_property).unwrap();
    matcher.match_instances(&sources, &targets, &mut by_instance).unwrap();

    for mapping in [&by_class, &by_property, &by_instance] {
        assert_eq!(mapping.len(), 1);
        assert!(mapping.contains("http://s/Thing", "http://t/Thing"));
    }
}

#[test]
fn duplicate_pairs_collapse_in_the_sink() {
    // Two labels shared by the same resource pair yield two extents but one
    // mapping cell.
    let source = graph(&(labeled("http://s/r", "Foo") + &labeled("http://s/r", "Bar")));
    let target = graph(&(labeled("http://t/r", "Foo") + &labeled("http://t/r", "Bar")));
    let mut mapping = Mapping::new();

    LexicalMatcher::new()
        .match_classes(
            &resources(&source, &["http://s/r"]),
            &resources(&target, &["http://t/r"]),
            &mut mapping,
        )
        .unwrap();

    assert_eq!(mapping.len(), 1);
}

// ---------------------------------------------------------------------------
// Degenerate inputs
// ---------------------------------------------------------------------------

#[test]
fn empty_source_side_yields_nothing() {
    let target = graph(&labeled("http://t/x", "anything"));
    let mut mapping = Mapping::new();
    LexicalMatcher::new()
        .match_classes(&[], &resources(&target, &["http://t/x"]), &mut mapping)
        .unwrap();
    assert!(mapping.is_empty());
}

#[test]
fn empty_target_side_yields_nothing() {
    let source = graph(&labeled("http://s/x", "anything"));
    let mut mapping = Mapping::new();
    LexicalMatcher::new()
        .match_classes(&resources(&source, &["http://s/x"]), &[], &mut mapping)
        .unwrap();
    assert!(mapping.is_empty());
}

#[test]
fn unlabeled_resources_participate_in_nothing() {
    // No label properties, empty local name, no URI marker: harvest yields
    // nothing and the resource simply cannot match.
    let source = Graph::new();
    let target = graph(&labeled("http://t/x", "anything"));
    let mut mapping = Mapping::new();
    LexicalMatcher::new()
        .match_classes(
            &resources(&source, &["http://s/"]),
            &resources(&target, &["http://t/x"]),
            &mut mapping,
        )
        .unwrap();
    assert!(mapping.is_empty());
}

#[test]
fn identical_uris_never_map_to_themselves() {
    let shared = labeled("http://shared/x", "shared thing");
    let source = graph(&shared);
    let target = graph(&shared);
    let mut mapping = Mapping::new();
    LexicalMatcher::new()
        .match_classes(
            &resources(&source, &["http://shared/x"]),
            &resources(&target, &["http://shared/x"]),
            &mut mapping,
        )
        .unwrap();
    assert!(mapping.is_empty());
}

// ---------------------------------------------------------------------------
// Extraction modes
// ---------------------------------------------------------------------------

#[test]
fn lattice_mode_includes_the_top_grouping() {
    // "alpha" and "beta" share no token: only the empty-intent top concept
    // spans both graphs. GSH prunes it, the full lattice keeps it.
    let source = graph(&labeled("http://s/a", "alpha"));
    let target = graph(&labeled("http://t/b", "beta"));
    let sources = resources(&source, &["http://s/a"]);
    let targets = resources(&target, &["http://t/b"]);

    let mut gsh_only = Mapping::new();
    LexicalMatcher::new()
        .match_classes(&sources, &targets, &mut gsh_only)
        .unwrap();
    assert!(gsh_only.is_empty());

    let mut lattice_only = Mapping::new();
    LexicalMatcher::with_config(MatcherConfig {
        extract_gsh: false,
        extract_lattice: true,
        ..MatcherConfig::default()
    })
    .match_classes(&sources, &targets, &mut lattice_only)
    .unwrap();
    assert!(lattice_only.contains("http://s/a", "http://t/b"));
}

// ---------------------------------------------------------------------------
// Label harvesting
// ---------------------------------------------------------------------------

#[test]
fn harvest_unions_all_label_properties() {
    let graph = read_ntriples(concat!(
        "<http://g/r> <http://www.w3.org/2004/02/skos/core#prefLabel> \"Preferred\" .\n",
        "<http://g/r> <http://www.w3.org/2004/02/skos/core#altLabel> \"Alternate\" .\n",
        "<http://g/r> <http://www.w3.org/2004/02/skos/core#hiddenLabel> \"Hidden\" .\n",
        "<http://g/r> <http://www.w3.org/2000/01/rdf-schema#label> \"Plain\" .\n",
    ))
    .unwrap();
    let labels = harvest_labels(&graph.resource("http://g/r"), false);
    let expected: HashSet<String> = ["Preferred", "Alternate", "Hidden", "Plain"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(labels, expected);
}

#[test]
fn harvest_falls_back_to_local_name() {
    let graph = Graph::new();
    let labels = harvest_labels(&graph.resource("http://g/vocab#CameraOperator"), false);
    assert_eq!(labels.len(), 1);
    assert!(labels.contains("CameraOperator"));
}

#[test]
fn harvest_falls_back_to_uri_marker_segment() {
    let graph = Graph::new();
    let labels = harvest_labels(&graph.resource("http://g/resource/Foo_Bar/"), false);
    assert_eq!(labels.len(), 1);
    assert!(labels.contains("Foo_Bar/"));
}

#[test]
fn harvest_can_fold_case() {
    let graph = read_ntriples(&labeled("http://g/r", "MixedCase")).unwrap();
    let folded = harvest_labels(&graph.resource("http://g/r"), true);
    assert!(folded.contains("mixedcase"));
    let kept = harvest_labels(&graph.resource("http://g/r"), false);
    assert!(kept.contains("MixedCase"));
}

// ---------------------------------------------------------------------------
// Label index
// ---------------------------------------------------------------------------

#[test]
fn index_records_resources_under_each_label() {
    let source = graph(&(labeled("http://s/r", "One") + &labeled("http://s/r", "Two")));
    let mut index = LabelIndex::new();
    index.index(&source.resource("http://s/r"), Origin::Source, false);

    assert_eq!(index.len(), 2);
    let labels: HashSet<&str> = index.labels().collect();
    assert_eq!(labels, HashSet::from(["One", "Two"]));
    let refs: Vec<_> = index.resources_for("One").collect();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].uri, "http://s/r");
    assert_eq!(refs[0].origin, Origin::Source);
}

#[test]
fn index_is_empty_for_absent_labels() {
    let index = LabelIndex::new();
    assert_eq!(index.resources_for("missing").count(), 0);
}

// ---------------------------------------------------------------------------
// Resource kinds
// ---------------------------------------------------------------------------

#[test]
fn resource_kind_names() {
    assert_eq!(ResourceKind::Class.as_str(), "class");
    assert_eq!(ResourceKind::Property.as_str(), "property");
    assert_eq!(ResourceKind::Instance.as_str(), "instance");
}

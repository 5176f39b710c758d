//! Label harvesting: candidate human-readable strings for a resource.

use std::collections::HashSet;

use tracing::debug;

use crate::model::vocab::LABEL_PROPERTIES;
use crate::model::Resource;

/// URI path markers used by the last-resort fallback split.
const URI_MARKERS: [&str; 3] = ["/resource/", "/property/", "/class/"];

/// Collect the label strings for a resource: every literal value of the
/// label-bearing properties (lowercased when `lowercase` is set), falling
/// back to the local name, then to the second marker-delimited URI segment.
/// An empty result means the resource cannot participate in lexical matching.
pub fn harvest_labels(resource: &Resource<'_>, lowercase: bool) -> HashSet<String> {
    let mut labels = HashSet::new();

    for property in LABEL_PROPERTIES {
        for value in resource.literal_values(property) {
            if value.is_empty() {
                continue;
            }
            if lowercase {
                labels.insert(value.to_lowercase());
            } else {
                labels.insert(value.to_string());
            }
        }
    }

    if labels.is_empty() {
        let name = resource.local_name();
        if !name.is_empty() {
            labels.insert(name.to_string());
        }
    }

    if labels.is_empty() {
        if let Some(segment) = uri_marker_segment(resource.uri()) {
            labels.insert(segment.to_string());
        }
    }

    if labels.is_empty() {
        debug!(uri = resource.uri(), "resource yields no label, skipped");
    }

    labels
}

/// The URI segment between the first path marker and the next one (or the
/// end of the URI). `http://x/resource/Foo` yields `Foo`.
fn uri_marker_segment(uri: &str) -> Option<&str> {
    let (_, start) = URI_MARKERS
        .iter()
        .filter_map(|marker| uri.find(marker).map(|at| (at, at + marker.len())))
        .min()?;
    let rest = &uri[start..];
    let end = URI_MARKERS
        .iter()
        .filter_map(|marker| rest.find(marker))
        .min()
        .unwrap_or(rest.len());
    let segment = &rest[..end];
    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}

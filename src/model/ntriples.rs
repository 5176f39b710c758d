//! Line-oriented N-Triples reader.
//!
//! Parses the subset of RDF 1.1 N-Triples the alignment pipeline consumes:
//! IRI subjects/predicates, IRI or literal objects (plain, language-tagged or
//! datatyped), comments and blank lines. Blank node labels are accepted and
//! carried through as opaque identifiers.

use std::fs;
use std::path::Path;

use crate::error::AlignError;

use super::graph::{Graph, Node, Triple};

/// Read an N-Triples file into a [`Graph`].
pub fn read_ntriples_file(path: &Path) -> Result<Graph, AlignError> {
    let content = fs::read_to_string(path)?;
    read_ntriples(&content)
}

/// Parse N-Triples text into a [`Graph`].
pub fn read_ntriples(content: &str) -> Result<Graph, AlignError> {
    let mut graph = Graph::new();
    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let triple = parse_line(line).map_err(|message| AlignError::Parse {
            line: number + 1,
            message,
        })?;
        graph.insert(triple);
    }
    Ok(graph)
}

fn parse_line(line: &str) -> Result<Triple, String> {
    let rest = line
        .strip_suffix('.')
        .ok_or_else(|| "triple does not end with '.'".to_string())?
        .trim_end();

    let (subject, rest) = parse_term(rest)?;
    let (predicate, rest) = parse_term(rest.trim_start())?;
    let (object, rest) = parse_object(rest.trim_start())?;

    if !rest.trim().is_empty() {
        return Err(format!("trailing content after object: {rest:?}"));
    }

    let subject = match subject {
        Node::Iri(iri) => iri,
        Node::Literal(_) => return Err("literal in subject position".to_string()),
    };
    let predicate = match predicate {
        Node::Iri(iri) => iri,
        Node::Literal(_) => return Err("literal in predicate position".to_string()),
    };

    Ok(Triple {
        subject,
        predicate,
        object,
    })
}

/// Parse an IRI `<...>` or blank node `_:label` term.
fn parse_term(input: &str) -> Result<(Node, &str), String> {
    if let Some(rest) = input.strip_prefix('<') {
        let end = rest
            .find('>')
            .ok_or_else(|| "unterminated IRI".to_string())?;
        return Ok((Node::Iri(rest[..end].to_string()), &rest[end + 1..]));
    }
    if input.starts_with("_:") {
        let end = input
            .find(char::is_whitespace)
            .unwrap_or(input.len());
        return Ok((Node::Iri(input[..end].to_string()), &input[end..]));
    }
    Err(format!("expected IRI or blank node, got: {input:?}"))
}

fn parse_object(input: &str) -> Result<(Node, &str), String> {
    if input.starts_with('<') || input.starts_with("_:") {
        return parse_term(input);
    }
    if let Some(rest) = input.strip_prefix('"') {
        let (value, rest) = parse_literal_body(rest)?;
        // Skip an optional language tag or datatype annotation.
        let rest = if let Some(tag) = rest.strip_prefix('@') {
            let end = tag.find(char::is_whitespace).unwrap_or(tag.len());
            &tag[end..]
        } else if let Some(dt) = rest.strip_prefix("^^") {
            let (_, after) = parse_term(dt)?;
            after
        } else {
            rest
        };
        return Ok((Node::Literal(value), rest));
    }
    Err(format!("expected IRI, blank node or literal, got: {input:?}"))
}

/// Consume a double-quoted literal body, unescaping as we go.
/// The escape table mirrors the N-Triples writer conventions:
/// `\\`, `\"`, `\n`, `\r`, `\t` and `\uXXXX`.
fn parse_literal_body(input: &str) -> Result<(String, &str), String> {
    let mut value = String::with_capacity(input.len());
    let mut chars = input.char_indices();
    while let Some((index, c)) = chars.next() {
        match c {
            '"' => return Ok((value, &input[index + 1..])),
            '\\' => {
                let (_, escaped) = chars
                    .next()
                    .ok_or_else(|| "unterminated escape sequence".to_string())?;
                match escaped {
                    '\\' => value.push('\\'),
                    '"' => value.push('"'),
                    'n' => value.push('\n'),
                    'r' => value.push('\r'),
                    't' => value.push('\t'),
                    'u' => {
                        let mut code = String::with_capacity(4);
                        for _ in 0..4 {
                            let (_, hex) = chars
                                .next()
                                .ok_or_else(|| "truncated \\u escape".to_string())?;
                            code.push(hex);
                        }
                        let point = u32::from_str_radix(&code, 16)
                            .map_err(|_| format!("invalid \\u escape: {code}"))?;
                        let c = char::from_u32(point)
                            .ok_or_else(|| format!("invalid code point: {code}"))?;
                        value.push(c);
                    }
                    other => return Err(format!("unknown escape: \\{other}")),
                }
            }
            _ => value.push(c),
        }
    }
    Err("unterminated literal".to_string())
}

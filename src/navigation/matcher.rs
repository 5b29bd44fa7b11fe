use std::collections::HashMap;

use super::route::{RouteEntry, View};

/// One entry of a matched chain, root first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedRecord {
    pub name: Option<&'static str>,
    pub requires_auth: bool,
}

/// The result of resolving a concrete path against the route table.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// Normalized path (no trailing slash, no empty segments).
    pub path: String,
    pub name: Option<&'static str>,
    pub view: Option<View>,
    pub redirect: Option<&'static str>,
    pub params: HashMap<String, String>,
    /// The chain of route records this path matched, ancestors included.
    pub matched: Vec<MatchedRecord>,
}

impl RouteMatch {
    /// A navigation requires auth if any record in the matched chain asks
    /// for it.
    pub fn requires_auth(&self) -> bool {
        self.matched.iter().any(|r| r.requires_auth)
    }
}

#[derive(Debug)]
enum Segment {
    Literal(String),
    Param(String),
    CatchAll,
}

#[derive(Debug)]
struct CompiledRoute {
    segments: Vec<Segment>,
    name: Option<&'static str>,
    view: Option<View>,
    redirect: Option<&'static str>,
    matched: Vec<MatchedRecord>,
}

impl CompiledRoute {
    fn try_match(&self, path: &[&str]) -> Option<HashMap<String, String>> {
        let mut params = HashMap::new();
        let mut i = 0;
        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => {
                    if path.get(i).copied() != Some(lit.as_str()) {
                        return None;
                    }
                    i += 1;
                }
                Segment::Param(name) => {
                    let value = path.get(i)?;
                    params.insert(name.clone(), (*value).to_string());
                    i += 1;
                }
                Segment::CatchAll => {
                    params.insert("pathMatch".to_string(), path[i..].join("/"));
                    i = path.len();
                }
            }
        }
        (i == path.len()).then_some(params)
    }
}

/// The route table compiled into an ordered list of matchable records.
///
/// Compilation flattens the tree in declaration order; resolution returns
/// the first record that matches, which is what makes the trailing wildcard
/// a catch-all rather than a shadow over everything.
pub struct RouteTable {
    records: Vec<CompiledRoute>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        let mut records = Vec::new();
        for entry in &entries {
            compile(entry, "", &[], &mut records);
        }
        RouteTable { records }
    }

    /// Resolves `path` to the first matching record, or None when nothing
    /// matches (only possible if the table has no catch-all).
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let normalized = if segments.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", segments.join("/"))
        };

        for record in &self.records {
            if let Some(params) = record.try_match(&segments) {
                return Some(RouteMatch {
                    path: normalized,
                    name: record.name,
                    view: record.view,
                    redirect: record.redirect,
                    params,
                    matched: record.matched.clone(),
                });
            }
        }
        None
    }
}

/// Flattens one route entry (and its children) into compiled records.
///
/// A child path starting with '/' is root-anchored: it matches against the
/// full path while keeping its parent in the matched chain. A child with an
/// empty path is the default child and takes over the parent's own path.
fn compile(
    entry: &RouteEntry,
    prefix: &str,
    parents: &[MatchedRecord],
    records: &mut Vec<CompiledRoute>,
) {
    let full = if entry.path.starts_with('/') {
        entry.path.to_string()
    } else if entry.path.is_empty() {
        prefix.to_string()
    } else {
        format!("{}/{}", prefix.trim_end_matches('/'), entry.path)
    };

    let mut chain = parents.to_vec();
    chain.push(MatchedRecord {
        name: entry.name,
        requires_auth: entry.requires_auth,
    });

    if entry.children.is_empty() {
        records.push(CompiledRoute {
            segments: parse_pattern(&full),
            name: entry.name,
            view: entry.view,
            redirect: entry.redirect,
            matched: chain,
        });
        return;
    }

    let has_default_child = entry.children.iter().any(|c| c.path.is_empty());
    for child in &entry.children {
        compile(child, &full, &chain, records);
    }
    if !has_default_child {
        records.push(CompiledRoute {
            segments: parse_pattern(&full),
            name: entry.name,
            view: entry.view,
            redirect: entry.redirect,
            matched: chain,
        });
    }
}

fn parse_pattern(pattern: &str) -> Vec<Segment> {
    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s == "*" {
                Segment::CatchAll
            } else if let Some(name) = s.strip_prefix(':') {
                Segment::Param(name.to_string())
            } else {
                Segment::Literal(s.to_string())
            }
        })
        .collect()
}

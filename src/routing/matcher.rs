//! Route matching logic.
//!
//! # Responsibilities
//! - Match a concrete navigation path against the route tree
//! - Capture named parameters (`:workoutId`)
//! - Descend into empty-path default children after a branch match
//! - Merge static and path-derived props along the matched chain
//!
//! # Design Decisions
//! - Segment comparison only, no regex
//! - Static segments beat parameters; the catch-all is the last resort
//! - A match consumes the full path: extra trailing segments beyond a
//!   leaf fall through to the catch-all, never a partial match
//! - Matching is total once the table validates a catch-all exists

use std::collections::BTreeMap;

use thiserror::Error;

use crate::routing::node::{PropValue, Props, RouteNode};

/// One segment of a compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    CatchAll,
}

/// Specificity rank of a matched segment. Lower wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Specificity {
    Static,
    Param,
    CatchAll,
}

impl Segment {
    fn specificity(&self) -> Specificity {
        match self {
            Segment::Static(_) => Specificity::Static,
            Segment::Param(_) => Specificity::Param,
            Segment::CatchAll => Specificity::CatchAll,
        }
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
                Segment::Static(s.to_string())
            }
        })
        .collect()
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Structural errors detected when freezing a route tree.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("duplicate route name: {0}")]
    DuplicateName(String),

    #[error("route tree has no root catch-all")]
    MissingCatchAll,

    #[error("branch route '{0}' has no empty-path default child")]
    MissingDefaultChild(String),
}

/// The result of matching one navigation path.
///
/// `chain` runs from the matched root node down to `node`, including any
/// default children descended into, for nested rendering.
#[derive(Debug)]
pub struct RouteMatch<'t> {
    pub node: &'t RouteNode,
    pub chain: Vec<&'t RouteNode>,
    pub params: BTreeMap<String, String>,
    pub props: BTreeMap<String, PropValue>,
}

impl RouteMatch<'_> {
    pub fn name(&self) -> &str {
        &self.node.name
    }
}

struct Candidate<'t> {
    specificity: Vec<Specificity>,
    chain: Vec<&'t RouteNode>,
    params: BTreeMap<String, String>,
}

/// An immutable, validated route tree.
#[derive(Debug)]
pub struct RouteTable {
    roots: Vec<RouteNode>,
    catch_all: usize,
}

impl RouteTable {
    /// Freeze a route tree, verifying its structural invariants: unique
    /// names across the flattened tree, a default child on every branch,
    /// and a root catch-all making matching total.
    pub fn new(roots: Vec<RouteNode>) -> Result<Self, TableError> {
        let mut names = std::collections::HashSet::new();
        for root in &roots {
            let mut err = None;
            root.walk(&mut |node| {
                if err.is_some() {
                    return;
                }
                if !names.insert(node.name.clone()) {
                    err = Some(TableError::DuplicateName(node.name.clone()));
                } else if !node.children.is_empty() && node.default_child().is_none() {
                    err = Some(TableError::MissingDefaultChild(node.name.clone()));
                }
            });
            if let Some(err) = err {
                return Err(err);
            }
        }

        let catch_all = roots
            .iter()
            .position(|r| parse_pattern(&r.path) == vec![Segment::CatchAll])
            .ok_or(TableError::MissingCatchAll)?;

        Ok(Self { roots, catch_all })
    }

    /// Resolve a concrete path to exactly one route.
    ///
    /// Total: any path not matching a declared route resolves to the
    /// catch-all. "Not found" is a resolved route, not an error.
    pub fn resolve(&self, path: &str) -> RouteMatch<'_> {
        let segments = split_path(path);
        let mut best: Option<Candidate<'_>> = None;

        for root in &self.roots {
            collect(root, &[], &[], &segments, &mut best);
        }

        let candidate = match best {
            Some(c) => c,
            // Unreachable once validated, but the catch-all is the honest
            // answer for a table matched before validation.
            None => catch_all_candidate(&self.roots[self.catch_all], &segments),
        };

        let mut chain = candidate.chain;
        if let Some(&last) = chain.last() {
            let mut node = last;
            while let Some(default) = node.default_child() {
                chain.push(default);
                node = default;
            }
        }

        let props = merge_props(&chain, path);
        let node = chain[chain.len() - 1];

        RouteMatch {
            node,
            chain,
            params: candidate.params,
            props,
        }
    }
}

fn catch_all_candidate<'t>(root: &'t RouteNode, segments: &[&str]) -> Candidate<'t> {
    let mut params = BTreeMap::new();
    params.insert("pathMatch".to_string(), segments.join("/"));
    Candidate {
        specificity: vec![Specificity::CatchAll],
        chain: vec![root],
        params,
    }
}

/// Walk the tree accumulating full patterns; record every node whose full
/// pattern consumes the entire path, keeping the most specific candidate.
fn collect<'t>(
    node: &'t RouteNode,
    base_pattern: &[Segment],
    base_chain: &[&'t RouteNode],
    segments: &[&str],
    best: &mut Option<Candidate<'t>>,
) {
    let mut pattern = base_pattern.to_vec();
    pattern.extend(parse_pattern(&node.path));

    let mut chain = base_chain.to_vec();
    chain.push(node);

    // Default children share the parent's full pattern; they are reached
    // through descent after the parent matches, not matched directly.
    let addressable = base_chain.is_empty() || !node.path.is_empty();
    if addressable {
        if let Some(params) = match_pattern(&pattern, segments) {
            let specificity: Vec<Specificity> =
                pattern.iter().map(Segment::specificity).collect();
            let better = match best {
                Some(current) => specificity < current.specificity,
                None => true,
            };
            if better {
                *best = Some(Candidate {
                    specificity,
                    chain: chain.clone(),
                    params,
                });
            }
        }
    }

    for child in &node.children {
        collect(child, &pattern, &chain, segments, best);
    }
}

/// Match a full pattern against path segments, capturing parameters.
/// Returns `None` unless the pattern consumes every segment.
fn match_pattern(pattern: &[Segment], segments: &[&str]) -> Option<BTreeMap<String, String>> {
    let mut params = BTreeMap::new();

    for (i, seg) in pattern.iter().enumerate() {
        match seg {
            Segment::CatchAll => {
                // Only valid in final position; swallows the rest.
                if i + 1 != pattern.len() {
                    return None;
                }
                params.insert("pathMatch".to_string(), segments[i..].join("/"));
                return Some(params);
            }
            Segment::Static(expected) => {
                if segments.get(i) != Some(&expected.as_str()) {
                    return None;
                }
            }
            Segment::Param(name) => {
                let value = segments.get(i)?;
                params.insert(name.clone(), value.to_string());
            }
        }
    }

    if segments.len() == pattern.len() {
        Some(params)
    } else {
        None
    }
}

fn merge_props(chain: &[&RouteNode], path: &str) -> BTreeMap<String, PropValue> {
    let mut merged = BTreeMap::new();
    for node in chain {
        match &node.props {
            Some(Props::Static(entries)) => {
                for (key, value) in entries {
                    merged.insert(key.clone(), value.clone());
                }
            }
            Some(Props::Derived(derive)) => {
                for (key, value) in derive(path) {
                    merged.insert(key, value);
                }
            }
            None => {}
        }
    }
    merged
}

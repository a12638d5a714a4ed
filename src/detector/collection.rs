use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::census::PolygonKind;
use crate::core::VertexId;

/// Canonical key of a cycle: its vertex labels sorted alphabetically
///
/// Two cycles over the same vertex set share a signature whatever order or
/// direction they were walked in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    pub fn canonicalize(vertices: &[VertexId]) -> Self {
        let mut labels: Vec<char> = vertices.iter().map(|vertex| vertex.label()).collect();
        labels.sort_unstable();
        Self(labels.into_iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.0.contains(vertex.label())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A closed walk found by the cycle finder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cycle {
    signature: Signature,
    /// Sum of the edge weights along the walk, closing edge included
    length: u64,
    edge_count: usize,
    /// Vertices in the order the walk was discovered
    route: Vec<VertexId>,
}

impl Cycle {
    pub fn new(route: Vec<VertexId>, length: u64) -> Self {
        Self {
            signature: Signature::canonicalize(&route),
            length,
            edge_count: route.len(),
            route,
        }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn route(&self) -> &[VertexId] {
        &self.route
    }

    pub fn kind(&self) -> PolygonKind {
        PolygonKind::from_edge_count(self.edge_count)
    }

    /// Consecutive vertex pairs of the walk, closing pair included
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        let closing = match (self.route.last(), self.route.first()) {
            (Some(&last), Some(&first)) if self.route.len() > 1 => Some((last, first)),
            _ => None,
        };
        self.route
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .chain(closing)
    }
}

/// Set of distinct cycles keyed by signature
///
/// Members are kept in insertion order until [`sort_by_edge_count`] is
/// called.
///
/// [`sort_by_edge_count`]: CycleCollection::sort_by_edge_count
#[derive(Debug, Clone, Default)]
pub struct CycleCollection {
    cycles: Vec<Cycle>,
    signatures: HashSet<Signature>,
}

impl CycleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists(&self, signature: &Signature) -> bool {
        self.signatures.contains(signature)
    }

    /// Insert a cycle unless one with the same signature is already present
    ///
    /// Returns whether the cycle was inserted.
    pub fn insert(&mut self, cycle: Cycle) -> bool {
        if self.exists(cycle.signature()) {
            return false;
        }
        self.signatures.insert(cycle.signature().clone());
        self.cycles.push(cycle);
        true
    }

    /// Stable ascending sort on edge count
    pub fn sort_by_edge_count(&mut self) {
        self.cycles.sort_by_key(Cycle::edge_count);
    }

    /// Keep only the cycles passing through `vertex`
    pub fn retain_containing(&mut self, vertex: VertexId) {
        self.cycles.retain(|cycle| cycle.signature().contains(vertex));
        self.signatures.retain(|signature| signature.contains(vertex));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cycle> {
        self.cycles.iter()
    }

    pub fn as_slice(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }
}

impl<'a> IntoIterator for &'a CycleCollection {
    type Item = &'a Cycle;
    type IntoIter = std::slice::Iter<'a, Cycle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

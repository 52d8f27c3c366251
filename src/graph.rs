//! Weighted undirected graphs given as a vertex count and an edge list.
use crate::components::{find_components, Components};
use crate::mst::{build_mst, SpanningTree};
use crate::replacement::{replace_tree_edge, Replacement};

use core::fmt;

/// An undirected edge `u - v` with weight `weight`.
///
/// Endpoint order is irrelevant for membership: `Edge::new(0, 1, w)` and `Edge::new(1, 0, w)`
/// have the same [`EdgeKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<W> {
    pub u: usize,
    pub v: usize,
    pub weight: W,
}

/// The endpoints of an edge normalized to `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeKey(pub usize, pub usize);

impl EdgeKey {
    pub fn new(u: usize, v: usize) -> Self {
        if u <= v {
            EdgeKey(u, v)
        } else {
            EdgeKey(v, u)
        }
    }
}

impl<W> Edge<W> {
    pub fn new(u: usize, v: usize, weight: W) -> Self {
        Edge { u, v, weight }
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.u, self.v)
    }

    /// True when this edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: usize, b: usize) -> bool {
        self.key() == EdgeKey::new(a, b)
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}-{}: {})", self.u, self.v, self.weight)
    }
}

/// A graph on the vertices `0..vertex_count`.
///
/// Duplicate edges and self-loops are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedGraph<W>"))]
pub struct Graph<W> {
    vertex_count: usize,
    edges: Vec<Edge<W>>,
}

// Deserialized form of `Graph`, validated by `Graph::new` before use.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedGraph<W> {
    vertex_count: usize,
    edges: Vec<Edge<W>>,
}

#[cfg(feature = "serde")]
impl<W> TryFrom<UncheckedGraph<W>> for Graph<W> {
    type Error = String;

    fn try_from(raw: UncheckedGraph<W>) -> Result<Self, Self::Error> {
        let vertex_count = raw.vertex_count;
        Graph::new(vertex_count, raw.edges)
            .ok_or_else(|| format!("edge endpoint out of range for {vertex_count} vertices"))
    }
}

impl<W> Graph<W> {
    /// Construct a graph, returning `None` if any endpoint is not a vertex.
    pub fn new(vertex_count: usize, edges: Vec<Edge<W>>) -> Option<Self> {
        if edges
            .iter()
            .any(|e| e.u >= vertex_count || e.v >= vertex_count)
        {
            return None;
        }
        Some(Graph {
            vertex_count,
            edges,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }
}

impl<W: Copy + Ord> Graph<W> {
    pub fn minimum_spanning_tree(&self) -> SpanningTree<W> {
        build_mst(self.vertex_count, &self.edges)
    }

    pub fn components(&self) -> Components {
        find_components(self.vertex_count, &self.edges)
    }

    /// Remove edge `index` of `tree` and reconnect it with the cheapest edge of this graph.
    /// See [`replace_tree_edge`].
    pub fn replace_tree_edge(
        &self,
        tree: &SpanningTree<W>,
        index: usize,
    ) -> Option<Replacement<W>> {
        replace_tree_edge(self.vertex_count, &self.edges, tree, index, None)
    }
}

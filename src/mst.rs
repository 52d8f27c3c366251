//! Minimum spanning trees via Kruskal's algorithm.
use crate::graph::Edge;
use crate::union_find::UnionFind;

use core::ops::Add;
use num_traits::Zero;

/// Edges of a spanning tree (or forest) in the order they were accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanningTree<W> {
    edges: Vec<Edge<W>>,
}

impl<W> SpanningTree<W> {
    pub fn new(edges: Vec<Edge<W>>) -> Self {
        SpanningTree { edges }
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// True if some tree edge has the same (unordered) endpoints as `edge`.
    pub fn contains(&self, edge: &Edge<W>) -> bool {
        let key = edge.key();
        self.edges.iter().any(|e| e.key() == key)
    }
}

impl<W: Clone> SpanningTree<W> {
    /// Split off the edge at `index`, returning it and the remaining tree.
    /// Returns `None` if `index` is out of range.
    pub fn without(&self, index: usize) -> Option<(Edge<W>, Self)> {
        let removed = self.edges.get(index)?.clone();
        let mut edges = Vec::with_capacity(self.edges.len() - 1);
        edges.extend_from_slice(&self.edges[..index]);
        edges.extend_from_slice(&self.edges[index + 1..]);
        Some((removed, SpanningTree { edges }))
    }

    /// This tree with `edge` appended.
    pub fn with(&self, edge: Edge<W>) -> Self {
        let mut edges = self.edges.clone();
        edges.push(edge);
        SpanningTree { edges }
    }
}

impl<W: Copy + Zero + Add<Output = W>> SpanningTree<W> {
    pub fn total_weight(&self) -> W {
        total_weight(&self.edges)
    }
}

/// Sum of the weights of `edges`.
pub fn total_weight<W: Copy + Zero + Add<Output = W>>(edges: &[Edge<W>]) -> W {
    edges.iter().fold(W::zero(), |acc, e| acc + e.weight)
}

/// Kruskal's algorithm over the vertices `0..n`.
///
/// Edges are sorted by weight with a stable sort, so equal-weight edges are considered in input
/// order. A disconnected graph yields a minimum spanning forest with fewer than `n - 1` edges.
///
/// # Panics
///
/// When an edge endpoint is `>= n`.
pub fn build_mst<W: Copy + Ord>(n: usize, edges: &[Edge<W>]) -> SpanningTree<W> {
    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|e| e.weight);

    let mut uf = UnionFind::new(n);
    let tree = sorted
        .into_iter()
        .filter(|e| uf.unite(e.u, e.v))
        .collect();

    SpanningTree::new(tree)
}

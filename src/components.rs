//! Connected components of an edge subset, by depth-first traversal.
use crate::graph::Edge;

use std::collections::BTreeSet;

/// A partition of the vertices `0..n` into connected components.
///
/// Components are ordered by their smallest vertex, which is also the order in which a traversal
/// started from each unvisited vertex in ascending order first reaches them.
///
/// Only built by [`find_components`], so it serializes but does not deserialize.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Components {
    /// Sorted vertices of each component.
    blocks: Vec<Vec<usize>>,
    /// Component index of each vertex.
    labels: Vec<usize>,
}

impl Components {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.blocks.iter().map(|b| b.as_slice())
    }

    pub fn get(&self, i: usize) -> Option<&[usize]> {
        self.blocks.get(i).map(|b| b.as_slice())
    }

    /// Index of the component containing `v`, or `None` if `v` is not a vertex.
    pub fn component_of(&self, v: usize) -> Option<usize> {
        self.labels.get(v).copied()
    }

    pub fn same(&self, u: usize, v: usize) -> bool {
        match (self.component_of(u), self.component_of(v)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// True when there are exactly two components and `edge` has one endpoint in each.
    pub fn is_crossing<W>(&self, edge: &Edge<W>) -> bool {
        if self.len() != 2 {
            return false;
        }
        matches!(
            (self.component_of(edge.u), self.component_of(edge.v)),
            (Some(0), Some(1)) | (Some(1), Some(0))
        )
    }

    pub fn to_sets(&self) -> Vec<BTreeSet<usize>> {
        self.blocks
            .iter()
            .map(|b| b.iter().copied().collect())
            .collect()
    }
}

/// Partition `0..n` into the connected components of `edges`.
/// Vertices touched by no edge form singleton components.
///
/// Runs in `O(n + edges.len())` using an explicit stack.
///
/// # Panics
///
/// When any endpoint is `>= n`.
pub fn find_components<W>(n: usize, edges: &[Edge<W>]) -> Components {
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    for e in edges {
        assert!(
            e.u < n && e.v < n,
            "edge endpoint out of range: ({}, {}) with {} vertices",
            e.u,
            e.v,
            n
        );
        adjacency[e.u].push(e.v);
        adjacency[e.v].push(e.u);
    }

    let unvisited = usize::MAX;
    let mut labels = vec![unvisited; n];
    let mut blocks = Vec::new();
    let mut stack = Vec::new();

    for start in 0..n {
        if labels[start] != unvisited {
            continue;
        }

        let label = blocks.len();
        let mut block = vec![start];
        labels[start] = label;
        stack.push(start);

        while let Some(node) = stack.pop() {
            for &next in &adjacency[node] {
                if labels[next] == unvisited {
                    labels[next] = label;
                    block.push(next);
                    stack.push(next);
                }
            }
        }

        block.sort_unstable();
        blocks.push(block);
    }

    Components { blocks, labels }
}

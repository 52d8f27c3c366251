use mst_replacement::prelude::*;

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::Index;

pub(crate) const MAX_VERTICES: usize = 6;
pub(crate) const MAX_EXTRA_EDGES: usize = 6;
pub(crate) const MAX_WEIGHT: u32 = 12;

/// A connected graph: a random tree on `n` vertices plus some extra edges (self-loops and
/// duplicates included), listed in random order.
pub(crate) fn connected_graph_strategy() -> impl Strategy<Value = (usize, Vec<Edge<u32>>)> {
    (1..=MAX_VERTICES)
        .prop_flat_map(|n| {
            let parents = vec(any::<Index>(), n - 1);
            let extra = vec((0..n, 0..n), 0..=MAX_EXTRA_EDGES);
            let weights = vec(0..MAX_WEIGHT, n - 1 + MAX_EXTRA_EDGES);
            (Just(n), parents, extra, weights)
        })
        .prop_flat_map(|(n, parents, extra, weights)| {
            let edges: Vec<Edge<u32>> = parents
                .into_iter()
                .enumerate()
                // vertex i + 1 hangs off some earlier vertex
                .map(|(i, p)| (i + 1, p.index(i + 1)))
                .chain(extra)
                .zip(weights)
                .map(|((u, v), w)| Edge::new(u, v, w))
                .collect();
            Just(edges).prop_shuffle().prop_map(move |edges| (n, edges))
        })
}

/// Any graph, possibly disconnected.
pub(crate) fn graph_strategy() -> impl Strategy<Value = (usize, Vec<Edge<u32>>)> {
    (1..=MAX_VERTICES).prop_flat_map(|n| {
        let edges = vec(
            (0..n, 0..n, 0..MAX_WEIGHT).prop_map(|(u, v, w)| Edge::new(u, v, w)),
            0..=MAX_VERTICES + MAX_EXTRA_EDGES,
        );
        (Just(n), edges)
    })
}

/// True when `edges` is a spanning tree of `0..n`: `n - 1` edges, none closing a cycle.
pub(crate) fn is_spanning_tree(n: usize, edges: &[Edge<u32>]) -> bool {
    let mut uf = UnionFind::new(n);
    edges.len() + 1 == n && edges.iter().all(|e| uf.unite(e.u, e.v))
}

pub(crate) fn is_acyclic(n: usize, edges: &[Edge<u32>]) -> bool {
    let mut uf = UnionFind::new(n);
    edges.iter().all(|e| uf.unite(e.u, e.v))
}

/// Weight of the lightest spanning tree, by trying every `(n - 1)`-subset of `edges`.
/// `None` if the graph is disconnected.
pub(crate) fn brute_force_mst_weight(n: usize, edges: &[Edge<u32>]) -> Option<u32> {
    let mut best: Option<u32> = None;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize + 1 != n {
            continue;
        }
        let subset: Vec<Edge<u32>> = edges
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, e)| *e)
            .collect();
        if !is_spanning_tree(n, &subset) {
            continue;
        }
        let weight = total_weight(&subset);
        if best.map_or(true, |b| weight < b) {
            best = Some(weight);
        }
    }
    best
}

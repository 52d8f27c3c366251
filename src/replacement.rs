//! Reconnecting a spanning tree after one of its edges is removed.
//!
//! Removing a tree edge splits the tree into two components. By the cut property, the cheapest
//! edge of the original graph crossing those two components restores a spanning tree, and that
//! tree is minimal among those obtained by adding one crossing edge to the reduced forest.
//!
//! The search knows nothing about which edge was removed, so it may select the removed edge
//! again when that edge is still the cheapest crossing edge.
use crate::components::{find_components, Components};
use crate::graph::{Edge, EdgeKey};
use crate::mst::SpanningTree;

use std::collections::HashSet;

/// Observer for the replacement search. The default implementation ignores every event.
pub trait ReplacementTrace {
    fn on_event(&self, _event: ReplacementEvent) {}
}

/// The trace used when none is given.
pub struct NoopTrace;

impl ReplacementTrace for NoopTrace {}

static NOOP_TRACE: NoopTrace = NoopTrace;

/// Progress of [`find_replacement_edge_traced`]. Edge indices refer to the full edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementEvent {
    /// The components do not form exactly two pieces; nothing is searched.
    NotApplicable { components: usize },
    SkippedTreeEdge { index: usize },
    Candidate { index: usize },
    NewBest { index: usize },
}

/// The outcome of removing one tree edge and reconnecting the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement<W> {
    pub removed: Edge<W>,
    pub added: Edge<W>,
    /// Components of the tree with `removed` taken out.
    pub components: Components,
    /// The reduced tree with `added` appended.
    pub tree: SpanningTree<W>,
}

/// The minimum-weight edge of `all_edges` that is not in `remaining` and joins the two
/// `components`. Equal weights resolve to the edge listed first.
///
/// Returns `None` when `components` does not have exactly two components, or when no edge
/// crosses them.
pub fn find_replacement_edge<W: Copy + Ord>(
    all_edges: &[Edge<W>],
    remaining: &[Edge<W>],
    components: &Components,
) -> Option<Edge<W>> {
    find_replacement_edge_traced(all_edges, remaining, components, None)
}

/// [`find_replacement_edge`], reporting each step to `trace`.
pub fn find_replacement_edge_traced<W: Copy + Ord>(
    all_edges: &[Edge<W>],
    remaining: &[Edge<W>],
    components: &Components,
    trace: Option<&dyn ReplacementTrace>,
) -> Option<Edge<W>> {
    let trace = trace.unwrap_or(&NOOP_TRACE);

    if components.len() != 2 {
        trace.on_event(ReplacementEvent::NotApplicable {
            components: components.len(),
        });
        return None;
    }

    let used: HashSet<EdgeKey> = remaining.iter().map(Edge::key).collect();

    let mut best: Option<Edge<W>> = None;
    for (index, edge) in all_edges.iter().enumerate() {
        if used.contains(&edge.key()) {
            trace.on_event(ReplacementEvent::SkippedTreeEdge { index });
            continue;
        }
        if !components.is_crossing(edge) {
            continue;
        }

        trace.on_event(ReplacementEvent::Candidate { index });
        if best.map_or(true, |b| edge.weight < b.weight) {
            trace.on_event(ReplacementEvent::NewBest { index });
            best = Some(*edge);
        }
    }
    best
}

/// Remove edge `index` from `tree`, then reconnect the two halves with the cheapest crossing
/// edge of `all_edges`.
///
/// Returns `None` if `index` is out of range or no replacement applies.
///
/// # Panics
///
/// When an edge endpoint is `>= vertex_count`.
pub fn replace_tree_edge<W: Copy + Ord>(
    vertex_count: usize,
    all_edges: &[Edge<W>],
    tree: &SpanningTree<W>,
    index: usize,
    trace: Option<&dyn ReplacementTrace>,
) -> Option<Replacement<W>> {
    let (removed, reduced) = tree.without(index)?;
    let components = find_components(vertex_count, reduced.edges());
    let added = find_replacement_edge_traced(all_edges, reduced.edges(), &components, trace)?;

    Some(Replacement {
        removed,
        added,
        components,
        tree: reduced.with(added),
    })
}

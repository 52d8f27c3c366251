//! # MST Replacement
//!
//! Minimum spanning trees of small weighted undirected graphs, and the classic single-edge
//! replacement procedure: remove one tree edge, find the two components it leaves behind, and
//! reconnect them with the cheapest edge crossing the cut.
//!
//! ```text
//!        2         3
//!    0 ─────── 1 ─────── 2
//!    │       ╱ │         │
//!  6 │    8 ╱  │ 5       │ 7
//!    │     ╱   │         │
//!    3 ─────── 4 ────────┘
//!        9
//! ```
//!
//! The minimum spanning tree of the graph above is `(0-1), (1-2), (1-4), (0-3)`, with total
//! weight 16. Removing `(0-1)` leaves the components `{0, 3}` and `{1, 2, 4}`. The edges
//! crossing them are `(0-1)` itself, `(1-3)` and `(3-4)`, so the cheapest replacement is `(0-1)`
//! again.
//!
//! ```rust
//! use mst_replacement::prelude::*;
//!
//! let edges = vec![
//!     Edge::new(0, 1, 2),
//!     Edge::new(0, 3, 6),
//!     Edge::new(1, 2, 3),
//!     Edge::new(1, 3, 8),
//!     Edge::new(1, 4, 5),
//!     Edge::new(2, 4, 7),
//!     Edge::new(3, 4, 9),
//! ];
//!
//! let tree = build_mst(5, &edges);
//! assert_eq!(tree.total_weight(), 16);
//!
//! let (removed, reduced) = tree.without(0).unwrap();
//! assert_eq!(removed, Edge::new(0, 1, 2));
//!
//! let components = find_components(5, reduced.edges());
//! assert_eq!(components.len(), 2);
//!
//! let added = find_replacement_edge(&edges, reduced.edges(), &components);
//! assert_eq!(added, Some(Edge::new(0, 1, 2)));
//! ```
//!
//! The same steps are available in one call as [`replacement::replace_tree_edge`], which also
//! accepts a [`replacement::ReplacementTrace`] observer.
//!
//! # Features
//!
//! - `serde`: derive `Serialize` and `Deserialize` for the graph, tree and component types.

pub mod components;
pub mod graph;
pub mod mst;
pub mod replacement;
pub mod union_find;

pub mod prelude {
    //! The graph types and the free functions operating on them.
    pub use crate::components::{find_components, Components};
    pub use crate::graph::{Edge, EdgeKey, Graph};
    pub use crate::mst::{build_mst, total_weight, SpanningTree};
    pub use crate::replacement::{
        find_replacement_edge, find_replacement_edge_traced, replace_tree_edge, Replacement,
        ReplacementEvent, ReplacementTrace,
    };
    pub use crate::union_find::UnionFind;
}

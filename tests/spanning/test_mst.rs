use mst_replacement::prelude::*;

use super::strategy::*;

use proptest::{prop_assert, prop_assert_eq, proptest};

fn example_edges() -> Vec<Edge<i32>> {
    vec![
        Edge::new(0, 1, 2),
        Edge::new(0, 3, 6),
        Edge::new(1, 2, 3),
        Edge::new(1, 3, 8),
        Edge::new(1, 4, 5),
        Edge::new(2, 4, 7),
        Edge::new(3, 4, 9),
    ]
}

#[test]
fn test_example_tree() {
    let tree = build_mst(5, &example_edges());
    let expected = vec![
        Edge::new(0, 1, 2),
        Edge::new(1, 2, 3),
        Edge::new(1, 4, 5),
        Edge::new(0, 3, 6),
    ];
    assert_eq!(tree.edges(), &expected[..]);
    assert_eq!(tree.total_weight(), 16);
}

#[test]
fn test_graph_delegates_to_kruskal() {
    let graph = Graph::new(5, example_edges()).expect("endpoints in range");
    assert_eq!(
        graph.minimum_spanning_tree(),
        build_mst(5, graph.edges())
    );
}

#[test]
fn test_disconnected_graph_gives_forest() {
    let edges = vec![Edge::new(0, 1, 4), Edge::new(2, 3, 1)];
    let tree = build_mst(5, &edges);
    assert_eq!(tree.edges(), &[Edge::new(2, 3, 1), Edge::new(0, 1, 4)]);
    assert_eq!(find_components(5, tree.edges()).len(), 3);
}

proptest! {
    #[test]
    fn test_weight_is_minimal((n, edges) in connected_graph_strategy()) {
        let tree = build_mst(n, &edges);
        prop_assert_eq!(Some(tree.total_weight()), brute_force_mst_weight(n, &edges));
    }

    #[test]
    fn test_connected_gives_spanning_tree((n, edges) in connected_graph_strategy()) {
        let tree = build_mst(n, &edges);
        prop_assert!(is_spanning_tree(n, tree.edges()));
    }

    #[test]
    fn test_forest_size((n, edges) in graph_strategy()) {
        let tree = build_mst(n, &edges);
        let k = find_components(n, &edges).len();
        prop_assert!(is_acyclic(n, tree.edges()));
        prop_assert_eq!(tree.len(), n - k);
    }

    #[test]
    fn test_accepted_in_weight_order((n, edges) in graph_strategy()) {
        let tree = build_mst(n, &edges);
        prop_assert!(tree.edges().windows(2).all(|w| w[0].weight <= w[1].weight));
    }
}

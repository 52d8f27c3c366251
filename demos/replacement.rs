use mst_replacement::prelude::*;

struct PrintTrace<'a> {
    edges: &'a [Edge<i64>],
}

impl ReplacementTrace for PrintTrace<'_> {
    fn on_event(&self, event: ReplacementEvent) {
        match event {
            ReplacementEvent::NotApplicable { components } => {
                println!("  [trace] {components} components, no replacement search");
            }
            ReplacementEvent::SkippedTreeEdge { index } => {
                println!("  [trace] skip tree edge {}", self.edges[index]);
            }
            ReplacementEvent::Candidate { index } => {
                println!("  [trace] crossing edge {}", self.edges[index]);
            }
            ReplacementEvent::NewBest { index } => {
                println!("  [trace] new best {}", self.edges[index]);
            }
        }
    }
}

fn print_edges(edges: &[Edge<i64>]) {
    for e in edges {
        println!("  {e}");
    }
}

fn main() {
    let edges = vec![
        Edge::new(0, 1, 2),
        Edge::new(0, 3, 6),
        Edge::new(1, 2, 3),
        Edge::new(1, 3, 8),
        Edge::new(1, 4, 5),
        Edge::new(2, 4, 7),
        Edge::new(3, 4, 9),
    ];
    let graph = Graph::new(5, edges).expect("all endpoints are below 5");

    println!("Building MST.");
    let tree = graph.minimum_spanning_tree();

    println!("\nMST edges:");
    print_edges(tree.edges());
    println!("Total weight: {}", tree.total_weight());

    let Some((removed, reduced)) = tree.without(0) else {
        println!("\nMST is empty, nothing to remove");
        return;
    };
    println!("\nRemoving edge: {removed}");

    println!("\nEdges after removal:");
    print_edges(reduced.edges());

    let components = find_components(graph.vertex_count(), reduced.edges());
    println!("\nComponents formed: {}", components.len());
    for (i, block) in components.iter().enumerate() {
        println!("  Component {}: {:?}", i + 1, block);
    }

    println!();
    let trace = PrintTrace {
        edges: graph.edges(),
    };
    match find_replacement_edge_traced(graph.edges(), reduced.edges(), &components, Some(&trace)) {
        Some(added) => {
            println!("\nReplacement edge: {added}");
            let new_tree = reduced.with(added);
            println!("\nNew MST:");
            print_edges(new_tree.edges());
            println!("New total weight: {}", new_tree.total_weight());
        }
        None => println!("\nCouldn't find replacement edge"),
    }
}

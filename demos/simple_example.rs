use shortest_paths::graph::{DirectedGraph, Graph};
use shortest_paths::{AutoShortestPath, FloydWarshall, ShortestPaths, SingleSourceAlgorithm};

fn main() {
    env_logger::init();

    // Create a simple directed graph with one negative edge
    let mut graph: DirectedGraph<i64> = DirectedGraph::with_vertices(5);

    let edges = [
        (0, 1, 10), (0, 2, 5), (1, 3, 1), (2, 1, 3),
        (2, 3, 9), (2, 4, 2), (3, 4, 4), (4, 0, 7), (4, 3, -1),
    ];
    for (from, to, weight) in edges {
        if let Err(err) = graph.add_edge(from, to, weight) {
            eprintln!("skipping edge: {}", err);
        }
    }

    println!("--- Testing on a simple graph ---");
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    // The negative edge makes the selector fall back to Bellman-Ford
    let source = 0;
    let result = match AutoShortestPath::new().compute_shortest_paths(&graph, source) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{}", err);
            return;
        }
    };

    println!("\n{} results from {}:", result.algorithm(), source);
    for v in graph.vertices() {
        match result.distance(source, v) {
            Some(dist) => println!("Vertex {}: distance = {}, path = {:?}", v, dist, result.path(source, v)),
            None => println!("Vertex {}: unreachable", v),
        }
    }

    let all_pairs = FloydWarshall::new().compute_all_pairs(&graph);
    println!("\nFloyd-Warshall distance matrix:");
    for u in graph.vertices() {
        let row: Vec<String> = graph
            .vertices()
            .map(|v| match all_pairs.distance(u, v) {
                Some(d) => format!("{:>4}", d),
                None => "   -".to_string(),
            })
            .collect();
        println!("{}", row.join(" "));
    }
    println!("Negative cycle: {}", all_pairs.has_negative_cycle());
}

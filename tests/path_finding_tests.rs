use ordered_float::OrderedFloat;
use shortest_paths::algorithm::traits::{ShortestPaths, SingleSourceAlgorithm};
use shortest_paths::graph::{DirectedGraph, Graph};
use shortest_paths::{BellmanFord, Dijkstra, FloydWarshall};
use std::collections::HashMap;

type W = OrderedFloat<f64>;

// Test helper function to create a grid graph, skipping blocked cells
fn create_test_grid(width: usize, height: usize, blocked: &[(usize, usize)]) -> DirectedGraph<W> {
    let mut graph = DirectedGraph::with_vertices(width * height);

    let is_blocked = |x: usize, y: usize| blocked.contains(&(x, y));

    // Connect walkable positions (including diagonals)
    for y in 0..height {
        for x in 0..width {
            if is_blocked(x, y) {
                continue;
            }
            let vertex = y * width + x;

            // Define possible moves (8 directions)
            let directions = [
                // Cardinal directions (N, E, S, W)
                (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
                // Diagonal directions (NE, SE, SW, NW)
                (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
            ];

            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let (nx, ny) = (nx as usize, ny as usize);
                    if !is_blocked(nx, ny) {
                        let neighbor = ny * width + nx;
                        graph.add_edge(vertex, neighbor, OrderedFloat(cost)).unwrap();
                    }
                }
            }
        }
    }

    graph
}

// Sum edge weights along a path in traversal order
fn path_weight(graph: &DirectedGraph<W>, path: &[usize]) -> W {
    path.windows(2).fold(OrderedFloat(0.0), |acc, hop| {
        acc + graph.edge_weight(hop[0], hop[1]).expect("path uses a missing edge")
    })
}

fn assert_close(actual: W, expected: W) {
    assert!(
        (actual.into_inner() - expected.into_inner()).abs() < 1e-9,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

fn assert_valid_path(graph: &DirectedGraph<W>, path: &[usize], source: usize, target: usize) {
    assert!(!path.is_empty(), "Path from {} to {} should exist", source, target);
    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], target, "Path should end at target");
    for hop in path.windows(2) {
        assert!(graph.has_edge(hop[0], hop[1]), "Path should only use existing edges");
    }
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = create_test_grid(10, 10, &[]);

    let source = 0; // Top-left corner (0,0)
    let target = 99; // Bottom-right corner (9,9)

    let dijkstra_result = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();
    let bellman_ford_result = BellmanFord::new().compute_shortest_paths(&graph, source).unwrap();

    // Nine diagonal steps
    let dijkstra_distance = dijkstra_result.distance(source, target).unwrap();
    assert_close(dijkstra_distance, OrderedFloat(9.0 * 1.4));

    let bellman_ford_distance = bellman_ford_result.distance(source, target).unwrap();
    assert_close(bellman_ford_distance, dijkstra_distance);

    let dijkstra_path = dijkstra_result.path(source, target);
    assert_valid_path(&graph, &dijkstra_path, source, target);
    assert_close(path_weight(&graph, &dijkstra_path), dijkstra_distance);

    let bellman_ford_path = bellman_ford_result.path(source, target);
    assert_valid_path(&graph, &bellman_ford_path, source, target);
    assert_close(path_weight(&graph, &bellman_ford_path), bellman_ford_distance);
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    // A wall in column 5 with a gap only in the last two rows
    let wall: Vec<(usize, usize)> = (0..8).map(|y| (5, y)).collect();
    let graph = create_test_grid(10, 10, &wall);

    let source = 0;
    let target = 9; // Top-right corner, behind the wall

    let result = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();
    let path = result.path(source, target);
    assert_valid_path(&graph, &path, source, target);

    // The path has to go around the wall through rows 8 or 9
    assert!(path.iter().any(|&v| v / 10 >= 8), "Path should detour below the wall");
    for cell in &wall {
        let blocked = cell.1 * 10 + cell.0;
        assert!(!path.contains(&blocked), "Path should avoid obstacles");
    }

    // Blocked cells are vertices of the graph but nothing reaches them
    let blocked = wall[3].1 * 10 + wall[3].0;
    assert_eq!(result.distance(source, blocked), None);
    assert!(result.path(source, blocked).is_empty());
}

// Test the city pathfinding scenario with Dijkstra and Floyd-Warshall
#[test]
fn test_city_pathfinding() {
    let width = 12;
    let height = 9;
    let buildings = [
        (3, 3), (4, 3), (5, 3),
        (3, 4), (4, 4), (5, 4),
        (7, 6), (8, 6), (9, 6),
    ];
    let graph = create_test_grid(width, height, &buildings);

    // Define some key locations
    let locations = HashMap::from([
        ("home".to_string(), (0, 0)),
        ("work".to_string(), (11, 8)),
        ("gym".to_string(), (4, 5)),
        ("park".to_string(), (8, 7)),
    ]);

    let all_pairs = FloydWarshall::new().compute_all_pairs(&graph);
    assert!(!all_pairs.has_negative_cycle());

    for (from_name, &(fx, fy)) in &locations {
        let source = fy * width + fx;
        let result = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();

        for (to_name, &(tx, ty)) in &locations {
            let target = ty * width + tx;

            let distance = result.distance(source, target);
            assert!(distance.is_some(), "Should find a path from {} to {}", from_name, to_name);

            let path = result.path(source, target);
            assert_valid_path(&graph, &path, source, target);

            let fw_distance = all_pairs.distance(source, target).unwrap();
            assert_close(fw_distance, distance.unwrap());
            assert_valid_path(&graph, &all_pairs.path(source, target), source, target);
        }
    }

    assert_eq!(graph.vertex_count(), width * height);
}

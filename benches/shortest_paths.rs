use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shortest_paths::graph::generators::{grid_graph, random_graph};
use shortest_paths::{bellman_ford, dijkstra, floyd_warshall};

fn single_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_source");

    for &size in &[1_000usize, 10_000, 50_000] {
        // Approximately 2 edges per vertex, as in sparse road-like graphs
        let graph = random_graph(size, 2.0, 1..=100, 42);

        group.bench_with_input(BenchmarkId::new("dijkstra", size), &graph, |b, graph| {
            b.iter(|| dijkstra(graph, black_box(0)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford", size), &graph, |b, graph| {
            b.iter(|| bellman_ford(graph, black_box(0)).unwrap())
        });
    }

    group.finish();
}

fn all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs");
    group.sample_size(10);

    for &side in &[10usize, 20, 30] {
        let graph = grid_graph(side, side, 1);
        group.bench_with_input(
            BenchmarkId::new("floyd_warshall", side * side),
            &graph,
            |b, graph| b.iter(|| floyd_warshall(black_box(graph))),
        );
    }

    group.finish();
}

criterion_group!(benches, single_source, all_pairs);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use fib_dijkstra::algorithm::floyd_warshall::FloydWarshall;
use fib_dijkstra::graph::generators::random_graph;
use fib_dijkstra::{BellmanFord, HeapDijkstra, ScanDijkstra, ShortestPathAlgorithm};
use rand::prelude::*;

fn bench_single_source(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1992);
    let graph = random_graph(1000, 3, &mut rng);

    let mut group = c.benchmark_group("single_source_1000");
    group.bench_function("heap_dijkstra", |b| {
        let algo = HeapDijkstra::new();
        b.iter(|| algo.shortest_paths(&graph, 0).unwrap())
    });
    group.bench_function("scan_dijkstra", |b| {
        let algo = ScanDijkstra::new();
        b.iter(|| algo.shortest_paths(&graph, 0).unwrap())
    });
    group.bench_function("bellman_ford", |b| {
        let algo = BellmanFord::new();
        b.iter(|| algo.shortest_paths(&graph, 0).unwrap())
    });
    group.finish();
}

fn bench_all_pairs(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1992);
    let graph = random_graph(200, 3, &mut rng);

    c.bench_function("floyd_warshall_200", |b| {
        let algo = FloydWarshall::new();
        b.iter(|| algo.all_pairs(&graph))
    });
}

criterion_group!(benches, bench_single_source, bench_all_pairs);
criterion_main!(benches);

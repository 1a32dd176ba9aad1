use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathgraph::graph::generators::{generate_barabasi_albert, generate_grid, generate_random};
use pathgraph::Dijkstra;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_random");
    let mut rng = StdRng::seed_from_u64(42);

    for &size in &[1_000usize, 10_000, 50_000] {
        let (graph, vertices) = generate_random(&mut rng, size, 4.0, 100, |i| i);
        let source = vertices[0];

        for (label, dijkstra) in [
            ("skip_stale", Dijkstra::new()),
            ("rescan_stale", Dijkstra::new().with_stale_entry_skipping(false)),
        ] {
            group.bench_with_input(BenchmarkId::new(label, size), &source, |b, &source| {
                b.iter(|| black_box(dijkstra.compute_with_stats(&graph, source)));
            });
        }
    }

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let (graph, vertices) = generate_grid(200, 200, 1, |i| i);
    let dijkstra = Dijkstra::new();

    c.bench_function("dijkstra_grid_200x200", |b| {
        b.iter(|| black_box(dijkstra.compute_with_stats(&graph, vertices[0])));
    });
}

fn bench_scale_free(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let (graph, vertices) = generate_barabasi_albert(&mut rng, 5_000, 3, 50, |i| i);
    let dijkstra = Dijkstra::new();

    c.bench_function("dijkstra_scale_free_5k", |b| {
        b.iter(|| black_box(dijkstra.compute_with_stats(&graph, vertices[0])));
    });
}

fn bench_mutation(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let (graph, vertices) = generate_random(&mut rng, 5_000, 4.0, 100, |i| i);

    // Removing a vertex cascades into both adjacency directions
    c.bench_function("remove_vertex_cascade", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut graph| {
                for &v in vertices.iter().step_by(10) {
                    black_box(graph.remove_vertex(v));
                }
                graph
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_random_graphs, bench_grid, bench_scale_free, bench_mutation);
criterion_main!(benches);

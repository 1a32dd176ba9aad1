use pathgraph::graph::generators::generate_random;
use pathgraph::{Dijkstra, DirectedGraph, SearchStats, VertexId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

// Function to benchmark one configuration on a graph
fn benchmark_algorithm(
    name: &str,
    algorithm: &Dijkstra,
    graph: &DirectedGraph<usize>,
    source: VertexId,
) -> Result<(Duration, SearchStats), pathgraph::Error> {
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let (result, stats) = algorithm.compute_with_stats(graph, source)?;
    let duration = start.elapsed();

    println!(
        "  - Found {} reachable vertices in {:?} ({} expansions, {} stale entries skipped)",
        result.reachable_count(),
        duration,
        stats.vertices_expanded,
        stats.stale_entries_skipped
    );

    Ok((duration, stats))
}

fn main() -> Result<(), pathgraph::Error> {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;
    let max_cost = 100;

    println!("=====================================================");
    println!("Benchmark: Dijkstra with and without stale entry skipping");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let skipping = Dijkstra::new();
    let rescanning = Dijkstra::new().with_stale_entry_skipping(false);
    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let (graph, vertices) = generate_random(&mut rng, size, edge_factor, max_cost, |i| i);
        let source = vertices[0];

        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (skip_time, _) = benchmark_algorithm("Dijkstra (skip stale)", &skipping, &graph, source)?;
        let (rescan_time, _) = benchmark_algorithm("Dijkstra (rescan stale)", &rescanning, &graph, source)?;

        let speedup = rescan_time.as_secs_f64() / skip_time.as_secs_f64();
        println!("Speedup from skipping stale entries: {:.2}x", speedup);

        results.push((size, skip_time, rescan_time, speedup));
    }

    println!("\n=====================================================");
    println!("Summary");
    println!("=====================================================");
    println!("{:>10} | {:>14} | {:>14} | {:>8}", "vertices", "skip stale", "rescan stale", "speedup");
    for (size, skip_time, rescan_time, speedup) in results {
        println!(
            "{:>10} | {:>14} | {:>14} | {:>7.2}x",
            size,
            format!("{:.2?}", skip_time),
            format!("{:.2?}", rescan_time),
            speedup
        );
    }

    Ok(())
}

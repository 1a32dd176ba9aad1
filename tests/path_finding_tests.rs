use pathgraph::graph::generators::{generate_barabasi_albert, generate_grid, generate_random};
use pathgraph::{
    find_shortest_paths, Cost, Dijkstra, DirectedGraph, Error, ShortestPathAlgorithm, VertexId,
    INFINITE_DISTANCE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

// Test helper function to create a grid graph with 8-way moves
fn create_test_grid(width: usize, height: usize) -> (DirectedGraph<(usize, usize)>, Vec<VertexId>) {
    let mut graph = DirectedGraph::new();
    let vertices: Vec<VertexId> = (0..width * height)
        .map(|i| graph.add_vertex((i % width, i / width)))
        .collect();

    for y in 0..height {
        for x in 0..width {
            let vertex = vertices[y * width + x];

            // Cardinal moves cost 10, diagonal moves 14
            let directions = [
                (0, -1, 10), (1, 0, 10), (0, 1, 10), (-1, 0, 10),
                (1, -1, 14), (1, 1, 14), (-1, 1, 14), (-1, -1, 14),
            ];

            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let neighbor = vertices[ny as usize * width + nx as usize];
                    graph.add_edge(vertex, neighbor, cost).unwrap();
                }
            }
        }
    }

    (graph, vertices)
}

// Reference distances by repeated relaxation over every edge
fn brute_force_distances<V>(graph: &DirectedGraph<V>, source: VertexId) -> HashMap<VertexId, Cost> {
    let mut distances: HashMap<VertexId, Cost> =
        graph.vertices().map(|v| (v, INFINITE_DISTANCE)).collect();
    distances.insert(source, 0);

    for _ in 0..graph.vertex_count() {
        let mut changed = false;
        for edge in graph.edges() {
            let from = distances[&edge.source];
            if from == INFINITE_DISTANCE {
                continue;
            }
            if from + edge.cost < distances[&edge.destination] {
                distances.insert(edge.destination, from + edge.cost);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    distances
}

#[test]
fn test_reference_scenario() {
    let mut graph = DirectedGraph::new();

    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    graph.add_edge(a, b, 1).unwrap();
    graph.add_edge(b, a, 1).unwrap();

    let c = graph.add_vertex("c");
    graph.add_edge(a, c, 2).unwrap();
    graph.add_edge(c, a, 1).unwrap();
    graph.add_edge(b, c, 3).unwrap();
    graph.add_edge(c, b, 3).unwrap();

    let d = graph.add_vertex("d");
    graph.add_edge(b, d, 1).unwrap();
    graph.add_edge(c, d, 3).unwrap();
    graph.add_edge(d, b, 1).unwrap();
    graph.add_edge(d, c, 1).unwrap();

    let paths = find_shortest_paths(&graph, a).unwrap();

    assert_eq!(paths.distance(d), Some(2));
    assert_eq!(paths.predecessor(d), Some(b));
    assert_eq!(paths.predecessor(b), Some(a));
    assert_eq!(paths.predecessor(a), None);
    assert_eq!(paths.distance(a), Some(0));
    assert_eq!(paths.distance(b), Some(1));
    assert_eq!(paths.distance(c), Some(2));

    // Walk the chain back from d
    let expected = [d, b, a];
    let mut info = paths.get(d).unwrap();
    for (i, &v) in expected.iter().enumerate() {
        assert_eq!(info.vertex(), v);
        if i == expected.len() - 1 {
            assert_eq!(info.previous(), None);
            assert_eq!(info.distance(), 0);
        } else {
            info = paths.get(info.previous().unwrap()).unwrap();
        }
    }

    assert_eq!(paths.path_to(d), Some(vec![a, b, d]));
}

#[test]
fn test_source_only() {
    let mut graph = DirectedGraph::new();
    let a = graph.add_vertex(());

    let paths = find_shortest_paths(&graph, a).unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths.source(), a);
    assert_eq!(paths.distance(a), Some(0));
    assert_eq!(paths.predecessor(a), None);
    assert_eq!(paths.path_to(a), Some(vec![a]));
}

#[test]
fn test_unreachable_vertices_keep_sentinel() {
    let mut graph = DirectedGraph::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    let island = graph.add_vertex("island");
    graph.add_edge(a, b, 5).unwrap();
    // Only reachable against the edge direction
    graph.add_edge(island, a, 1).unwrap();

    let paths = find_shortest_paths(&graph, a).unwrap();

    assert_eq!(paths.len(), 3);
    assert!(!paths.is_reachable(island));
    assert_eq!(paths.distance(island), None);
    assert_eq!(paths.predecessor(island), None);
    assert_eq!(paths.path_to(island), None);
    let info = paths.get(island).unwrap();
    assert_eq!(info.distance(), INFINITE_DISTANCE);
    assert!(!info.is_reachable());
    assert_eq!(paths.reachable_count(), 2);
}

#[test]
fn test_zero_cost_edges() {
    let mut graph = DirectedGraph::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    let c = graph.add_vertex("c");
    graph.add_edge(a, b, 0).unwrap();
    graph.add_edge(b, a, 0).unwrap();
    graph.add_edge(b, c, 0).unwrap();
    graph.add_edge(a, c, 1).unwrap();

    let paths = find_shortest_paths(&graph, a).unwrap();
    assert_eq!(paths.distance(c), Some(0));
    assert_eq!(paths.path_to(c), Some(vec![a, b, c]));
    assert_eq!(paths.predecessor(a), None);
}

#[test]
fn test_missing_source_is_reported() {
    let mut graph = DirectedGraph::new();
    let a = graph.add_vertex("a");
    graph.remove_vertex(a);

    assert_eq!(find_shortest_paths(&graph, a), Err(Error::SourceNotFound));

    let other: DirectedGraph<&str> = DirectedGraph::new();
    assert_eq!(find_shortest_paths(&other, a), Err(Error::SourceNotFound));
}

#[test]
fn test_negative_cost_is_reported() {
    let mut graph = DirectedGraph::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    let c = graph.add_vertex("c");
    graph.add_edge(a, b, 2).unwrap();
    graph.add_edge(b, c, -1).unwrap();

    assert_eq!(
        find_shortest_paths(&graph, a),
        Err(Error::NegativeCost { from: b, to: c, cost: -1 })
    );

    // Negative edges the search never reaches do not matter
    let paths = find_shortest_paths(&graph, c).unwrap();
    assert_eq!(paths.reachable_count(), 1);
}

#[test]
fn test_large_costs_do_not_overflow() {
    let mut graph = DirectedGraph::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    let c = graph.add_vertex("c");
    graph.add_edge(a, b, Cost::MAX - 1).unwrap();
    graph.add_edge(b, c, Cost::MAX - 1).unwrap();

    let paths = find_shortest_paths(&graph, a).unwrap();
    assert_eq!(paths.distance(b), Some(Cost::MAX - 1));
    assert_eq!(paths.distance(c), None);
}

#[test]
fn test_repeated_queries_are_identical() {
    let mut rng = StdRng::seed_from_u64(11);
    let (graph, vertices) = generate_random(&mut rng, 300, 4.0, 20, |i| i);

    let first = find_shortest_paths(&graph, vertices[0]).unwrap();
    let second = find_shortest_paths(&graph, vertices[0]).unwrap();

    for v in &vertices {
        assert_eq!(first.distance(*v), second.distance(*v));
        assert_eq!(first.predecessor(*v), second.predecessor(*v));
    }
    assert_eq!(first, second);
}

#[test]
fn test_result_is_detached_from_graph() {
    let mut graph = DirectedGraph::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    graph.add_edge(a, b, 3).unwrap();

    let paths = find_shortest_paths(&graph, a).unwrap();
    graph.remove_vertex(b);

    assert_eq!(paths.distance(b), Some(3));
    assert_eq!(paths.path_to(b), Some(vec![a, b]));
}

#[test]
fn test_triangle_property_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(2024);

    for round in 0..10 {
        let (graph, vertices) = generate_random(&mut rng, 200, 3.0, 50, |i| i);
        let source = vertices[round % vertices.len()];
        let paths = find_shortest_paths(&graph, source).unwrap();

        assert_eq!(paths.len(), graph.vertex_count());
        for edge in graph.edges() {
            if let Some(from) = paths.distance(edge.source) {
                let to = paths
                    .distance(edge.destination)
                    .expect("successor of a reached vertex is reached");
                assert!(to <= from + edge.cost, "triangle property violated on {:?}", edge);
            }
        }
    }
}

#[test]
fn test_matches_brute_force_relaxation() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..5 {
        let (graph, vertices) = generate_barabasi_albert(&mut rng, 150, 2, 30, |i| i);
        let source = vertices[0];
        let paths = find_shortest_paths(&graph, source).unwrap();
        let expected = brute_force_distances(&graph, source);

        for v in &vertices {
            let expected_distance = expected[v];
            assert_eq!(paths.get(*v).unwrap().distance(), expected_distance);

            // Predecessor links agree with edge costs
            if let Some(previous) = paths.predecessor(*v) {
                let cost = graph.find_cost(previous, *v).unwrap();
                assert_eq!(paths.distance(previous).unwrap() + cost, expected_distance);
            }
        }
    }
}

#[test]
fn test_stale_entry_skipping_does_not_change_distances() {
    let mut rng = StdRng::seed_from_u64(5);
    let (graph, vertices) = generate_random(&mut rng, 500, 6.0, 100, |i| i);

    let (skipping, skip_stats) = Dijkstra::new()
        .compute_with_stats(&graph, vertices[0])
        .unwrap();
    let (rescanning, rescan_stats) = Dijkstra::new()
        .with_stale_entry_skipping(false)
        .compute_with_stats(&graph, vertices[0])
        .unwrap();

    for v in &vertices {
        assert_eq!(skipping.distance(*v), rescanning.distance(*v));
    }
    assert_eq!(rescan_stats.stale_entries_skipped, 0);
    assert!(skip_stats.vertices_expanded <= rescan_stats.vertices_expanded);
    // With skipping, every reachable vertex is expanded exactly once
    assert_eq!(skip_stats.vertices_expanded, skipping.reachable_count());
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let (graph, vertices) = create_test_grid(10, 10);

    let source = vertices[0]; // Top-left corner (0,0)
    let target = vertices[99]; // Bottom-right corner (9,9)

    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, source).unwrap();

    // Nine diagonal steps
    assert_eq!(result.distance(target), Some(9 * 14));

    let path = <Dijkstra as ShortestPathAlgorithm<DirectedGraph<(usize, usize)>>>::get_path(
        &dijkstra, &result, target,
    )
    .expect("Dijkstra should construct a path");
    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], target, "Path should end at target");
    assert_eq!(path.len(), 10);
    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<DirectedGraph<(usize, usize)>>>::name(&dijkstra),
        "Dijkstra"
    );
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    let (mut graph, vertices) = create_test_grid(10, 10);

    // Create a wall of obstacles in column 5, leaving the bottom two rows open
    for y in 0..8 {
        graph.remove_vertex(vertices[y * 10 + 5]);
    }

    let source = vertices[0];
    let target = vertices[9]; // Top-right corner (9,0)

    let result = find_shortest_paths(&graph, source).unwrap();
    let path = result.path_to(target).expect("should find a path around obstacles");

    assert_eq!(path[0], source);
    assert_eq!(path[path.len() - 1], target);
    for pair in path.windows(2) {
        assert!(graph.has_edge(pair[0], pair[1]), "Path should only use existing edges");
        let (x, y) = *graph.value(pair[1]).unwrap();
        assert!(x != 5 || y >= 8, "Path should not cross the wall");
    }
    // Straight across is 90; the detour must be longer
    assert!(result.distance(target).unwrap() > 90);
}

// Test the city pathfinding scenario
#[test]
fn test_city_pathfinding() {
    let width = 25;
    let height = 18;
    let (mut graph, vertices) = generate_grid(width, height, 1, |i| i);

    // Buildings are removed from the street grid
    let building_positions = [
        (3, 3), (4, 3), (5, 3),
        (3, 4), (4, 4), (5, 4),
        (3, 5), (4, 5), (5, 5),
        (10, 10), (11, 10), (12, 10),
        (10, 11), (11, 11), (12, 11),
        (10, 12), (11, 12), (12, 12),
    ];
    for &(x, y) in &building_positions {
        graph.remove_vertex(vertices[y * width + x]);
    }

    let locations = HashMap::from([
        ("home", (0, 0)),
        ("work", (20, 15)),
        ("gym", (15, 8)),
        ("park", (8, 12)),
    ]);

    for (from_name, &(fx, fy)) in &locations {
        let source = vertices[fy * width + fx];
        let result = find_shortest_paths(&graph, source).unwrap();

        for (to_name, &(tx, ty)) in &locations {
            let target = vertices[ty * width + tx];

            // Manhattan distance is achievable around these buildings
            let manhattan = (fx as i64 - tx as i64).abs() + (fy as i64 - ty as i64).abs();
            assert_eq!(
                result.distance(target),
                Some(manhattan),
                "Wrong distance from {} to {}",
                from_name,
                to_name
            );

            let path = result.path_to(target).unwrap();
            assert_eq!(path[0], source, "Path should start at source");
            assert_eq!(path[path.len() - 1], target, "Path should end at target");
            for pair in path.windows(2) {
                assert!(graph.has_edge(pair[0], pair[1]), "Path should only use existing edges");
            }
        }
    }
}

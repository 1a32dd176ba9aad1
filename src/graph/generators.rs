use crate::graph::{Cost, DirectedGraph, VertexId};
use rand::Rng;

/// Generates a random directed graph with `n` vertices and roughly
/// `edge_factor * n` edges whose costs are drawn from `1..=max_cost`.
/// Self-loops are skipped.
///
/// `value` builds the payload of the i-th vertex. Returns the graph and the
/// vertex handles in creation order.
pub fn generate_random<V, R>(
    rng: &mut R,
    n: usize,
    edge_factor: f64,
    max_cost: Cost,
    mut value: impl FnMut(usize) -> V,
) -> (DirectedGraph<V>, Vec<VertexId>)
where
    R: Rng + ?Sized,
{
    assert!(max_cost >= 1, "max_cost must be positive");

    let mut graph = DirectedGraph::with_capacity(n);
    let vertices: Vec<VertexId> = (0..n).map(|i| graph.add_vertex(value(i))).collect();
    if n < 2 {
        return (graph, vertices);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let w = rng.gen_range(0..n);
        if u != w {
            let cost = rng.gen_range(1..=max_cost);
            // Handles were just issued by this graph
            let _ = graph.add_edge(vertices[u], vertices[w], cost);
        }
    }

    (graph, vertices)
}

/// Generates a `width x height` grid where every cell is connected to its
/// four neighbours in both directions with the given cost.
///
/// Vertex `y * width + x` in the returned handle list is cell `(x, y)`.
pub fn generate_grid<V>(
    width: usize,
    height: usize,
    cost: Cost,
    mut value: impl FnMut(usize) -> V,
) -> (DirectedGraph<V>, Vec<VertexId>) {
    let mut graph = DirectedGraph::with_capacity(width * height);
    let vertices: Vec<VertexId> = (0..width * height)
        .map(|i| graph.add_vertex(value(i)))
        .collect();

    for y in 0..height {
        for x in 0..width {
            let current = vertices[y * width + x];
            if x + 1 < width {
                let right = vertices[y * width + x + 1];
                let _ = graph.add_edge(current, right, cost);
                let _ = graph.add_edge(right, current, cost);
            }
            if y + 1 < height {
                let below = vertices[(y + 1) * width + x];
                let _ = graph.add_edge(current, below, cost);
                let _ = graph.add_edge(below, current, cost);
            }
        }
    }

    (graph, vertices)
}

/// Generates a Barabási-Albert scale-free graph with n vertices and m edges per new vertex.
/// Costs are drawn from `1..=max_cost`.
pub fn generate_barabasi_albert<V, R>(
    rng: &mut R,
    n: usize,
    m: usize,
    max_cost: Cost,
    mut value: impl FnMut(usize) -> V,
) -> (DirectedGraph<V>, Vec<VertexId>)
where
    R: Rng + ?Sized,
{
    assert!(m > 0, "m must be positive");
    assert!(n > m, "n must be greater than m");
    assert!(max_cost >= 1, "max_cost must be positive");

    let mut graph = DirectedGraph::with_capacity(n);
    let mut vertices = Vec::with_capacity(n);

    // Initial vertices form a complete graph
    for i in 0..m {
        vertices.push(graph.add_vertex(value(i)));
    }
    for i in 0..m {
        for j in 0..m {
            if i != j {
                let cost = rng.gen_range(1..=max_cost);
                let _ = graph.add_edge(vertices[i], vertices[j], cost);
            }
        }
    }

    // Every vertex appears once per unit of degree, so a uniform draw from
    // the pool is a draw proportional to degree
    let mut pool: Vec<usize> = Vec::with_capacity(2 * n * m);
    for i in 0..m {
        pool.extend(std::iter::repeat(i).take(m.saturating_sub(1).max(1)));
    }

    for i in m..n {
        let new_vertex = graph.add_vertex(value(i));
        vertices.push(new_vertex);
        let mut targets: Vec<usize> = Vec::with_capacity(m);

        while targets.len() < m {
            let target = pool[rng.gen_range(0..pool.len())];
            if !targets.contains(&target) {
                targets.push(target);
                let cost = rng.gen_range(1..=max_cost);
                let _ = graph.add_edge(new_vertex, vertices[target], cost);
            }
        }

        pool.extend_from_slice(&targets);
        pool.extend(std::iter::repeat(i).take(m));
    }

    (graph, vertices)
}

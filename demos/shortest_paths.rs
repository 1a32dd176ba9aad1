use colored::*;
use pathgraph::graph::generators::generate_grid;
use pathgraph::{Dijkstra, DirectedGraph, ShortestPathMap, VertexId};

/// A small city grid with blocked cells
struct CityGrid {
    width: usize,
    height: usize,
    buildings: Vec<(usize, usize)>,
}

impl CityGrid {
    fn sample() -> Self {
        let mut buildings = Vec::new();
        for y in 1..6 {
            buildings.push((3, y));
        }
        for x in 5..9 {
            buildings.push((x, 3));
        }
        buildings.extend([(1, 7), (2, 7), (7, 6), (8, 8)]);

        Self {
            width: 10,
            height: 10,
            buildings,
        }
    }

    fn is_building(&self, x: usize, y: usize) -> bool {
        self.buildings.contains(&(x, y))
    }
}

fn label_path(graph: &DirectedGraph<&str>, path: &[VertexId]) -> String {
    path.iter()
        .map(|&v| graph.value(v).copied().unwrap_or("?"))
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn reference_network() -> Result<(), pathgraph::Error> {
    println!("{}", "Reference network".bright_cyan().bold());
    println!("{}", "=".repeat(40).bright_white());

    let mut graph = DirectedGraph::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    let c = graph.add_vertex("c");
    let d = graph.add_vertex("d");

    for (from, to, cost) in [
        (a, b, 1), (b, a, 1), (a, c, 2), (c, a, 1), (b, c, 3),
        (c, b, 3), (b, d, 1), (d, b, 1), (c, d, 3), (d, c, 1),
    ] {
        graph.add_edge(from, to, cost)?;
    }
    println!("{} vertices, {} edges", graph.vertex_count(), graph.edge_count());

    let (paths, stats) = Dijkstra::new().compute_with_stats(&graph, a)?;
    print_paths(&graph, &paths, &[a, b, c, d]);
    println!(
        "{} {} expansions, {} edges scanned, {} stale entries skipped",
        "stats:".bright_black(),
        stats.vertices_expanded,
        stats.edges_scanned,
        stats.stale_entries_skipped
    );

    // Cut b out of the network and query again
    graph.remove_vertex(b);
    println!("\n{} removed {}", "~".bright_yellow(), "b".bright_white().bold());
    let (paths, _) = Dijkstra::new().compute_with_stats(&graph, a)?;
    print_paths(&graph, &paths, &[a, c, d]);

    Ok(())
}

fn print_paths(graph: &DirectedGraph<&str>, paths: &ShortestPathMap, targets: &[VertexId]) {
    for &target in targets {
        let name = graph.value(target).copied().unwrap_or("?");
        match (paths.distance(target), paths.path_to(target)) {
            (Some(distance), Some(path)) => println!(
                "  {} {:>3}  {}",
                name.bright_green().bold(),
                distance.to_string().bright_yellow(),
                label_path(graph, &path)
            ),
            _ => println!("  {} {}", name.bright_red().bold(), "unreachable".bright_red()),
        }
    }
}

fn city_walk() -> Result<(), pathgraph::Error> {
    println!("\n{}", "City walk".bright_cyan().bold());
    println!("{}", "=".repeat(40).bright_white());

    let city = CityGrid::sample();
    let (mut graph, cells) = generate_grid(city.width, city.height, 1, |i| i);
    for &(x, y) in &city.buildings {
        graph.remove_vertex(cells[y * city.width + x]);
    }

    let home = cells[0];
    let work = cells[city.width * city.height - 1];
    let paths = pathgraph::find_shortest_paths(&graph, home)?;

    let route = paths.path_to(work).unwrap_or_default();
    for y in 0..city.height {
        let row: String = (0..city.width)
            .map(|x| {
                let cell = cells[y * city.width + x];
                if cell == home {
                    "H".bright_green().bold().to_string()
                } else if cell == work {
                    "W".bright_red().bold().to_string()
                } else if city.is_building(x, y) {
                    "█".on_bright_black().white().to_string()
                } else if route.contains(&cell) {
                    "*".bright_yellow().bold().to_string()
                } else {
                    "·".bright_black().to_string()
                }
            })
            .collect();
        println!("  {}", row);
    }

    match paths.distance(work) {
        Some(distance) => println!("\n{} {} blocks", "Home → Work:".bright_white().bold(), distance),
        None => println!("\n{}", "Work cannot be reached".bright_red()),
    }
    Ok(())
}

fn main() -> Result<(), pathgraph::Error> {
    env_logger::init();

    reference_network()?;
    city_walk()?;
    Ok(())
}

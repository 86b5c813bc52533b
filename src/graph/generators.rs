use crate::graph::{MutableGraph, UndirectedGraph};
use crate::Result;
use rand::Rng;

/// Generates a random undirected graph with n vertices and m edges
///
/// Endpoints are drawn uniformly, so the graph may be disconnected and may
/// contain parallel edges. Weights are drawn from `1.0..100.0`.
pub fn generate_random<R: Rng>(n: usize, m: usize, rng: &mut R) -> Result<UndirectedGraph<(), f64>> {
    let mut graph = UndirectedGraph::with_capacity(n, m);
    for _ in 0..n {
        graph.add_vertex(());
    }
    if n == 0 {
        return Ok(graph);
    }

    for _ in 0..m {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        // Avoid self-loops
        if a != b {
            graph.add_edge(a, b, rng.gen_range(1.0..100.0))?;
        }
    }

    Ok(graph)
}

/// Generates a connected random graph: a random spanning tree plus `extra` random edges
pub fn generate_random_connected<R: Rng>(
    n: usize,
    extra: usize,
    rng: &mut R,
) -> Result<UndirectedGraph<(), f64>> {
    let mut graph = UndirectedGraph::with_capacity(n, n + extra);
    for _ in 0..n {
        graph.add_vertex(());
    }

    // Attach every vertex to some earlier one
    for v in 1..n {
        let parent = rng.gen_range(0..v);
        graph.add_edge(parent, v, rng.gen_range(1.0..100.0))?;
    }

    if n > 1 {
        for _ in 0..extra {
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            if a != b {
                graph.add_edge(a, b, rng.gen_range(1.0..100.0))?;
            }
        }
    }

    Ok(graph)
}

/// Generates a width*height grid graph with 4-connectivity and unit weights
pub fn generate_grid(width: usize, height: usize) -> Result<UndirectedGraph<(), f64>> {
    let mut graph = UndirectedGraph::with_capacity(width * height, 2 * width * height);
    for _ in 0..(width * height) {
        graph.add_vertex(());
    }

    let index = |x: usize, y: usize| -> usize { y * width + x };

    // Each edge is added once, towards the right and downwards
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.add_edge(index(x, y), index(x + 1, y), 1.0)?;
            }
            if y + 1 < height {
                graph.add_edge(index(x, y), index(x, y + 1), 1.0)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a random geometric graph in the unit square
/// n: number of vertices
/// r: connection radius (vertices within distance r are connected)
pub fn generate_geometric<R: Rng>(n: usize, r: f64, rng: &mut R) -> Result<UndirectedGraph<(), f64>> {
    let mut graph = UndirectedGraph::with_capacity(n, 0);

    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let x: f64 = rng.gen_range(0.0..1.0);
        let y: f64 = rng.gen_range(0.0..1.0);
        points.push((x, y));
        graph.add_vertex(());
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let (x1, y1) = points[i];
            let (x2, y2) = points[j];
            let dist = ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt();

            if dist <= r {
                // Weight equal to the Euclidean distance
                graph.add_edge(i, j, dist)?;
            }
        }
    }

    Ok(graph)
}

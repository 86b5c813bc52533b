//! Human- and machine-readable reports of a Dijkstra run over a labelled graph.

use num_traits::Float;
use serde::Serialize;
use std::fmt::{Debug, Display, Write};

use crate::algorithm::{Dijkstra, EdgeWeight};
use crate::graph::{Graph, MutableGraph, UndirectedGraph};
use crate::{Error, Result};

/// An edge on a reported path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeReport {
    pub from: String,
    pub to: String,
    pub label: String,
}

/// Distance and shortest path to a single vertex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexReport {
    pub label: String,
    /// `None` when the vertex is unreachable
    pub distance: Option<f64>,
    pub path_vertices: Vec<String>,
    pub path_edges: Vec<EdgeReport>,
}

/// Results of one run, one entry per vertex in graph order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub source: String,
    pub vertices: Vec<VertexReport>,
}

impl RunReport {
    /// Collects distances and paths from a computed engine
    pub fn from_run<G, W, F>(dijkstra: &Dijkstra<'_, G, W, F>) -> Result<Self>
    where
        G: Graph,
        G::VertexData: Display,
        G::EdgeData: Display,
        W: Float + Debug,
        F: EdgeWeight<G::EdgeData, W>,
    {
        let graph = dijkstra.graph();
        let source = dijkstra.source().ok_or(Error::NotInitialized)?;

        let mut vertices = Vec::with_capacity(graph.vertex_count());
        for v in graph.vertices() {
            let distance = dijkstra.distance_to(v)?;

            let path_vertices = dijkstra
                .path_vertices(v)?
                .into_iter()
                .map(|u| vertex_label(graph, u))
                .collect::<Result<Vec<_>>>()?;

            let mut path_edges = Vec::new();
            for e in dijkstra.path_edges(v)? {
                let (a, b) = graph.end_vertices(e).ok_or(Error::InvalidEdge(e))?;
                let label = graph.edge_data(e).ok_or(Error::InvalidEdge(e))?;
                path_edges.push(EdgeReport {
                    from: vertex_label(graph, a)?,
                    to: vertex_label(graph, b)?,
                    label: label.to_string(),
                });
            }

            vertices.push(VertexReport {
                label: vertex_label(graph, v)?,
                distance: distance.to_f64().filter(|d| d.is_finite()),
                path_vertices,
                path_edges,
            });
        }

        Ok(RunReport {
            source: vertex_label(graph, source)?,
            vertices,
        })
    }

    /// Renders the report as an indented text listing
    ///
    /// Distances use the shortest `f64` formatting (`4`, `2.5`); unreachable
    /// vertices print `inf`.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for vertex in &self.vertices {
            let distance = match vertex.distance {
                Some(d) => d.to_string(),
                None => "inf".to_string(),
            };
            let _ = writeln!(out, "{} -> {}: {}", self.source, vertex.label, distance);

            out.push_str("  path vertices:");
            for label in &vertex.path_vertices {
                out.push(' ');
                out.push_str(label);
            }
            out.push('\n');

            out.push_str("  path edges:");
            for edge in &vertex.path_edges {
                let _ = write!(out, " {}{}/{}", edge.from, edge.to, edge.label);
            }
            out.push('\n');
        }
        out
    }

    /// Renders the report as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn vertex_label<G>(graph: &G, vertex: usize) -> Result<String>
where
    G: Graph,
    G::VertexData: Display,
{
    graph
        .vertex_data(vertex)
        .map(|label| label.to_string())
        .ok_or(Error::InvalidVertex(vertex))
}

/// Labels of the sample graph's vertices
pub const SAMPLE_LABELS: [&str; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];

/// Builds the ten-vertex sample graph A..J with integer edge weights
pub fn sample_graph() -> Result<UndirectedGraph<&'static str, u32>> {
    const EDGES: [(usize, usize, u32); 19] = [
        (0, 1, 6),
        (0, 3, 4),
        (0, 8, 9),
        (1, 2, 3),
        (1, 3, 3),
        (1, 4, 1),
        (2, 4, 2),
        (2, 5, 2),
        (3, 4, 4),
        (3, 6, 6),
        (4, 5, 8),
        (4, 6, 6),
        (4, 7, 7),
        (5, 7, 11),
        (6, 7, 3),
        (6, 8, 2),
        (6, 9, 2),
        (7, 9, 4),
        (8, 9, 1),
    ];

    let mut graph = UndirectedGraph::with_capacity(SAMPLE_LABELS.len(), EDGES.len());
    let verts: Vec<_> = SAMPLE_LABELS
        .iter()
        .map(|label| graph.add_vertex(*label))
        .collect();

    for (a, b, weight) in EDGES {
        graph.add_edge(verts[a], verts[b], weight)?;
    }

    Ok(graph)
}

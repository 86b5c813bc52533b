use crate::graph::traits::{EdgeId, Graph, MutableGraph, VertexId};
use crate::{Error, Result};
use std::fmt::Debug;

/// An edge of an undirected graph together with its payload
#[derive(Debug, Clone)]
struct EdgeRecord<E> {
    ends: (VertexId, VertexId),
    data: E,
}

/// An undirected graph implementation using adjacency lists
///
/// Vertex payloads are typically labels and edge payloads typically weights,
/// but both are arbitrary.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V, E> {
    /// Payload of each vertex, indexed by vertex ID
    vertices: Vec<V>,

    /// Endpoints and payload of each edge, indexed by edge ID
    edges: Vec<EdgeRecord<E>>,

    /// Incident edges for each vertex: vertex_id -> [edge_id]
    incidence: Vec<Vec<EdgeId>>,
}

impl<V, E> UndirectedGraph<V, E> {
    /// Creates a new empty undirected graph
    pub fn new() -> Self {
        UndirectedGraph {
            vertices: Vec::new(),
            edges: Vec::new(),
            incidence: Vec::new(),
        }
    }

    /// Creates a new empty graph with room for the given number of vertices and edges
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        UndirectedGraph {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            incidence: Vec::with_capacity(vertices),
        }
    }

    /// Finds the first vertex whose payload satisfies the predicate
    pub fn find_vertex<P>(&self, mut predicate: P) -> Option<VertexId>
    where
        P: FnMut(&V) -> bool,
    {
        self.vertices.iter().position(|data| predicate(data))
    }

    /// Returns the number of edges incident to a vertex
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.incidence.get(vertex).map_or(0, |edges| edges.len())
    }
}

impl<V, E> Default for UndirectedGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Graph for UndirectedGraph<V, E>
where
    V: Debug,
    E: Debug,
{
    type VertexData = V;
    type EdgeData = E;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn incident_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        if let Some(edges) = self.incidence.get(vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn end_vertices(&self, edge: EdgeId) -> Option<(VertexId, VertexId)> {
        self.edges.get(edge).map(|record| record.ends)
    }

    fn vertex_data(&self, vertex: VertexId) -> Option<&V> {
        self.vertices.get(vertex)
    }

    fn edge_data(&self, edge: EdgeId) -> Option<&E> {
        self.edges.get(edge).map(|record| &record.data)
    }
}

impl<V, E> MutableGraph for UndirectedGraph<V, E>
where
    V: Debug,
    E: Debug,
{
    fn add_vertex(&mut self, data: V) -> VertexId {
        let new_id = self.vertices.len();
        self.vertices.push(data);
        self.incidence.push(Vec::new());
        new_id
    }

    fn add_edge(&mut self, a: VertexId, b: VertexId, data: E) -> Result<EdgeId> {
        if !self.has_vertex(a) {
            return Err(Error::InvalidVertex(a));
        }
        if !self.has_vertex(b) {
            return Err(Error::InvalidVertex(b));
        }

        let new_id = self.edges.len();
        self.edges.push(EdgeRecord { ends: (a, b), data });

        // A self-loop is listed once in its vertex's incidence list
        self.incidence[a].push(new_id);
        if a != b {
            self.incidence[b].push(new_id);
        }

        Ok(new_id)
    }
}

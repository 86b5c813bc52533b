use std::fmt::Debug;

/// Dense index of a vertex inside a graph
pub type VertexId = usize;

/// Dense index of an edge inside a graph
pub type EdgeId = usize;

/// Trait representing a weighted undirected graph
///
/// Vertices and edges are identified by dense indices in `0..vertex_count()`
/// and `0..edge_count()`, so algorithms can keep their per-vertex state in
/// plain vectors.
pub trait Graph: Debug {
    /// Payload attached to each vertex (e.g. a label)
    type VertexData;

    /// Payload attached to each edge, from which weights are derived
    type EdgeData;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all vertices of the graph
    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(0..self.vertex_count())
    }

    /// Returns an iterator over the edges incident to a vertex
    fn incident_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = EdgeId> + '_>;

    /// Returns the endpoint of `edge` that is not `vertex`
    ///
    /// Returns `None` when the edge does not exist or is not incident to `vertex`.
    /// For a self-loop the opposite endpoint is `vertex` itself.
    fn opposite(&self, vertex: VertexId, edge: EdgeId) -> Option<VertexId> {
        let (a, b) = self.end_vertices(edge)?;
        if a == vertex {
            Some(b)
        } else if b == vertex {
            Some(a)
        } else {
            None
        }
    }

    /// Returns both endpoints of an edge, in insertion order
    fn end_vertices(&self, edge: EdgeId) -> Option<(VertexId, VertexId)>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if the edge exists in the graph
    fn has_edge(&self, edge: EdgeId) -> bool {
        edge < self.edge_count()
    }

    /// Gets the payload of a vertex if it exists
    fn vertex_data(&self, vertex: VertexId) -> Option<&Self::VertexData>;

    /// Gets the payload of an edge if it exists
    fn edge_data(&self, edge: EdgeId) -> Option<&Self::EdgeData>;
}

/// Trait for building a graph
///
/// Only insertion is supported; vertices and edges keep their indices for
/// the lifetime of the graph.
pub trait MutableGraph: Graph {
    /// Adds a vertex with the given payload and returns its ID
    fn add_vertex(&mut self, data: Self::VertexData) -> VertexId;

    /// Adds an undirected edge between two vertices and returns its ID
    fn add_edge(
        &mut self,
        a: VertexId,
        b: VertexId,
        data: Self::EdgeData,
    ) -> crate::Result<EdgeId>;
}

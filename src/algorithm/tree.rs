use num_traits::Float;
use serde::Serialize;
use std::fmt::Debug;

use crate::graph::{EdgeId, Graph, VertexId};
use crate::{Error, Result};

/// Shortest-path tree rooted at a source vertex
///
/// Holds the state of one Dijkstra run: the best known distance to every
/// vertex and the edge through which each vertex was reached. Unreached
/// vertices have an infinite distance and no predecessor edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathTree<W> {
    /// Source vertex ID
    source: VertexId,

    /// Distances from source to each vertex
    distances: Vec<W>,

    /// Edge used to reach each vertex on its shortest path
    predecessors: Vec<Option<EdgeId>>,
}

impl<W> ShortestPathTree<W>
where
    W: Float + Debug,
{
    /// Creates a tree where only the source is reached, at distance zero
    pub(crate) fn new(source: VertexId, vertex_count: usize) -> Self {
        let mut distances = vec![W::infinity(); vertex_count];
        distances[source] = W::zero();

        ShortestPathTree {
            source,
            distances,
            predecessors: vec![None; vertex_count],
        }
    }

    /// Records an improved distance for `vertex`, reached through `edge`
    pub(crate) fn relax(&mut self, vertex: VertexId, distance: W, edge: EdgeId) {
        self.distances[vertex] = distance;
        self.predecessors[vertex] = Some(edge);
    }

    /// Source vertex ID
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Number of vertices the tree covers
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Distances from the source, indexed by vertex ID
    pub fn distances(&self) -> &[W] {
        &self.distances
    }

    /// Length of the shortest path from the source to `vertex`
    ///
    /// Returns infinity for unreached vertices.
    pub fn distance_to(&self, vertex: VertexId) -> Result<W> {
        self.distances
            .get(vertex)
            .copied()
            .ok_or(Error::InvalidVertex(vertex))
    }

    /// Returns true if `vertex` was reached from the source
    pub fn is_reachable(&self, vertex: VertexId) -> Result<bool> {
        Ok(self.distance_to(vertex)?.is_finite())
    }

    /// Edge through which `vertex` was reached, `None` for the source and unreached vertices
    pub fn predecessor_edge(&self, vertex: VertexId) -> Result<Option<EdgeId>> {
        self.predecessors
            .get(vertex)
            .copied()
            .ok_or(Error::InvalidVertex(vertex))
    }

    /// Vertices on the shortest path from the source to `target`, source first
    ///
    /// Empty if `target` was not reached.
    pub fn path_vertices<G: Graph>(&self, graph: &G, target: VertexId) -> Result<Vec<VertexId>> {
        Ok(self
            .trace_back(graph, target)?
            .map(|(vertices, _)| vertices)
            .unwrap_or_default())
    }

    /// Edges on the shortest path from the source to `target`, in travel order
    ///
    /// Empty if `target` was not reached or is the source itself.
    pub fn path_edges<G: Graph>(&self, graph: &G, target: VertexId) -> Result<Vec<EdgeId>> {
        Ok(self
            .trace_back(graph, target)?
            .map(|(_, edges)| edges)
            .unwrap_or_default())
    }

    /// Walks predecessor edges from `target` back to the source
    fn trace_back<G: Graph>(
        &self,
        graph: &G,
        target: VertexId,
    ) -> Result<Option<(Vec<VertexId>, Vec<EdgeId>)>> {
        if !self.is_reachable(target)? {
            return Ok(None);
        }

        let mut vertices = vec![target];
        let mut edges = Vec::new();
        let mut current = target;

        while current != self.source {
            // A simple path never has more edges than there are vertices
            if edges.len() >= self.distances.len() {
                return Err(Error::BrokenPath(target));
            }

            let edge = self.predecessors[current].ok_or(Error::BrokenPath(target))?;
            current = graph
                .opposite(current, edge)
                .ok_or(Error::InvalidEdge(edge))?;
            if current >= self.distances.len() {
                return Err(Error::InvalidVertex(current));
            }

            edges.push(edge);
            vertices.push(current);
        }

        vertices.reverse();
        edges.reverse();
        Ok(Some((vertices, edges)))
    }
}

use log::{debug, trace};
use num_traits::Float;
use std::fmt::{self, Debug};

use crate::algorithm::tree::ShortestPathTree;
use crate::algorithm::weight::{EdgeWeight, PayloadWeight};
use crate::data_structures::Frontier;
use crate::graph::{EdgeId, Graph, VertexId};
use crate::{Error, Result};

/// Lifecycle of a [`Dijkstra`] engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No source has been set yet
    Uninitialized,
    /// A source has been set; distances are not computed yet
    Initialized,
    /// `run` or `run_until` has completed since the last initialization
    Computed,
}

/// Counters and finalization order of the most recent run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Vertices in the order they were finalized
    pub settled: Vec<VertexId>,
    /// Number of successful relaxations
    pub relaxations: usize,
    /// Number of remove-and-reinsert operations on the frontier
    pub repositions: usize,
    /// Whether the run stopped because the target was finalized
    pub stopped_early: bool,
}

enum RunState<W> {
    Uninitialized,
    Initialized(ShortestPathTree<W>),
    Computed(ShortestPathTree<W>),
}

/// Dijkstra's algorithm over an undirected graph
///
/// The engine borrows the graph for its whole lifetime, so the graph cannot
/// change underneath a computed run. Typical use:
///
/// ```
/// use dijkstra_paths::{Dijkstra, UndirectedGraph};
/// use dijkstra_paths::graph::MutableGraph;
///
/// let mut graph = UndirectedGraph::new();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// let c = graph.add_vertex("C");
/// graph.add_edge(a, b, 1.0).unwrap();
/// graph.add_edge(b, c, 2.0).unwrap();
///
/// let mut dijkstra = Dijkstra::new(&graph, |w: &f64| *w);
/// dijkstra.initialize(a).unwrap();
/// dijkstra.run().unwrap();
///
/// assert_eq!(dijkstra.distance_to(c).unwrap(), 3.0);
/// assert_eq!(dijkstra.path_vertices(c).unwrap(), vec![a, b, c]);
/// ```
pub struct Dijkstra<'g, G, W, F> {
    graph: &'g G,
    weight: F,
    state: RunState<W>,
    stats: RunStats,
}

impl<'g, G, W> Dijkstra<'g, G, W, PayloadWeight>
where
    G: Graph,
    G::EdgeData: Clone + Into<W>,
    W: Float + Debug,
{
    /// Creates an engine that uses each edge payload as its weight
    pub fn with_payload_weights(graph: &'g G) -> Self {
        Dijkstra::new(graph, PayloadWeight)
    }
}

impl<'g, G, W, F> Dijkstra<'g, G, W, F>
where
    G: Graph,
    W: Float + Debug,
    F: EdgeWeight<G::EdgeData, W>,
{
    /// Creates an engine over `graph` weighing edges with `weight`
    pub fn new(graph: &'g G, weight: F) -> Self {
        Dijkstra {
            graph,
            weight,
            state: RunState::Uninitialized,
            stats: RunStats::default(),
        }
    }

    /// The graph this engine runs on
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Current lifecycle state
    pub fn state(&self) -> EngineState {
        match self.state {
            RunState::Uninitialized => EngineState::Uninitialized,
            RunState::Initialized(_) => EngineState::Initialized,
            RunState::Computed(_) => EngineState::Computed,
        }
    }

    /// Source of the current run, if initialized
    pub fn source(&self) -> Option<VertexId> {
        match &self.state {
            RunState::Uninitialized => None,
            RunState::Initialized(tree) | RunState::Computed(tree) => Some(tree.source()),
        }
    }

    /// Statistics of the most recent run
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Initialize the algorithm from `source`
    ///
    /// Every distance is set to infinity except the source's, which is zero,
    /// and every predecessor edge is cleared. Any earlier run state is
    /// discarded. On error the engine is left untouched.
    pub fn initialize(&mut self, source: VertexId) -> Result<()> {
        if !self.graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = self.graph.vertex_count();
        self.state = RunState::Initialized(ShortestPathTree::new(source, n));
        self.stats = RunStats::default();

        debug!("Dijkstra initialized from vertex {} over {} vertices", source, n);
        Ok(())
    }

    /// Compute shortest paths from the source to all vertices
    pub fn run(&mut self) -> Result<()> {
        self.execute(None)
    }

    /// Compute shortest paths until `target` is finalized
    ///
    /// Distances and paths of `target` match those of a full [`run`](Self::run);
    /// vertices not finalized before the stop may hold non-optimal distances.
    pub fn run_until(&mut self, target: VertexId) -> Result<()> {
        if !self.graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }
        self.execute(Some(target))
    }

    fn execute(&mut self, target: Option<VertexId>) -> Result<()> {
        let mut tree = match std::mem::replace(&mut self.state, RunState::Uninitialized) {
            RunState::Uninitialized => return Err(Error::NotInitialized),
            RunState::Initialized(tree) | RunState::Computed(tree) => tree,
        };

        let mut stats = RunStats::default();
        match self.relax_all(&mut tree, target, &mut stats) {
            Ok(()) => {
                debug!(
                    "Dijkstra from {} finished: {} settled, {} relaxations, {} repositions, early stop: {}",
                    tree.source(),
                    stats.settled.len(),
                    stats.relaxations,
                    stats.repositions,
                    stats.stopped_early
                );
                self.state = RunState::Computed(tree);
                self.stats = stats;
                Ok(())
            }
            Err(err) => {
                debug!("Dijkstra from {} aborted: {}", tree.source(), err);
                self.state = RunState::Initialized(tree);
                self.stats = stats;
                Err(err)
            }
        }
    }

    /// Main Dijkstra loop
    fn relax_all(
        &self,
        tree: &mut ShortestPathTree<W>,
        target: Option<VertexId>,
        stats: &mut RunStats,
    ) -> Result<()> {
        let graph = self.graph;
        let n = tree.vertex_count();

        // Every vertex starts in the frontier, keyed by its current distance
        let mut frontier = Frontier::with_capacity(n);
        for v in graph.vertices() {
            frontier.push(v, tree.distance_to(v)?);
        }

        while let Some((v, dist_v)) = frontier.pop_min() {
            if Some(v) == target {
                if dist_v.is_finite() {
                    stats.settled.push(v);
                }
                stats.stopped_early = true;
                break;
            }

            // Everything left in the frontier is unreachable
            if dist_v.is_infinite() {
                break;
            }
            stats.settled.push(v);

            for edge in graph.incident_edges(v) {
                let u = graph.opposite(v, edge).ok_or(Error::InvalidEdge(edge))?;
                if u >= n {
                    return Err(Error::InvalidVertex(u));
                }

                let candidate = dist_v + self.edge_weight(edge)?;
                if candidate < tree.distance_to(u)? {
                    tree.relax(u, candidate, edge);
                    stats.relaxations += 1;
                    if frontier.reposition(u, candidate) {
                        stats.repositions += 1;
                    }
                    trace!("relaxed {} -> {} via edge {}: {:?}", v, u, edge, candidate);
                }
            }
        }

        Ok(())
    }

    fn edge_weight(&self, edge: EdgeId) -> Result<W> {
        let data = self.graph.edge_data(edge).ok_or(Error::InvalidEdge(edge))?;
        Ok(self.weight.weight(data))
    }

    fn computed(&self) -> Result<&ShortestPathTree<W>> {
        match &self.state {
            RunState::Uninitialized => Err(Error::NotInitialized),
            RunState::Initialized(_) => Err(Error::NotComputed),
            RunState::Computed(tree) => Ok(tree),
        }
    }

    /// Get the length of the shortest path from the source to `vertex`
    ///
    /// Returns infinity if `vertex` is unreachable.
    pub fn distance_to(&self, vertex: VertexId) -> Result<W> {
        self.computed()?.distance_to(vertex)
    }

    /// Returns true if `vertex` is reachable from the source
    pub fn is_reachable(&self, vertex: VertexId) -> Result<bool> {
        self.computed()?.is_reachable(vertex)
    }

    /// Get the vertices on the shortest path from the source to `vertex`
    pub fn path_vertices(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        self.computed()?.path_vertices(self.graph, vertex)
    }

    /// Get the edges on the shortest path from the source to `vertex`
    pub fn path_edges(&self, vertex: VertexId) -> Result<Vec<EdgeId>> {
        self.computed()?.path_edges(self.graph, vertex)
    }

    /// Borrow the computed shortest-path tree
    pub fn tree(&self) -> Result<&ShortestPathTree<W>> {
        self.computed()
    }

    /// Consume the engine, keeping the computed shortest-path tree
    pub fn into_tree(self) -> Result<ShortestPathTree<W>> {
        match self.state {
            RunState::Uninitialized => Err(Error::NotInitialized),
            RunState::Initialized(_) => Err(Error::NotComputed),
            RunState::Computed(tree) => Ok(tree),
        }
    }
}

impl<G, W, F> Debug for Dijkstra<'_, G, W, F>
where
    G: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            RunState::Uninitialized => "Uninitialized",
            RunState::Initialized(_) => "Initialized",
            RunState::Computed(_) => "Computed",
        };
        f.debug_struct("Dijkstra")
            .field("graph", &self.graph)
            .field("state", &state)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

/// Computes the full shortest-path tree from `source` in one call
pub fn shortest_paths<G, W, F>(graph: &G, weight: F, source: VertexId) -> Result<ShortestPathTree<W>>
where
    G: Graph,
    W: Float + Debug,
    F: EdgeWeight<G::EdgeData, W>,
{
    let mut dijkstra = Dijkstra::new(graph, weight);
    dijkstra.initialize(source)?;
    dijkstra.run()?;
    dijkstra.into_tree()
}

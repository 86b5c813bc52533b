use dijkstra_paths::graph::{Graph, MutableGraph, UndirectedGraph};
use dijkstra_paths::{shortest_paths, Dijkstra, EngineState, Error, PayloadWeight};

// A-B 1, A-C 4, B-C 1, C-D 1, plus an isolated vertex E
fn create_diamond() -> (UndirectedGraph<&'static str, f64>, [usize; 5]) {
    let mut graph = UndirectedGraph::new();
    let a = graph.add_vertex("A");
    let b = graph.add_vertex("B");
    let c = graph.add_vertex("C");
    let d = graph.add_vertex("D");
    let e = graph.add_vertex("E");

    graph.add_edge(a, b, 1.0).unwrap();
    graph.add_edge(a, c, 4.0).unwrap();
    graph.add_edge(b, c, 1.0).unwrap();
    graph.add_edge(c, d, 1.0).unwrap();

    (graph, [a, b, c, d, e])
}

#[test]
fn test_diamond_distances_and_paths() {
    let (graph, [a, b, c, d, e]) = create_diamond();

    let mut dijkstra = Dijkstra::new(&graph, |w: &f64| *w);
    dijkstra.initialize(a).unwrap();
    dijkstra.run().unwrap();

    assert_eq!(dijkstra.state(), EngineState::Computed);
    assert_eq!(dijkstra.distance_to(a).unwrap(), 0.0);
    assert_eq!(dijkstra.distance_to(b).unwrap(), 1.0);
    assert_eq!(dijkstra.distance_to(c).unwrap(), 2.0, "C should be reached via B");
    assert_eq!(dijkstra.distance_to(d).unwrap(), 3.0);
    assert_eq!(dijkstra.path_vertices(d).unwrap(), vec![a, b, c, d]);

    let path_edges = dijkstra.path_edges(d).unwrap();
    assert_eq!(path_edges.len(), 3);
    let labels: Vec<_> = path_edges
        .iter()
        .map(|&edge| {
            let (x, y) = graph.end_vertices(edge).unwrap();
            (*graph.vertex_data(x).unwrap(), *graph.vertex_data(y).unwrap())
        })
        .collect();
    assert_eq!(labels, vec![("A", "B"), ("B", "C"), ("C", "D")]);

    // Isolated vertex
    assert!(dijkstra.distance_to(e).unwrap().is_infinite());
    assert!(!dijkstra.is_reachable(e).unwrap());
    assert!(dijkstra.path_vertices(e).unwrap().is_empty());
    assert!(dijkstra.path_edges(e).unwrap().is_empty());
}

#[test]
fn test_source_paths() {
    let (graph, [a, ..]) = create_diamond();

    let mut dijkstra = Dijkstra::<_, f64, _>::with_payload_weights(&graph);
    dijkstra.initialize(a).unwrap();
    dijkstra.run().unwrap();

    assert_eq!(dijkstra.distance_to(a).unwrap(), 0.0);
    assert_eq!(dijkstra.path_vertices(a).unwrap(), vec![a]);
    assert!(dijkstra.path_edges(a).unwrap().is_empty());
    assert_eq!(dijkstra.source(), Some(a));
}

#[test]
fn test_queries_before_run_fail() {
    let (graph, [a, b, ..]) = create_diamond();
    let mut dijkstra = Dijkstra::<_, f64, _>::with_payload_weights(&graph);

    assert_eq!(dijkstra.state(), EngineState::Uninitialized);
    assert_eq!(dijkstra.source(), None);
    assert_eq!(dijkstra.distance_to(b), Err(Error::NotInitialized));
    assert_eq!(dijkstra.path_vertices(b), Err(Error::NotInitialized));
    assert_eq!(dijkstra.run(), Err(Error::NotInitialized));
    assert_eq!(dijkstra.run_until(b), Err(Error::NotInitialized));

    dijkstra.initialize(a).unwrap();
    assert_eq!(dijkstra.state(), EngineState::Initialized);
    assert_eq!(dijkstra.distance_to(b), Err(Error::NotComputed));
    assert_eq!(dijkstra.path_edges(b), Err(Error::NotComputed));
    assert!(dijkstra.tree().is_err());
}

#[test]
fn test_unknown_vertices_are_rejected() {
    let (graph, [a, ..]) = create_diamond();
    let mut dijkstra = Dijkstra::<_, f64, _>::with_payload_weights(&graph);

    assert_eq!(dijkstra.initialize(42), Err(Error::InvalidVertex(42)));
    assert_eq!(dijkstra.state(), EngineState::Uninitialized);

    dijkstra.initialize(a).unwrap();
    assert_eq!(dijkstra.run_until(42), Err(Error::InvalidVertex(42)));
    assert_eq!(dijkstra.state(), EngineState::Initialized);

    dijkstra.run().unwrap();
    assert_eq!(dijkstra.distance_to(42), Err(Error::InvalidVertex(42)));
    assert_eq!(dijkstra.path_vertices(42), Err(Error::InvalidVertex(42)));
    assert_eq!(dijkstra.path_edges(42), Err(Error::InvalidVertex(42)));
}

#[test]
fn test_reinitialize_discards_previous_run() {
    let (graph, [a, b, c, d, _]) = create_diamond();
    let mut dijkstra = Dijkstra::<_, f64, _>::with_payload_weights(&graph);

    dijkstra.initialize(a).unwrap();
    dijkstra.run().unwrap();
    assert_eq!(dijkstra.distance_to(d).unwrap(), 3.0);

    dijkstra.initialize(d).unwrap();
    assert_eq!(dijkstra.distance_to(a), Err(Error::NotComputed));
    assert!(dijkstra.stats().settled.is_empty());

    dijkstra.run().unwrap();
    assert_eq!(dijkstra.distance_to(d).unwrap(), 0.0);
    assert_eq!(dijkstra.distance_to(a).unwrap(), 3.0);
    assert_eq!(dijkstra.path_vertices(a).unwrap(), vec![d, c, b, a]);
}

#[test]
fn test_run_is_idempotent() {
    let (graph, [a, ..]) = create_diamond();
    let mut dijkstra = Dijkstra::<_, f64, _>::with_payload_weights(&graph);

    dijkstra.initialize(a).unwrap();
    dijkstra.run().unwrap();
    let first = dijkstra.tree().unwrap().clone();

    dijkstra.run().unwrap();
    assert_eq!(dijkstra.tree().unwrap(), &first);
    assert_eq!(dijkstra.stats().relaxations, 0, "A second run has nothing left to improve");
}

#[test]
fn test_run_until_stops_at_target() {
    let (graph, [a, b, c, d, _]) = create_diamond();
    let mut dijkstra = Dijkstra::<_, f64, _>::with_payload_weights(&graph);

    dijkstra.initialize(a).unwrap();
    dijkstra.run_until(b).unwrap();

    assert!(dijkstra.stats().stopped_early);
    assert_eq!(dijkstra.stats().settled, vec![a, b]);
    assert_eq!(dijkstra.distance_to(b).unwrap(), 1.0);
    assert_eq!(dijkstra.path_vertices(b).unwrap(), vec![a, b]);

    // C holds the tentative distance through A, D was never touched
    assert_eq!(dijkstra.distance_to(c).unwrap(), 4.0);
    assert!(dijkstra.distance_to(d).unwrap().is_infinite());
}

#[test]
fn test_run_until_unreachable_target() {
    let (graph, [a, _, _, d, e]) = create_diamond();
    let mut dijkstra = Dijkstra::<_, f64, _>::with_payload_weights(&graph);

    dijkstra.initialize(a).unwrap();
    dijkstra.run_until(e).unwrap();

    assert!(dijkstra.distance_to(e).unwrap().is_infinite());
    assert!(dijkstra.path_vertices(e).unwrap().is_empty());
    assert_eq!(dijkstra.distance_to(d).unwrap(), 3.0);
}

#[test]
fn test_parallel_edges_and_self_loops() {
    let mut graph = UndirectedGraph::new();
    let a = graph.add_vertex("A");
    let b = graph.add_vertex("B");

    graph.add_edge(a, a, 0.5).unwrap();
    let slow = graph.add_edge(a, b, 7.0).unwrap();
    let fast = graph.add_edge(b, a, 2.0).unwrap();

    let tree: dijkstra_paths::ShortestPathTree<f64> = shortest_paths(&graph, PayloadWeight, a).unwrap();
    assert_eq!(tree.distance_to(b).unwrap(), 2.0);
    assert_eq!(tree.path_edges(&graph, b).unwrap(), vec![fast]);
    assert_ne!(tree.predecessor_edge(b).unwrap(), Some(slow));
    assert_eq!(tree.path_vertices(&graph, b).unwrap(), vec![a, b]);
    assert_eq!(tree.predecessor_edge(a).unwrap(), None);
}

#[test]
fn test_custom_weight_function() {
    // Edges carry (name, length); weigh by length only
    let mut graph = UndirectedGraph::new();
    let x = graph.add_vertex("X");
    let y = graph.add_vertex("Y");
    let z = graph.add_vertex("Z");
    graph.add_edge(x, y, ("highway", 10u32)).unwrap();
    graph.add_edge(x, z, ("lane", 3u32)).unwrap();
    graph.add_edge(z, y, ("lane", 3u32)).unwrap();

    let mut dijkstra = Dijkstra::new(&graph, |edge: &(&str, u32)| f64::from(edge.1));
    dijkstra.initialize(x).unwrap();
    dijkstra.run().unwrap();
    assert_eq!(dijkstra.distance_to(y).unwrap(), 6.0);
    assert_eq!(dijkstra.path_vertices(y).unwrap(), vec![x, z, y]);

    // Same graph, every edge costs the same
    let mut hops = Dijkstra::new(&graph, |_: &(&str, u32)| 1.0f32);
    hops.initialize(x).unwrap();
    hops.run().unwrap();
    assert_eq!(hops.distance_to(y).unwrap(), 1.0f32);
    assert_eq!(hops.path_vertices(y).unwrap(), vec![x, y]);
}

#[test]
fn test_integer_payload_weights() {
    let mut graph: UndirectedGraph<(), u32> = UndirectedGraph::new();
    for _ in 0..3 {
        graph.add_vertex(());
    }
    graph.add_edge(0, 1, 5).unwrap();
    graph.add_edge(1, 2, 5).unwrap();
    graph.add_edge(0, 2, 11).unwrap();

    let tree = shortest_paths::<_, f64, _>(&graph, PayloadWeight, 0).unwrap();
    assert_eq!(tree.distances(), &[0.0, 5.0, 10.0]);
    assert_eq!(tree.source(), 0);
}

#[test]
fn test_into_tree_requires_computed_state() {
    let (graph, [a, _, _, d, _]) = create_diamond();
    let mut dijkstra = Dijkstra::<_, f64, _>::with_payload_weights(&graph);
    dijkstra.initialize(a).unwrap();
    let err = dijkstra.into_tree().unwrap_err();
    assert_eq!(err, Error::NotComputed);

    let mut dijkstra = Dijkstra::<_, f64, _>::with_payload_weights(&graph);
    dijkstra.initialize(a).unwrap();
    dijkstra.run().unwrap();
    let tree = dijkstra.into_tree().unwrap();
    assert_eq!(tree.path_vertices(&graph, d).unwrap().len(), 4);
}

#[test]
fn test_negative_cycle_path_is_broken() {
    // Negative weights are unsupported: C drags B's distance below its own
    // and the predecessor chain ends up looping between B and C
    let mut graph = UndirectedGraph::new();
    let a = graph.add_vertex("A");
    let b = graph.add_vertex("B");
    let c = graph.add_vertex("C");
    graph.add_edge(a, b, 1.0).unwrap();
    graph.add_edge(b, c, -5.0).unwrap();

    let mut dijkstra = Dijkstra::<_, f64, _>::with_payload_weights(&graph);
    dijkstra.initialize(a).unwrap();
    dijkstra.run().unwrap();

    assert_eq!(dijkstra.distance_to(c).unwrap(), -4.0);
    assert_eq!(dijkstra.path_vertices(c), Err(Error::BrokenPath(c)));
    assert_eq!(dijkstra.path_edges(c), Err(Error::BrokenPath(c)));
}

// Two vertices whose only listed edge points somewhere else entirely
#[derive(Debug)]
struct DanglingEdgeGraph;

impl Graph for DanglingEdgeGraph {
    type VertexData = ();
    type EdgeData = f64;

    fn vertex_count(&self) -> usize {
        2
    }

    fn edge_count(&self) -> usize {
        1
    }

    fn incident_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        if vertex == 0 {
            Box::new(std::iter::once(0))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn end_vertices(&self, edge: usize) -> Option<(usize, usize)> {
        (edge == 0).then_some((5, 6))
    }

    fn vertex_data(&self, vertex: usize) -> Option<&()> {
        (vertex < 2).then_some(&())
    }

    fn edge_data(&self, edge: usize) -> Option<&f64> {
        (edge == 0).then_some(&1.0)
    }
}

#[test]
fn test_inconsistent_graph_aborts_run() {
    let graph = DanglingEdgeGraph;
    let mut dijkstra = Dijkstra::<_, f64, _>::with_payload_weights(&graph);
    dijkstra.initialize(0).unwrap();

    assert_eq!(dijkstra.run(), Err(Error::InvalidEdge(0)));
    assert_eq!(dijkstra.state(), EngineState::Initialized);
    assert_eq!(dijkstra.source(), Some(0));
    assert_eq!(dijkstra.distance_to(1), Err(Error::NotComputed));
    assert_eq!(dijkstra.path_vertices(0), Err(Error::NotComputed));
}

/// Maps an edge payload to the weight Dijkstra relaxes with
///
/// Weights must be non-negative and must not change while a run is in
/// progress. Neither condition is checked.
///
/// Any closure `Fn(&E) -> W` is an `EdgeWeight`:
///
/// ```
/// use dijkstra_paths::EdgeWeight;
///
/// let by_length = |edge: &(&str, u32)| edge.1 as f64;
/// assert_eq!(by_length.weight(&("ring road", 7)), 7.0);
/// ```
pub trait EdgeWeight<E, W> {
    /// Get the weight for the edge carrying `edge`
    fn weight(&self, edge: &E) -> W;
}

impl<E, W, F> EdgeWeight<E, W> for F
where
    F: Fn(&E) -> W,
{
    fn weight(&self, edge: &E) -> W {
        self(edge)
    }
}

/// Uses the edge payload itself as the weight
///
/// Works for any payload convertible into the weight type, e.g. `f64`
/// payloads with `f64` weights or `u32` payloads with `f64` weights.
#[derive(Debug, Default, Clone, Copy)]
pub struct PayloadWeight;

impl<E, W> EdgeWeight<E, W> for PayloadWeight
where
    E: Clone + Into<W>,
{
    fn weight(&self, edge: &E) -> W {
        edge.clone().into()
    }
}

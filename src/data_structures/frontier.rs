use num_traits::Float;
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::fmt::Debug;

use crate::graph::VertexId;

/// Min-ordered working set of vertices that have not been finalized yet
///
/// Backed by an indexed binary heap. There is no decrease-key: a vertex whose
/// distance improved is repositioned by removing it and inserting it again,
/// each step costing O(log n).
#[derive(Debug)]
pub struct Frontier<W>
where
    W: Float + Debug,
{
    /// Max-heap over reversed keys, so the top is the smallest distance
    heap: PriorityQueue<VertexId, Reverse<OrderedFloat<W>>>,
}

impl<W> Frontier<W>
where
    W: Float + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: PriorityQueue::new(),
        }
    }

    /// Creates a new empty frontier with room for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: PriorityQueue::with_capacity(capacity),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of vertices in the frontier
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the vertex is still in the frontier
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.heap.get_priority(&vertex).is_some()
    }

    /// Returns the key the vertex is currently filed under
    pub fn key(&self, vertex: VertexId) -> Option<W> {
        self.heap
            .get_priority(&vertex)
            .map(|Reverse(key)| key.into_inner())
    }

    /// Inserts a vertex with the given distance key
    ///
    /// A vertex already present keeps a single entry filed under the new key.
    pub fn push(&mut self, vertex: VertexId, distance: W) {
        self.heap.push(vertex, Reverse(OrderedFloat(distance)));
    }

    /// Removes and returns the vertex with the smallest distance key
    pub fn pop_min(&mut self) -> Option<(VertexId, W)> {
        self.heap
            .pop()
            .map(|(vertex, Reverse(key))| (vertex, key.into_inner()))
    }

    /// Returns the vertex with the smallest distance key without removing it
    pub fn peek_min(&self) -> Option<(VertexId, W)> {
        self.heap
            .peek()
            .map(|(vertex, Reverse(key))| (*vertex, key.into_inner()))
    }

    /// Refiles a vertex under an improved distance by removing and reinserting it
    ///
    /// Returns false, and leaves the frontier unchanged, when the vertex is
    /// not in the frontier (it has already been finalized).
    pub fn reposition(&mut self, vertex: VertexId, distance: W) -> bool {
        if self.heap.remove(&vertex).is_none() {
            return false;
        }
        self.push(vertex, distance);
        true
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<W> Default for Frontier<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

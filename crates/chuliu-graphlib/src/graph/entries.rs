//! Internal storage entries for [`Graph`](super::Graph).

use crate::list::List;

/// One outgoing edge: the target vertex together with the edge weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjacent<V, W> {
    pub(in crate::graph) vertex: V,
    // Offset of `vertex` in the graph's vertex order; shifted when an earlier vertex goes away.
    pub(in crate::graph) target: usize,
    pub(in crate::graph) weight: W,
}

impl<V, W> Adjacent<V, W> {
    pub fn vertex(&self) -> &V {
        &self.vertex
    }

    /// Offset of the target in vertex insertion order, as [`Graph::vertex_position`] reports it.
    ///
    /// [`Graph::vertex_position`]: super::Graph::vertex_position
    pub fn target_position(&self) -> usize {
        self.target
    }

    pub fn weight(&self) -> &W {
        &self.weight
    }

    pub fn into_parts(self) -> (V, W) {
        (self.vertex, self.weight)
    }
}

/// A stored vertex and its outgoing adjacency.
#[derive(Debug, Clone)]
pub struct AdjList<V, W> {
    pub(in crate::graph) vertex: V,
    pub(in crate::graph) adjacent: List<Adjacent<V, W>>,
}

impl<V, W> AdjList<V, W> {
    pub fn vertex(&self) -> &V {
        &self.vertex
    }

    pub fn adjacent(&self) -> &List<Adjacent<V, W>> {
        &self.adjacent
    }
}

//! Directed, weighted adjacency-list graph.
//!
//! Vertices are opaque values compared only through the graph's matcher. Each vertex owns a
//! [`List`] of [`Adjacent`] entries, one per outgoing edge, carrying the target vertex and the
//! edge weight. Lookups are linear scans, so vertex and edge insertion are O(V).

mod entries;
mod options;

pub use entries::{AdjList, Adjacent};
pub use options::{GraphOptions, Ownership, ReleaseHook};

use crate::error::{Error, Result};
use crate::list::{List, Position};
use std::fmt;
use std::sync::Arc;

pub type Matcher<V> = Arc<dyn Fn(&V, &V) -> bool + Send + Sync>;

/// Outcome of an insertion that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Inserted,
    AlreadyPresent,
}

impl Insertion {
    pub fn is_inserted(self) -> bool {
        self == Self::Inserted
    }
}

/// Outcome of a removal that did not fail. `Removed` hands the payload back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal<T> {
    Removed(T),
    NotFound,
}

impl<T> Removal<T> {
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed(_))
    }

    pub fn removed(self) -> Option<T> {
        match self {
            Self::Removed(v) => Some(v),
            Self::NotFound => None,
        }
    }
}

pub struct Graph<V, W> {
    matcher: Matcher<V>,
    ownership: Ownership<V>,

    adjlists: List<AdjList<V, W>>,

    // Maintained on every insert/remove; never recomputed.
    vcount: usize,
    ecount: usize,
}

impl<V, W> Graph<V, W>
where
    V: PartialEq + 'static,
{
    pub fn new(options: GraphOptions<V>) -> Self {
        Self::with_matcher(options, |a: &V, b: &V| a == b)
    }
}

impl<V, W> Graph<V, W> {
    pub fn with_matcher<F>(options: GraphOptions<V>, matcher: F) -> Self
    where
        F: Fn(&V, &V) -> bool + Send + Sync + 'static,
    {
        Self::from_parts(Arc::new(matcher), options.ownership)
    }

    fn from_parts(matcher: Matcher<V>, ownership: Ownership<V>) -> Self {
        Self {
            matcher,
            ownership,
            adjlists: List::new(),
            vcount: 0,
            ecount: 0,
        }
    }

    /// An empty graph sharing this graph's matcher and ownership contract.
    pub fn empty_like(&self) -> Self {
        Self::from_parts(Arc::clone(&self.matcher), self.ownership.clone())
    }

    pub fn vertex_count(&self) -> usize {
        self.vcount
    }

    pub fn edge_count(&self) -> usize {
        self.ecount
    }

    pub fn element_size(&self) -> usize {
        std::mem::size_of::<V>()
    }

    pub fn ownership(&self) -> &Ownership<V> {
        &self.ownership
    }

    pub fn matcher(&self) -> &Matcher<V> {
        &self.matcher
    }

    pub fn matches(&self, a: &V, b: &V) -> bool {
        (self.matcher)(a, b)
    }

    pub fn adjlists(&self) -> &List<AdjList<V, W>> {
        &self.adjlists
    }

    fn position_of(&self, v: &V) -> Option<Position> {
        let matcher = &*self.matcher;
        self.adjlists.search(v, |entry, v| matcher(&entry.vertex, v))
    }

    /// Offset of `v` in vertex insertion order. Stable until a vertex is removed.
    pub fn vertex_position(&self, v: &V) -> Option<usize> {
        self.position_of(v).map(Position::index)
    }

    pub fn has_vertex(&self, v: &V) -> bool {
        self.position_of(v).is_some()
    }

    pub fn adjacency(&self, v: &V) -> Option<&List<Adjacent<V, W>>> {
        let pos = self.position_of(v)?;
        self.adjlists.get(pos).map(|entry| &entry.adjacent)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjlists.iter().map(|entry| &entry.vertex)
    }

    /// Every directed edge as `(source, target, weight)`, grouped by source in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, &W)> {
        self.adjlists.iter().flat_map(|entry| {
            entry
                .adjacent
                .iter()
                .map(move |adj| (&entry.vertex, &adj.vertex, &adj.weight))
        })
    }

    pub fn edge_weight(&self, u: &V, v: &V) -> Option<&W> {
        let adjacent = self.adjacency(u)?;
        let matcher = &*self.matcher;
        let pos = adjacent.search(v, |adj, v| matcher(&adj.vertex, v))?;
        adjacent.get(pos).map(|adj| &adj.weight)
    }

    pub fn is_adjacent(&self, u: &V, v: &V) -> bool {
        self.edge_weight(u, v).is_some()
    }

    /// Inserts `data` unless a matching vertex already exists. A rejected duplicate is dropped
    /// without going through the release hook; the graph never owned it.
    pub fn insert_vertex(&mut self, data: V) -> Result<Insertion> {
        if self.position_of(&data).is_some() {
            return Ok(Insertion::AlreadyPresent);
        }
        self.adjlists.push_back(AdjList {
            vertex: data,
            adjacent: List::new(),
        })?;
        self.vcount += 1;
        Ok(Insertion::Inserted)
    }

    /// Inserts the directed edge `u -> v`. Both endpoints must already be vertices. An existing
    /// `u -> v` edge keeps its weight.
    pub fn insert_edge(&mut self, u: &V, v: &V, weight: W) -> Result<Insertion>
    where
        V: Clone,
    {
        let Some(target) = self.position_of(v) else {
            return Err(Error::PreconditionViolated {
                reason: "edge target is not a vertex of the graph",
            });
        };
        let Some(pos) = self.position_of(u) else {
            return Err(Error::PreconditionViolated {
                reason: "edge source is not a vertex of the graph",
            });
        };

        let matcher = &*self.matcher;
        let len = self.adjlists.len();
        let entry = self.adjlists.get_mut(pos).ok_or(Error::InvalidPosition {
            index: pos.index(),
            len,
        })?;
        if entry
            .adjacent
            .search(v, |adj, v| matcher(&adj.vertex, v))
            .is_some()
        {
            return Ok(Insertion::AlreadyPresent);
        }
        entry.adjacent.push_back(Adjacent {
            vertex: v.clone(),
            target: target.index(),
            weight,
        })?;
        self.ecount += 1;
        Ok(Insertion::Inserted)
    }

    /// Removes `v`. Every edge leaving or entering `v` must have been removed first.
    pub fn remove_vertex(&mut self, v: &V) -> Result<Removal<V>> {
        let Some(pos) = self.position_of(v) else {
            return Ok(Removal::NotFound);
        };

        let matcher = &*self.matcher;
        if self
            .adjlists
            .get(pos)
            .is_some_and(|entry| !entry.adjacent.is_empty())
        {
            return Err(Error::PreconditionViolated {
                reason: "vertex still has outgoing edges",
            });
        }
        if self.adjlists.iter().any(|entry| {
            entry
                .adjacent
                .search(v, |adj, v| matcher(&adj.vertex, v))
                .is_some()
        }) {
            return Err(Error::PreconditionViolated {
                reason: "vertex still has incoming edges",
            });
        }

        let entry = self.adjlists.remove_at(pos)?;
        for adj in self
            .adjlists
            .iter_mut()
            .flat_map(|entry| entry.adjacent.iter_mut())
        {
            if adj.target > pos.index() {
                adj.target -= 1;
            }
        }
        self.vcount -= 1;
        Ok(Removal::Removed(entry.vertex))
    }

    /// Removes the edge `u -> v`, returning its weight.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> Result<Removal<W>> {
        let Some(pos) = self.position_of(u) else {
            return Ok(Removal::NotFound);
        };
        let matcher = &*self.matcher;
        let Some(entry) = self.adjlists.get_mut(pos) else {
            return Ok(Removal::NotFound);
        };
        let Some(at) = entry.adjacent.search(v, |adj, v| matcher(&adj.vertex, v)) else {
            return Ok(Removal::NotFound);
        };
        let removed = entry.adjacent.remove_at(at)?;
        self.ecount -= 1;
        Ok(Removal::Removed(removed.weight))
    }

    /// Releases every adjacency list and, for an owned graph, passes each stored vertex to
    /// the release hook. Safe to call more than once; `Drop` calls it as well.
    pub fn destroy(&mut self) {
        let hook = match &self.ownership {
            Ownership::Owned(hook) => Some(Arc::clone(hook)),
            Ownership::Borrowed => None,
        };
        for AdjList { vertex, adjacent } in self.adjlists.drain() {
            drop(adjacent);
            if let Some(hook) = &hook {
                hook(vertex);
            }
        }
        self.adjlists.clear();
        self.vcount = 0;
        self.ecount = 0;
    }
}

impl<V, W> Drop for Graph<V, W> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<V, W> fmt::Debug for Graph<V, W>
where
    V: fmt::Debug,
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("ownership", &self.ownership)
            .field("vertices", &self.vertices().collect::<Vec<_>>())
            .field("edges", &self.edges().collect::<Vec<_>>())
            .finish()
    }
}

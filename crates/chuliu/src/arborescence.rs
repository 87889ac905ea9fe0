//! Minimum-weight spanning arborescence (Chu-Liu/Edmonds).
//!
//! The input graph is snapshotted once into a dense [`Level`]: vertices become offsets in
//! insertion order and every edge becomes an [`Edge`] record. Each recursion level then
//! selects the cheapest incoming edge per vertex, looks for a cycle among those choices, and
//! either returns the choices as they are or contracts the cycle into a super-vertex, solves
//! the smaller level, and expands the answer back. Levels are fresh values; the caller's graph
//! is only read.

mod contract;
mod cycle;
mod select;

use crate::error::{Error, Result};
use crate::graphlib::{Error as GraphError, Graph};
use std::cmp::Ordering;
use tracing::debug;

/// Edge weights the solver can reduce during contraction.
///
/// Implemented for the integer and float primitives. Integer reductions are checked, so a
/// contraction whose reduced weight does not fit the type fails with
/// [`Error::WeightOverflow`] instead of wrapping.
pub trait Weight: Copy + PartialOrd {
    /// `self - by`, or `None` when the difference is not representable.
    fn reduce(self, by: Self) -> Option<Self>;
}

macro_rules! checked_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                fn reduce(self, by: Self) -> Option<Self> {
                    self.checked_sub(by)
                }
            }
        )*
    };
}

macro_rules! float_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                fn reduce(self, by: Self) -> Option<Self> {
                    Some(self - by)
                }
            }
        )*
    };
}

checked_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_weight!(f32, f64);

#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Upper bound on nested contractions. `None` leaves only the natural bound: every
    /// contraction removes at least one vertex.
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Edge<W> {
    pub(crate) from: usize,
    pub(crate) to: usize,
    pub(crate) weight: W,
}

/// One recursion level: vertices are `0..vertex_count`.
#[derive(Debug, Clone)]
pub(crate) struct Level<W> {
    pub(crate) vertex_count: usize,
    pub(crate) root: usize,
    pub(crate) edges: Vec<Edge<W>>,
}

pub(crate) fn less<W: PartialOrd>(a: W, b: W) -> Result<bool> {
    match a.partial_cmp(&b) {
        Some(ord) => Ok(ord == Ordering::Less),
        None => Err(Error::IncomparableWeight),
    }
}

pub fn solve<V, W>(graph: &Graph<V, W>, root: &V) -> Result<Graph<V, W>>
where
    V: Clone,
    W: Weight,
{
    solve_with_options(graph, root, &SolveOptions::default())
}

/// Computes the minimum-weight arborescence of `graph` rooted at `root`.
///
/// The returned graph holds every vertex of `graph`, in the same order, and exactly one
/// incoming edge per non-root vertex. It shares the input's matcher and ownership contract.
/// On error nothing is returned; there is no partial result.
pub fn solve_with_options<V, W>(
    graph: &Graph<V, W>,
    root: &V,
    options: &SolveOptions,
) -> Result<Graph<V, W>>
where
    V: Clone,
    W: Weight,
{
    let level = snapshot(graph, root)?;
    debug!(
        vertices = level.vertex_count,
        edges = level.edges.len(),
        "solving arborescence"
    );

    let mut chosen = solve_level(&level, 0, options)?;
    chosen.sort_by_key(|&e| level.edges[e].to);

    let vertices: Vec<&V> = graph.vertices().collect();
    let mut result = graph.empty_like();
    for v in &vertices {
        result.insert_vertex((*v).clone())?;
    }
    for e in chosen {
        let edge = level.edges[e];
        result.insert_edge(vertices[edge.from], vertices[edge.to], edge.weight)?;
    }
    Ok(result)
}

/// Sum of all edge weights in `graph`.
pub fn total_weight<V, W>(graph: &Graph<V, W>) -> W
where
    W: Copy + std::iter::Sum<W>,
{
    graph.edges().map(|(_, _, w)| *w).sum()
}

fn snapshot<V, W>(graph: &Graph<V, W>, root: &V) -> Result<Level<W>>
where
    W: Copy,
{
    let root = graph.vertex_position(root).ok_or(Error::RootNotFound)?;
    let len = graph.vertex_count();
    let mut edges: Vec<Edge<W>> = Vec::with_capacity(graph.edge_count());
    for (from, adjlist) in graph.adjlists().iter().enumerate() {
        for adj in adjlist.adjacent() {
            let to = adj.target_position();
            debug_assert!(to < len, "adjacency target {to} out of {len} vertices");
            if to >= len {
                return Err(GraphError::InvalidPosition { index: to, len }.into());
            }
            edges.push(Edge {
                from,
                to,
                weight: *adj.weight(),
            });
        }
    }
    Ok(Level {
        vertex_count: len,
        root,
        edges,
    })
}

/// Returns indices into `level.edges` forming the arborescence of `level`.
fn solve_level<W: Weight>(
    level: &Level<W>,
    depth: usize,
    options: &SolveOptions,
) -> Result<Vec<usize>> {
    let best = select::min_incoming(level)?;
    let parent: Vec<Option<usize>> = best
        .iter()
        .map(|e| e.map(|e| level.edges[e].from))
        .collect();

    let Some(cycle) = cycle::find_cycle(&parent, level.root)? else {
        debug!(depth, "parent mapping is acyclic");
        return Ok(best.into_iter().flatten().collect());
    };

    if let Some(max) = options.max_depth {
        if depth >= max {
            return Err(Error::DepthExceeded { max });
        }
    }

    let contraction = contract::contract(level, &best, &cycle)?;
    debug!(
        depth,
        cycle_len = cycle.len(),
        representative = ?cycle.last(),
        vertices = contraction.level.vertex_count,
        edges = contraction.level.edges.len(),
        "contracted cycle"
    );

    let chosen = solve_level(&contraction.level, depth + 1, options)?;
    contract::expand(level, &best, &contraction, &chosen)
}

//! Cycle contraction and expansion.
//!
//! Contraction collapses a cycle of the parent mapping into one super-vertex. An edge entering
//! cycle vertex `v` from outside is re-homed onto the super-vertex with its weight reduced by
//! the weight of `v`'s selected edge, which is what choosing it would save by breaking the
//! cycle at `v`. Edges leaving the cycle keep their weight. Parallel edges that appear after
//! re-homing are merged, keeping the cheapest.

use super::{Edge, Level, Weight, less};
use crate::error::{Error, Result};
use hashbrown::hash_map::Entry;
use rustc_hash::FxBuildHasher;
use tracing::trace;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug)]
pub(super) struct Contraction<W> {
    pub(super) level: Level<W>,
    /// Vertex of the contracted level standing for the whole cycle.
    super_vertex: usize,
    in_cycle: Vec<bool>,
    /// For every contracted edge, the edge of the outer level it was re-homed from.
    source_edge: Vec<usize>,
}

pub(super) fn contract<W: Weight>(
    level: &Level<W>,
    best: &[Option<usize>],
    cycle: &[usize],
) -> Result<Contraction<W>> {
    let mut in_cycle = vec![false; level.vertex_count];
    for &v in cycle {
        in_cycle[v] = true;
    }

    // Vertices keep their relative order; the cycle takes the slot of its lowest member.
    let mut mapping: Vec<usize> = Vec::with_capacity(level.vertex_count);
    let mut next = 0usize;
    let mut super_vertex: Option<usize> = None;
    for &inside in &in_cycle {
        let id = match (inside, super_vertex) {
            (true, Some(s)) => s,
            (true, None) => {
                super_vertex = Some(next);
                next += 1;
                next - 1
            }
            (false, _) => {
                next += 1;
                next - 1
            }
        };
        mapping.push(id);
    }
    let Some(super_vertex) = super_vertex else {
        return Err(Error::DetachedCycle);
    };

    let mut edges: Vec<Edge<W>> = Vec::new();
    let mut source_edge: Vec<usize> = Vec::new();
    let mut slots: HashMap<(usize, usize), usize> = HashMap::default();

    for (idx, edge) in level.edges.iter().enumerate() {
        if edge.to == level.root {
            continue;
        }
        let from = mapping[edge.from];
        let to = mapping[edge.to];
        if from == to {
            continue;
        }

        let weight = if in_cycle[edge.to] {
            let Some(selected) = best[edge.to] else {
                return Err(Error::DetachedCycle);
            };
            edge.weight
                .reduce(level.edges[selected].weight)
                .ok_or(Error::WeightOverflow)?
        } else {
            edge.weight
        };

        match slots.entry((from, to)) {
            Entry::Vacant(slot) => {
                slot.insert(edges.len());
                edges.push(Edge { from, to, weight });
                source_edge.push(idx);
            }
            Entry::Occupied(slot) => {
                let at = *slot.get();
                if less(weight, edges[at].weight)? {
                    edges[at].weight = weight;
                    source_edge[at] = idx;
                }
            }
        }
    }

    Ok(Contraction {
        level: Level {
            vertex_count: next,
            root: mapping[level.root],
            edges,
        },
        super_vertex,
        in_cycle,
        source_edge,
    })
}

/// Maps the arborescence of the contracted level back onto `level`.
///
/// Every chosen edge is replaced by the edge it was re-homed from. The one entering the
/// super-vertex lands on a real cycle vertex, the entry; every other cycle vertex keeps its
/// selected edge, so the cycle opens up at the entry.
pub(super) fn expand<W>(
    level: &Level<W>,
    best: &[Option<usize>],
    contraction: &Contraction<W>,
    chosen: &[usize],
) -> Result<Vec<usize>> {
    let mut out: Vec<usize> = Vec::with_capacity(level.vertex_count.saturating_sub(1));
    let mut entry: Option<usize> = None;

    for &c in chosen {
        let idx = contraction.source_edge[c];
        let to = level.edges[idx].to;
        debug_assert_eq!(
            contraction.level.edges[c].to == contraction.super_vertex,
            contraction.in_cycle[to]
        );
        if contraction.in_cycle[to] {
            entry = Some(to);
        }
        out.push(idx);
    }

    let Some(entry) = entry else {
        return Err(Error::DetachedCycle);
    };
    trace!(entry, "cycle broken at entry vertex");

    for (v, &inside) in contraction.in_cycle.iter().enumerate() {
        if !inside || v == entry {
            continue;
        }
        let Some(selected) = best[v] else {
            return Err(Error::DetachedCycle);
        };
        out.push(selected);
    }

    Ok(out)
}

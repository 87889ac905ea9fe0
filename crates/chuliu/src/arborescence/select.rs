//! Minimum incoming edge selection.

use super::{Level, Weight, less};
use crate::error::{Error, Result};
use tracing::trace;

/// For every non-root vertex, the index of its cheapest incoming edge.
///
/// Edges are scanned in level order and only a strictly cheaper edge replaces the current
/// pick, so ties go to the first edge seen. Self-loops and edges into the root never qualify.
/// Fails with [`Error::Unreachable`] when a non-root vertex has no incoming edge at all.
pub(super) fn min_incoming<W: Weight>(level: &Level<W>) -> Result<Vec<Option<usize>>> {
    let mut best: Vec<Option<usize>> = vec![None; level.vertex_count];

    for (idx, edge) in level.edges.iter().enumerate() {
        if edge.to == level.root || edge.from == edge.to {
            continue;
        }
        let replace = match best[edge.to] {
            None => true,
            Some(cur) => less(edge.weight, level.edges[cur].weight)?,
        };
        if replace {
            best[edge.to] = Some(idx);
        }
    }

    let missing = best
        .iter()
        .enumerate()
        .filter(|&(v, e)| v != level.root && e.is_none())
        .count();
    if missing > 0 {
        return Err(Error::Unreachable { count: missing });
    }

    for (v, e) in best.iter().enumerate() {
        if let Some(e) = e {
            trace!(vertex = v, parent = level.edges[*e].from, "selected incoming edge");
        }
    }
    Ok(best)
}

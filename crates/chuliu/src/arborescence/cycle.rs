//! Cycle detection over the parent mapping.
//!
//! Every non-root vertex has exactly one parent, so the mapping is a functional graph and each
//! walk along parent links either reaches the root, reaches a vertex already known to be clear
//! of cycles, or comes back onto itself.

use crate::error::Result;
use crate::graphlib::Stack;

/// Returns the first cycle found, popped off the walk stack: each vertex's parent is the
/// element before it (wrapping), and the last element is the vertex the walk ran into.
pub(super) fn find_cycle(parent: &[Option<usize>], root: usize) -> Result<Option<Vec<usize>>> {
    let mut settled = vec![false; parent.len()];
    if let Some(r) = settled.get_mut(root) {
        *r = true;
    }

    for start in 0..parent.len() {
        if settled[start] {
            continue;
        }

        let mut walk: Stack<usize> = Stack::new();
        let mut current = start;
        loop {
            if settled[current] {
                break;
            }
            if let Some(cycle) = walk.drain_until(&current, |a, b| a == b) {
                return Ok(Some(cycle));
            }
            walk.push(current)?;
            let Some(p) = parent[current] else {
                break;
            };
            current = p;
        }

        for &v in walk.iter() {
            settled[v] = true;
        }
    }

    Ok(None)
}

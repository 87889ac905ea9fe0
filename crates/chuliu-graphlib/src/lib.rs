//! Directed graph and list containers used by `chuliu`.
//!
//! The graph is an adjacency-list digraph over opaque vertex values. Vertex identity is decided
//! by a caller-supplied matcher, never by hashing, so any value type works as a vertex.

pub mod error;
pub mod graph;
pub mod list;

pub use error::{Error, Result};
pub use graph::{
    AdjList, Adjacent, Graph, GraphOptions, Insertion, Matcher, Ownership, ReleaseHook, Removal,
};
pub use list::{List, Position, Queue, Stack};

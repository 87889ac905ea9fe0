//! Minimum-weight spanning arborescences over directed graphs (Chu-Liu/Edmonds).
//!
//! Build a [`graphlib::Graph`], pick a root, and call [`solve`]:
//!
//! ```
//! use chuliu::graphlib::{Graph, GraphOptions};
//!
//! let mut g: Graph<u32, i64> = Graph::new(GraphOptions::default());
//! for v in [1, 2, 3] {
//!     g.insert_vertex(v).unwrap();
//! }
//! g.insert_edge(&1, &2, 10).unwrap();
//! g.insert_edge(&1, &3, 10).unwrap();
//! g.insert_edge(&2, &3, 1).unwrap();
//! g.insert_edge(&3, &2, 1).unwrap();
//!
//! let tree = chuliu::solve(&g, &1).unwrap();
//! assert_eq!(tree.edge_count(), 2);
//! assert_eq!(chuliu::total_weight(&tree), 11);
//! ```

pub use chuliu_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod arborescence;
pub mod error;
pub mod load;

pub use arborescence::{SolveOptions, Weight, solve, solve_with_options, total_weight};
pub use error::{Error, Result};
pub use load::{EdgeList, load_edge_list, parse_edge_list};

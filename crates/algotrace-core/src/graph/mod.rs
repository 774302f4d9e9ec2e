//! Graph algorithms with step traces
//!
//! - `disjoint_set`: union-find used by Kruskal
//! - `mst`: Kruskal and Prim minimum spanning trees
//! - `dijkstra`: single-source shortest paths

pub mod dijkstra;
pub mod disjoint_set;
pub mod mst;

pub use dijkstra::{run_shortest_path, Distance, ShortestPathOptions, ShortestPathResult};
pub use disjoint_set::DisjointSet;
pub use mst::{run_mst, MstAlgorithm, MstResult};

//! Data models the algorithms read: graphs and numeric arrays
//!
//! Models carry no algorithmic logic. Engines borrow them for a single
//! invocation and never keep references past it.

pub mod array;
pub mod document;
pub mod graph;

pub use array::Array;
pub use document::{EdgeEntry, EdgeSpec, GraphDocument, NodeList, NodePosition};
pub use graph::{Edge, EdgeId, Graph, Node, NodeId};

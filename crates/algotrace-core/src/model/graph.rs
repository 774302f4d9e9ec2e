use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AlgoError, Result};

/// Node identifier, assigned sequentially from 0 in insertion order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Edge identifier, the edge's position in insertion order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A graph node. Coordinates are only carried for renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

/// A weighted edge, undirected unless `directed` is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub weight: i64,
    pub directed: bool,
}

impl Edge {
    /// Whether either endpoint is `node`
    pub fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }

    /// The endpoint opposite `node`, ignoring direction
    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        if self.from == node {
            Some(self.to)
        } else if self.to == node {
            Some(self.from)
        } else {
            None
        }
    }

    /// The node reachable from `current` over this edge, honoring direction.
    ///
    /// Undirected edges can be crossed from either endpoint; directed edges
    /// only from `from` to `to`.
    pub fn step_from(&self, current: NodeId) -> Option<NodeId> {
        if self.from == current {
            Some(self.to)
        } else if !self.directed && self.to == current {
            Some(self.from)
        } else {
            None
        }
    }
}

/// Mutable graph model: nodes in id order, edges in insertion order.
///
/// Every edge endpoint is guaranteed to be a node of the graph. Parallel
/// edges and self-loops are allowed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with `count` nodes at the origin
    pub fn with_nodes(count: usize) -> Self {
        let mut graph = Self::new();
        for _ in 0..count {
            graph.add_node(0.0, 0.0);
        }
        graph
    }

    /// Add a node, assigning the next sequential id
    pub fn add_node(&mut self, x: f64, y: f64) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { id, x, y });
        id
    }

    /// Add an edge between two existing nodes
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        weight: i64,
        directed: bool,
    ) -> Result<EdgeId> {
        let id = EdgeId(self.edges.len());
        for endpoint in [from, to] {
            if !self.contains(endpoint) {
                return Err(AlgoError::invalid_node(
                    endpoint.index(),
                    &format!("edge {}", id),
                ));
            }
        }
        self.edges.push(Edge {
            id,
            from,
            to,
            weight,
            directed,
        });
        Ok(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Look up a node, failing with `InvalidNodeReference` when absent
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id.index())
            .ok_or_else(|| AlgoError::invalid_node(id.index(), "lookup"))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges touching `node` in insertion order, regardless of direction
    pub fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |edge| edge.touches(node))
    }
}

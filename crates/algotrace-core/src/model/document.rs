//! Graph documents: the on-disk and inline forms a graph is authored in
//!
//! A document lists nodes (as a count or with coordinates) and edges:
//!
//! ```toml
//! nodes = 3
//!
//! [[edges]]
//! from = 0
//! to = 1
//! weight = 4
//! ```
//!
//! The same shape is accepted as JSON or YAML, chosen by file extension.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::graph::{Graph, NodeId};
use crate::error::{AlgoError, Result};

/// Node section of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeList {
    /// `n` nodes with ids `0..n`, no coordinates
    Count(usize),
    /// Explicit nodes in id order
    Positions(Vec<NodePosition>),
}

impl Default for NodeList {
    fn default() -> Self {
        NodeList::Count(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    /// Optional, but must match the node's position in the list when given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<usize>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeEntry {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
    #[serde(default)]
    pub directed: bool,
}

/// A serialized graph
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: NodeList,
    #[serde(default)]
    pub edges: Vec<EdgeEntry>,
}

impl GraphDocument {
    /// Load a document from disk, picking the parser from the extension.
    /// Unknown extensions are parsed as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AlgoError::graph_document(path, format!("failed to read: {}", e)))?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let document: GraphDocument = match extension.as_deref() {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| AlgoError::graph_document(path, e))
            }
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).map_err(|e| AlgoError::graph_document(path, e))
            }
            _ => serde_json::from_str(&content).map_err(|e| AlgoError::graph_document(path, e)),
        }?;

        tracing::debug!(path = %path.display(), "graph_document_loaded");
        Ok(document)
    }

    /// Build a document from a node count and inline edge specs
    pub fn from_inline(node_count: usize, edges: &[EdgeSpec]) -> Self {
        GraphDocument {
            nodes: NodeList::Count(node_count),
            edges: edges.iter().map(EdgeEntry::from).collect(),
        }
    }

    /// Build the graph model, validating node ids and edge endpoints
    pub fn to_graph(&self) -> Result<Graph> {
        let mut graph = Graph::new();
        match &self.nodes {
            NodeList::Count(count) => {
                for _ in 0..*count {
                    graph.add_node(0.0, 0.0);
                }
            }
            NodeList::Positions(positions) => {
                for (index, position) in positions.iter().enumerate() {
                    if let Some(id) = position.id {
                        if id != index {
                            return Err(AlgoError::invalid_value(
                                "node id",
                                format!("{} at position {} (ids are sequential from 0)", id, index),
                            ));
                        }
                    }
                    graph.add_node(position.x, position.y);
                }
            }
        }

        for edge in &self.edges {
            graph.add_edge(NodeId(edge.from), NodeId(edge.to), edge.weight, edge.directed)?;
        }

        Ok(graph)
    }
}

/// Inline edge syntax: `FROM-TO:WEIGHT` (undirected) or `FROM>TO:WEIGHT` (directed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
    pub directed: bool,
}

impl FromStr for EdgeSpec {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            AlgoError::invalid_value(
                "edge spec",
                format!("{} (expected FROM-TO:WEIGHT or FROM>TO:WEIGHT)", s),
            )
        };

        let (endpoints, weight) = s.trim().split_once(':').ok_or_else(invalid)?;
        let (directed, (from, to)) = if let Some(pair) = endpoints.split_once('>') {
            (true, pair)
        } else {
            (false, endpoints.split_once('-').ok_or_else(invalid)?)
        };

        Ok(EdgeSpec {
            from: from.trim().parse().map_err(|_| invalid())?,
            to: to.trim().parse().map_err(|_| invalid())?,
            weight: weight.trim().parse().map_err(|_| invalid())?,
            directed,
        })
    }
}

impl From<&EdgeSpec> for EdgeEntry {
    fn from(spec: &EdgeSpec) -> Self {
        EdgeEntry {
            from: spec.from,
            to: spec.to,
            weight: spec.weight,
            directed: spec.directed,
        }
    }
}

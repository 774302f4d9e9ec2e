//! Minimum spanning tree construction with step traces
//!
//! - `kruskal`: global edge scan in weight order with a disjoint-set cycle check
//! - `prim`: frontier growth from a source node
//!
//! Both treat every edge as undirected. On a disconnected graph Kruskal
//! returns a minimum spanning forest while Prim covers only the source's
//! component.

pub mod kruskal;
pub mod prim;

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{AlgoError, Result};
use crate::model::{Edge, Graph, NodeId};
use crate::trace::StepRecord;
use crate::trace_time;

pub use kruskal::kruskal;
pub use prim::prim;

/// Supported MST algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MstAlgorithm {
    #[default]
    Kruskal,
    Prim,
}

impl MstAlgorithm {
    pub const ALL: [MstAlgorithm; 2] = [MstAlgorithm::Kruskal, MstAlgorithm::Prim];

    /// Whether the algorithm needs a designated source node
    pub fn requires_source(self) -> bool {
        matches!(self, MstAlgorithm::Prim)
    }
}

impl FromStr for MstAlgorithm {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "kruskal" => Ok(MstAlgorithm::Kruskal),
            "prim" | "prims" => Ok(MstAlgorithm::Prim),
            other => Err(AlgoError::unsupported(
                "mst algorithm",
                other,
                "kruskal, prim",
            )),
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MstAlgorithm::Kruskal => write!(f, "kruskal"),
            MstAlgorithm::Prim => write!(f, "prim"),
        }
    }
}

/// Accepted edges (in acceptance order) plus the trace that produced them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstResult {
    pub algorithm: MstAlgorithm,
    pub edges: Vec<Edge>,
    pub total_weight: i64,
    pub trace: Vec<StepRecord>,
}

impl MstResult {
    /// Fails with `WeightOverflow` when the accepted weights do not fit in an `i64`
    pub(crate) fn new(
        algorithm: MstAlgorithm,
        edges: Vec<Edge>,
        trace: Vec<StepRecord>,
    ) -> Result<Self> {
        let total_weight = edges
            .iter()
            .try_fold(0i64, |total, e| total.checked_add(e.weight))
            .ok_or_else(|| AlgoError::WeightOverflow {
                context: format!("{} total weight", algorithm),
            })?;
        Ok(Self {
            algorithm,
            edges,
            total_weight,
            trace,
        })
    }

    /// True when the accepted edges connect every node of `graph`
    pub fn spans(&self, graph: &Graph) -> bool {
        graph.node_count() == 0 || self.edges.len() + 1 == graph.node_count()
    }
}

/// Run an MST algorithm over `graph`.
///
/// Kruskal ignores `source`. Prim fails with `MissingSourceNode` when it is
/// absent and `InvalidNodeReference` when it is not a node of the graph.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn run_mst(
    graph: &Graph,
    algorithm: MstAlgorithm,
    source: Option<NodeId>,
) -> Result<MstResult> {
    let start = Instant::now();

    let result = match algorithm {
        MstAlgorithm::Kruskal => kruskal(graph)?,
        MstAlgorithm::Prim => {
            let source = source.ok_or_else(|| AlgoError::missing_source(algorithm))?;
            prim(graph, source)?
        }
    };

    trace_time!(
        start,
        "run_mst",
        accepted = result.edges.len(),
        steps = result.trace.len()
    );
    Ok(result)
}

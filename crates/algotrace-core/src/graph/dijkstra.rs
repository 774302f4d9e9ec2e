//! Single-source shortest paths (Dijkstra) with a trace of distance updates
//!
//! Each round extracts the unvisited node with the smallest tentative
//! distance (ties by node id) and relaxes its edges. Undirected edges relax
//! in both directions, directed edges only from `from` to `to`. The run
//! stops once the cheapest unvisited node is unreachable.
//!
//! Negative weights make the result meaningless. By default they are
//! rejected up front with `NegativeWeightUnsupported`; with the check
//! disabled the run proceeds and may report wrong distances.

use std::cmp::Ordering;
use std::fmt;
use std::time::Instant;

use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::error::{AlgoError, Result};
use crate::model::{EdgeId, Graph, NodeId};
use crate::trace::{Snapshot, StepKind, StepRecord, Trace};
use crate::trace_time;

/// Tentative or final path cost. `Unreachable` orders after every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance {
    Finite(i64),
    Unreachable,
}

impl Distance {
    pub fn finite(self) -> Option<i64> {
        match self {
            Distance::Finite(value) => Some(value),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.cmp(b),
            (Distance::Finite(_), Distance::Unreachable) => Ordering::Less,
            (Distance::Unreachable, Distance::Finite(_)) => Ordering::Greater,
            (Distance::Unreachable, Distance::Unreachable) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{}", value),
            Distance::Unreachable => write!(f, "inf"),
        }
    }
}

/// Finite distances serialize as numbers, unreachable ones as `null`
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(value) => serializer.serialize_i64(*value),
            Distance::Unreachable => serializer.serialize_none(),
        }
    }
}

/// Options for shortest-path runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortestPathOptions {
    /// Fail with `NegativeWeightUnsupported` instead of running on negative weights
    pub reject_negative_weights: bool,
}

impl Default for ShortestPathOptions {
    fn default() -> Self {
        Self {
            reject_negative_weights: true,
        }
    }
}

/// Distances and predecessors indexed by node id, plus the update trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathResult {
    pub source: NodeId,
    pub distances: Vec<Distance>,
    pub predecessors: Vec<Option<NodeId>>,
    pub trace: Vec<StepRecord>,
}

impl ShortestPathResult {
    pub fn distance(&self, node: NodeId) -> Option<Distance> {
        self.distances.get(node.index()).copied()
    }

    /// Nodes from the source to `target` along predecessor links.
    /// `None` when `target` is unknown or unreachable.
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.distance(target)?.is_reachable() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current.index()]?;
            // a predecessor cycle can only come from negative weights
            if path.len() > self.distances.len() {
                return None;
            }
            path.push(current);
        }
        path.reverse();
        Some(path)
    }

    /// `(predecessor, node)` pairs forming the shortest-path tree, by node id
    pub fn tree_edges(&self) -> Vec<(NodeId, NodeId)> {
        self.predecessors
            .iter()
            .enumerate()
            .filter_map(|(node, pred)| pred.map(|p| (p, NodeId(node))))
            .collect()
    }
}

fn first_negative_edge(graph: &Graph) -> Option<AlgoError> {
    graph
        .edges()
        .iter()
        .find(|edge| edge.weight < 0)
        .map(|edge| AlgoError::NegativeWeightUnsupported {
            edge: edge.id.index(),
            from: edge.from.index(),
            to: edge.to.index(),
            weight: edge.weight,
        })
}

/// Run Dijkstra from `source`.
///
/// Fails with `MissingSourceNode` when no source is given and
/// `InvalidNodeReference` when it is not in the graph.
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn run_shortest_path(
    graph: &Graph,
    source: Option<NodeId>,
    opts: &ShortestPathOptions,
) -> Result<ShortestPathResult> {
    let start = Instant::now();

    let source = source.ok_or_else(|| AlgoError::missing_source("dijkstra"))?;
    if !graph.contains(source) {
        return Err(AlgoError::invalid_node(source.index(), "dijkstra source"));
    }

    if let Some(err) = first_negative_edge(graph) {
        if opts.reject_negative_weights {
            return Err(err);
        }
        warn!(%err, "running dijkstra on negative weights; distances may be wrong");
    }

    let result = dijkstra(graph, source);
    trace_time!(start, "run_shortest_path", steps = result.trace.len());
    Ok(result)
}

/// Core loop; `source` must be a node of `graph`
fn dijkstra(graph: &Graph, source: NodeId) -> ShortestPathResult {
    let count = graph.node_count();
    let mut distances = vec![Distance::Unreachable; count];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; count];
    let mut visited = vec![false; count];
    let mut trace = Trace::new();

    distances[source.index()] = Distance::Finite(0);

    loop {
        let current = (0..count)
            .filter(|&node| !visited[node])
            .min_by_key(|&node| (distances[node], node));

        let Some(current) = current else {
            break;
        };

        let Distance::Finite(current_distance) = distances[current] else {
            debug!(node = current, "dijkstra_remaining_unreachable");
            break;
        };

        visited[current] = true;
        let current_id = NodeId(current);

        for edge in graph.edges() {
            let Some(neighbor) = edge.step_from(current_id) else {
                continue;
            };
            if visited[neighbor.index()] {
                continue;
            }

            // overflow counts as no improvement
            let Some(sum) = current_distance.checked_add(edge.weight) else {
                debug!(node = %neighbor, via = current, edge = %edge.id, "dijkstra_overflow_skip");
                continue;
            };
            let candidate = Distance::Finite(sum);
            if candidate < distances[neighbor.index()] {
                distances[neighbor.index()] = candidate;
                predecessors[neighbor.index()] = Some(current_id);
                debug!(node = %neighbor, distance = %candidate, via = current, edge = %edge.id, "dijkstra_update");

                trace.record(
                    StepKind::DistanceUpdate {
                        node: neighbor,
                        distance: sum,
                        via: current_id,
                    },
                    Snapshot::Distances(distances.clone()),
                    vec![current, neighbor.index()],
                );
            }
        }
    }

    ShortestPathResult {
        source,
        distances,
        predecessors,
        trace: trace.into_steps(),
    }
}

/// Edge ids used by the shortest-path tree, for renderers that draw edges
pub fn tree_edge_ids(graph: &Graph, result: &ShortestPathResult) -> Vec<EdgeId> {
    result
        .tree_edges()
        .into_iter()
        .filter_map(|(pred, node)| {
            let target = result.distance(node)?.finite()?;
            let base = result.distance(pred)?.finite()?;
            graph
                .edges()
                .iter()
                .find(|edge| {
                    edge.step_from(pred) == Some(node)
                        && base.checked_add(edge.weight) == Some(target)
                })
                .map(|edge| edge.id)
        })
        .collect()
}

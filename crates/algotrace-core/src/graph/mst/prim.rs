use tracing::debug;

use super::{MstAlgorithm, MstResult};
use crate::error::{AlgoError, Result};
use crate::model::{Edge, Graph, NodeId};
use crate::trace::{Snapshot, StepKind, Trace};

/// Prim's algorithm grown from `source`.
///
/// The frontier holds candidate edges touching the visited set. Each round
/// takes the lightest frontier edge with exactly one unvisited endpoint
/// (ties by edge id). If the frontier runs dry before every node is
/// visited the run stops with a `FrontierExhausted` step and the result
/// spans only the source's component.
pub fn prim(graph: &Graph, source: NodeId) -> Result<MstResult> {
    if !graph.contains(source) {
        return Err(AlgoError::invalid_node(source.index(), "prim source"));
    }

    let total = graph.node_count();
    let mut visited = vec![false; total];
    visited[source.index()] = true;
    let mut visited_count = 1;

    let mut frontier: Vec<&Edge> = graph.incident_edges(source).collect();
    let mut accepted: Vec<Edge> = Vec::new();
    let mut trace = Trace::new();

    trace.record(
        StepKind::MstStart { node: source },
        Snapshot::Tree(Vec::new()),
        vec![source.index()],
    );

    while visited_count < total {
        // anything with both ends visited would close a cycle
        frontier.retain(|edge| visited[edge.from.index()] != visited[edge.to.index()]);

        let lightest = frontier
            .iter()
            .enumerate()
            .min_by_key(|(_, edge)| (edge.weight, edge.id))
            .map(|(position, _)| position);

        let Some(position) = lightest else {
            debug!(visited = visited_count, total, "prim_frontier_exhausted");
            trace.record(
                StepKind::FrontierExhausted {
                    visited: visited_count,
                    total,
                },
                Snapshot::Tree(accepted.iter().map(|e| e.id).collect()),
                Vec::new(),
            );
            break;
        };

        let edge = frontier.swap_remove(position);
        let new_node = if visited[edge.from.index()] {
            edge.to
        } else {
            edge.from
        };

        visited[new_node.index()] = true;
        visited_count += 1;
        accepted.push(edge.clone());
        debug!(edge = %edge.id, weight = edge.weight, node = %new_node, "prim_accept");

        trace.record(
            StepKind::EdgeAccepted {
                edge: edge.id,
                from: edge.from,
                to: edge.to,
                weight: edge.weight,
            },
            Snapshot::Tree(accepted.iter().map(|e| e.id).collect()),
            vec![edge.from.index(), edge.to.index()],
        );

        frontier.extend(graph.incident_edges(new_node).filter(|candidate| {
            candidate
                .opposite(new_node)
                .is_some_and(|other| !visited[other.index()])
        }));
    }

    MstResult::new(MstAlgorithm::Prim, accepted, trace.into_steps())
}

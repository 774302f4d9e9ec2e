use tracing::debug;

use super::{MstAlgorithm, MstResult};
use crate::graph::disjoint_set::DisjointSet;
use crate::error::Result;
use crate::model::{Edge, Graph};
use crate::trace::{Snapshot, StepKind, Trace};

/// Kruskal's algorithm.
///
/// Edges are scanned in ascending weight order, ties broken by insertion
/// order. An edge is accepted when its endpoints are in different
/// components; every edge is scanned even after the tree is complete.
/// Fails only when the total weight overflows.
pub fn kruskal(graph: &Graph) -> Result<MstResult> {
    let mut sorted: Vec<&Edge> = graph.edges().iter().collect();
    // stable sort keeps insertion order among equal weights
    sorted.sort_by_key(|edge| edge.weight);

    let mut components = DisjointSet::new(graph.node_count());
    let mut accepted: Vec<Edge> = Vec::new();
    let mut trace = Trace::new();

    for edge in sorted {
        let from_root = components.find(edge.from.index());
        let to_root = components.find(edge.to.index());

        if from_root == to_root {
            debug!(edge = %edge.id, "kruskal_skip_cycle");
            continue;
        }

        components.union(from_root, to_root);
        accepted.push(edge.clone());
        debug!(edge = %edge.id, weight = edge.weight, "kruskal_accept");

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
    }

    MstResult::new(MstAlgorithm::Kruskal, accepted, trace.into_steps())
}

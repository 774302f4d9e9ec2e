//! Step traces: the ordered, replayable record of an algorithm run
//!
//! Engines append [`StepRecord`]s to a [`Trace`] while they execute and hand
//! the finished sequence to the caller. Records are never modified once
//! pushed, and each one owns a copy of the state it describes, so later
//! changes to the caller's inputs cannot reach recorded snapshots.
//!
//! Records are structured (kind plus operands). The `Display` impl renders
//! the explanation text a renderer would show next to each step.

use std::fmt;

use serde::Serialize;

use crate::graph::dijkstra::Distance;
use crate::model::{EdgeId, NodeId};

/// Which half of a merge an element came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeSide {
    Left,
    Right,
}

impl fmt::Display for MergeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeSide::Left => write!(f, "left"),
            MergeSide::Right => write!(f, "right"),
        }
    }
}

/// Coarse grouping of step kinds for renderers (color, sound, counters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepCategory {
    Comparison,
    Swap,
    Insertion,
    Merge,
    EdgeAccepted,
    DistanceUpdate,
    /// Markers that neither compare nor move data
    Annotation,
}

/// What happened in a single step, with its operands
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepKind {
    /// The untouched input
    Initial,
    Comparison {
        left: usize,
        right: usize,
        left_value: f64,
        right_value: f64,
    },
    /// Values are those now sitting at `left` and `right`
    Swap {
        left: usize,
        right: usize,
        left_value: f64,
        right_value: f64,
    },
    KeySelected {
        index: usize,
        value: f64,
    },
    /// `value` moved one slot right, from `from` to `to`, making room for the key
    Shift {
        from: usize,
        to: usize,
        value: f64,
    },
    Insertion {
        index: usize,
        value: f64,
    },
    PivotSelected {
        index: usize,
        value: f64,
    },
    /// Pivot moved from `from` to its final `index`; equal when already in place
    PivotPlaced {
        index: usize,
        from: usize,
        value: f64,
    },
    Divide {
        start: usize,
        mid: usize,
        end: usize,
    },
    MergeStart {
        start: usize,
        mid: usize,
        end: usize,
        left: Vec<f64>,
        right: Vec<f64>,
    },
    /// One element written into the merged range. `against` is the value it
    /// won a comparison against, `None` when draining a leftover run.
    Merge {
        index: usize,
        value: f64,
        side: MergeSide,
        against: Option<f64>,
    },
    MergeComplete {
        start: usize,
        end: usize,
    },
    MstStart {
        node: NodeId,
    },
    EdgeAccepted {
        edge: EdgeId,
        from: NodeId,
        to: NodeId,
        weight: i64,
    },
    FrontierExhausted {
        visited: usize,
        total: usize,
    },
    DistanceUpdate {
        node: NodeId,
        distance: i64,
        via: NodeId,
    },
}

impl StepKind {
    pub fn category(&self) -> StepCategory {
        match self {
            StepKind::Comparison { .. } => StepCategory::Comparison,
            StepKind::Swap { .. } => StepCategory::Swap,
            StepKind::PivotPlaced { index, from, .. } if index != from => StepCategory::Swap,
            StepKind::Shift { .. } | StepKind::Insertion { .. } => StepCategory::Insertion,
            StepKind::Merge { .. } => StepCategory::Merge,
            StepKind::EdgeAccepted { .. } => StepCategory::EdgeAccepted,
            StepKind::DistanceUpdate { .. } => StepCategory::DistanceUpdate,
            StepKind::Initial
            | StepKind::KeySelected { .. }
            | StepKind::PivotSelected { .. }
            | StepKind::PivotPlaced { .. }
            | StepKind::Divide { .. }
            | StepKind::MergeStart { .. }
            | StepKind::MergeComplete { .. }
            | StepKind::MstStart { .. }
            | StepKind::FrontierExhausted { .. } => StepCategory::Annotation,
        }
    }

    /// Snake-case tag, as used in serialized output
    pub fn name(&self) -> &'static str {
        match self {
            StepKind::Initial => "initial",
            StepKind::Comparison { .. } => "comparison",
            StepKind::Swap { .. } => "swap",
            StepKind::KeySelected { .. } => "key_selected",
            StepKind::Shift { .. } => "shift",
            StepKind::Insertion { .. } => "insertion",
            StepKind::PivotSelected { .. } => "pivot_selected",
            StepKind::PivotPlaced { .. } => "pivot_placed",
            StepKind::Divide { .. } => "divide",
            StepKind::MergeStart { .. } => "merge_start",
            StepKind::Merge { .. } => "merge",
            StepKind::MergeComplete { .. } => "merge_complete",
            StepKind::MstStart { .. } => "mst_start",
            StepKind::EdgeAccepted { .. } => "edge_accepted",
            StepKind::FrontierExhausted { .. } => "frontier_exhausted",
            StepKind::DistanceUpdate { .. } => "distance_update",
        }
    }
}

/// State captured right after a step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Snapshot {
    /// Full array contents
    Array(Vec<f64>),
    /// Edges accepted into the spanning tree so far, in acceptance order
    Tree(Vec<EdgeId>),
    /// Current distance for every node, indexed by node id
    Distances(Vec<Distance>),
}

impl Snapshot {
    pub fn as_array(&self) -> Option<&[f64]> {
        match self {
            Snapshot::Array(values) => Some(values),
            _ => None,
        }
    }
}

/// One appended entry of a trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    #[serde(flatten)]
    pub kind: StepKind,
    pub snapshot: Snapshot,
    /// Array indices (sorts) or node ids (graph algorithms) to highlight
    pub highlight: Vec<usize>,
}

impl StepRecord {
    pub fn category(&self) -> StepCategory {
        self.kind.category()
    }

    /// Values in `start..=end` of an array snapshot, comma separated
    fn slice_text(&self, start: usize, end: usize) -> String {
        self.snapshot
            .as_array()
            .and_then(|values| values.get(start..=end))
            .map(join_values)
            .unwrap_or_default()
    }
}

fn join_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StepKind::Initial => match self.snapshot.as_array() {
                Some(values) => write!(f, "Initial array: {}", join_values(values)),
                None => write!(f, "Initial state"),
            },
            StepKind::Comparison {
                left,
                right,
                left_value,
                right_value,
            } => write!(
                f,
                "Comparing {} at position {} with {} at position {}",
                left_value, left, right_value, right
            ),
            StepKind::Swap {
                left,
                right,
                left_value,
                right_value,
            } => write!(
                f,
                "Swapped {} and {} (positions {} and {})",
                right_value, left_value, left, right
            ),
            StepKind::KeySelected { value, .. } => write!(
                f,
                "Preparing to insert {} into the sorted portion of the array",
                value
            ),
            StepKind::Shift { from, to, value } => write!(
                f,
                "Moved {} from position {} to position {}",
                value, from, to
            ),
            StepKind::Insertion { index, value } => {
                write!(f, "Inserted {} at position {}", value, index)
            }
            StepKind::PivotSelected { index, value } => {
                write!(f, "Pivot selected: {} at position {}", value, index)
            }
            StepKind::PivotPlaced { index, value, .. } => write!(
                f,
                "Placed pivot {} in correct position at {}",
                value, index
            ),
            StepKind::Divide { start, mid, end } => write!(
                f,
                "Dividing array: Left ({}) and Right ({})",
                self.slice_text(*start, *mid),
                self.slice_text(mid + 1, *end)
            ),
            StepKind::MergeStart { left, right, .. } => write!(
                f,
                "Merging two subarrays: Left ({}) and Right ({})",
                join_values(left),
                join_values(right)
            ),
            StepKind::Merge {
                index,
                value,
                side,
                against: Some(other),
            } => write!(
                f,
                "Placed {} from the {} subarray at position {} (compared with {})",
                value, side, index, other
            ),
            StepKind::Merge {
                index,
                value,
                side,
                against: None,
            } => write!(
                f,
                "Adding remaining element {} from the {} subarray at position {}",
                value, side, index
            ),
            StepKind::MergeComplete { start, end } => {
                write!(f, "After merging: {}", self.slice_text(*start, *end))
            }
            StepKind::MstStart { node } => write!(f, "Start from node {}", node),
            StepKind::EdgeAccepted {
                from, to, weight, ..
            } => write!(
                f,
                "Add edge from node {} to node {} with weight {}",
                from, to, weight
            ),
            StepKind::FrontierExhausted { visited, total } => write!(
                f,
                "No valid edge found, algorithm is complete ({} of {} nodes reached)",
                visited, total
            ),
            StepKind::DistanceUpdate {
                node,
                distance,
                via,
            } => write!(
                f,
                "Update distance for node {}: {} (via node {})",
                node, distance, via
            ),
        }
    }
}

/// Append-only step log for a single algorithm invocation
#[derive(Debug, Default)]
pub struct Trace {
    steps: Vec<StepRecord>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: StepKind, snapshot: Snapshot, highlight: Vec<usize>) {
        tracing::trace!(step = self.steps.len(), kind = kind.name(), "trace_step");
        self.steps.push(StepRecord {
            kind,
            snapshot,
            highlight,
        });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Finish the trace; the returned sequence is the caller's to keep
    pub fn into_steps(self) -> Vec<StepRecord> {
        self.steps
    }
}

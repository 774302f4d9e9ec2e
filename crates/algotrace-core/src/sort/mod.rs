//! Comparison sorts that record every comparison and data movement
//!
//! Each algorithm works on a private copy of the input. The result holds the
//! sequence of array snapshots (input first, sorted array last, one per data
//! movement in between) and the full step trace, whose first record is
//! always the untouched input.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{AlgoError, Result};
use crate::model::Array;
use crate::trace::{Snapshot, StepCategory, StepKind, StepRecord, Trace};
use crate::trace_time;

/// Supported sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Quick,
        SortAlgorithm::Merge,
    ];

    /// Whether equal values keep their relative order
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            SortAlgorithm::Bubble | SortAlgorithm::Insertion | SortAlgorithm::Merge
        )
    }
}

impl FromStr for SortAlgorithm {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bubble" => Ok(SortAlgorithm::Bubble),
            "selection" => Ok(SortAlgorithm::Selection),
            "insertion" => Ok(SortAlgorithm::Insertion),
            "quick" | "quicksort" => Ok(SortAlgorithm::Quick),
            "merge" | "mergesort" => Ok(SortAlgorithm::Merge),
            other => Err(AlgoError::unsupported(
                "sort algorithm",
                other,
                "bubble, selection, insertion, quick, merge",
            )),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortAlgorithm::Bubble => write!(f, "bubble"),
            SortAlgorithm::Selection => write!(f, "selection"),
            SortAlgorithm::Insertion => write!(f, "insertion"),
            SortAlgorithm::Quick => write!(f, "quick"),
            SortAlgorithm::Merge => write!(f, "merge"),
        }
    }
}

/// Snapshots and step records of one sort run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortResult {
    pub algorithm: SortAlgorithm,
    pub snapshots: Vec<Vec<f64>>,
    pub steps: Vec<StepRecord>,
}

impl SortResult {
    /// The final, sorted array
    pub fn sorted(&self) -> &[f64] {
        self.snapshots.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Steps in the given category
    pub fn count(&self, category: StepCategory) -> usize {
        self.steps
            .iter()
            .filter(|step| step.category() == category)
            .count()
    }

    /// Comparisons plus data movements, i.e. every step that is not an annotation
    pub fn operation_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.category() != StepCategory::Annotation)
            .count()
    }
}

/// Working copy plus the trace being built for one run
pub(crate) struct SortRun {
    values: Vec<f64>,
    snapshots: Vec<Vec<f64>>,
    trace: Trace,
}

impl SortRun {
    fn new(input: &[f64]) -> Self {
        let values = input.to_vec();
        let mut trace = Trace::new();
        trace.record(StepKind::Initial, Snapshot::Array(values.clone()), Vec::new());
        Self {
            snapshots: vec![values.clone()],
            values,
            trace,
        }
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    fn record(&mut self, kind: StepKind, highlight: Vec<usize>) {
        self.trace
            .record(kind, Snapshot::Array(self.values.clone()), highlight);
    }

    /// Record a step that changed (or placed) data, capturing a snapshot
    fn record_movement(&mut self, kind: StepKind, highlight: Vec<usize>) {
        self.record(kind, highlight);
        self.snapshots.push(self.values.clone());
    }

    fn compare(&mut self, left: usize, right: usize) {
        let kind = StepKind::Comparison {
            left,
            right,
            left_value: self.values[left],
            right_value: self.values[right],
        };
        self.record(kind, vec![left, right]);
    }

    fn swap(&mut self, left: usize, right: usize) {
        self.values.swap(left, right);
        let kind = StepKind::Swap {
            left,
            right,
            left_value: self.values[left],
            right_value: self.values[right],
        };
        self.record_movement(kind, vec![left, right]);
    }

    fn finish(self, algorithm: SortAlgorithm) -> SortResult {
        SortResult {
            algorithm,
            snapshots: self.snapshots,
            steps: self.trace.into_steps(),
        }
    }
}

/// Sort a copy of `array` with `algorithm`, recording every step
#[tracing::instrument(skip(array), fields(len = array.len()))]
pub fn run_sort(array: &Array, algorithm: SortAlgorithm) -> SortResult {
    let start = Instant::now();
    let mut run = SortRun::new(array.values());

    match algorithm {
        SortAlgorithm::Bubble => bubble::sort(&mut run),
        SortAlgorithm::Selection => selection::sort(&mut run),
        SortAlgorithm::Insertion => insertion::sort(&mut run),
        SortAlgorithm::Quick => quick::sort(&mut run),
        SortAlgorithm::Merge => merge::sort(&mut run),
    }

    let result = run.finish(algorithm);
    trace_time!(
        start,
        "run_sort",
        steps = result.steps.len(),
        snapshots = result.snapshots.len()
    );
    result
}

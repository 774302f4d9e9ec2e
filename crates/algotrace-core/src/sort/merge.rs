//! Top-down merge sort over inclusive ranges `[start, mid]` and `[mid+1, end]`.
//! Ties take from the left run, which keeps the sort stable.

use crate::trace::{MergeSide, StepKind};

use super::SortRun;

pub(super) fn sort(run: &mut SortRun) {
    if run.len() > 1 {
        divide(run, 0, run.len() - 1);
    }
}

fn divide(run: &mut SortRun, start: usize, end: usize) {
    if start >= end {
        return;
    }
    let mid = start + (end - start) / 2;
    run.record(StepKind::Divide { start, mid, end }, (start..=end).collect());
    divide(run, start, mid);
    divide(run, mid + 1, end);
    merge(run, start, mid, end);
}

fn merge(run: &mut SortRun, start: usize, mid: usize, end: usize) {
    let left = run.values[start..=mid].to_vec();
    let right = run.values[mid + 1..=end].to_vec();
    run.record(
        StepKind::MergeStart {
            start,
            mid,
            end,
            left: left.clone(),
            right: right.clone(),
        },
        (start..=end).collect(),
    );

    let (mut i, mut j) = (0, 0);
    for k in start..=end {
        let (value, side, against) = match (left.get(i), right.get(j)) {
            (Some(&l), Some(&r)) if l <= r => {
                i += 1;
                (l, MergeSide::Left, Some(r))
            }
            (Some(&l), Some(&r)) => {
                j += 1;
                (r, MergeSide::Right, Some(l))
            }
            (Some(&l), None) => {
                i += 1;
                (l, MergeSide::Left, None)
            }
            (None, Some(&r)) => {
                j += 1;
                (r, MergeSide::Right, None)
            }
            (None, None) => break,
        };

        run.values[k] = value;
        run.record_movement(
            StepKind::Merge {
                index: k,
                value,
                side,
                against,
            },
            vec![k],
        );
    }

    run.record(StepKind::MergeComplete { start, end }, (start..=end).collect());
}

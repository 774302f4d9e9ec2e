//! Quick sort with Lomuto partitioning. The pivot is the last element of the
//! range; the left part is sorted before the right part.

use crate::trace::StepKind;

use super::SortRun;

pub(super) fn sort(run: &mut SortRun) {
    if run.len() > 1 {
        quick(run, 0, run.len() - 1);
    }
}

/// Sort the inclusive range `low..=high`
fn quick(run: &mut SortRun, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let pivot = partition(run, low, high);
    if pivot > low {
        quick(run, low, pivot - 1);
    }
    quick(run, pivot + 1, high);
}

fn partition(run: &mut SortRun, low: usize, high: usize) -> usize {
    let pivot = run.value(high);
    run.record(
        StepKind::PivotSelected {
            index: high,
            value: pivot,
        },
        vec![high],
    );

    let mut store = low;
    for j in low..high {
        run.compare(j, high);
        if run.value(j) < pivot {
            if store != j {
                run.swap(store, j);
            }
            store += 1;
        }
    }

    let placed = StepKind::PivotPlaced {
        index: store,
        from: high,
        value: pivot,
    };
    if store == high {
        run.record(placed, vec![store]);
    } else {
        run.values.swap(store, high);
        run.record_movement(placed, vec![store, high]);
    }
    store
}

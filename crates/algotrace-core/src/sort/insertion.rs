//! Insertion sort
//!
//! The key travels left by adjacent exchange, so every captured snapshot is
//! a permutation of the input. Each exchange is recorded as a `Shift` of the
//! larger element, and the key's final slot as an `Insertion`.

use crate::trace::StepKind;

use super::SortRun;

pub(super) fn sort(run: &mut SortRun) {
    for i in 1..run.len() {
        let key = run.value(i);
        run.record(StepKind::KeySelected { index: i, value: key }, vec![i]);

        let mut j = i;
        while j > 0 {
            run.compare(j - 1, j);
            if run.value(j - 1) <= key {
                break;
            }
            let moved = run.value(j - 1);
            run.values.swap(j - 1, j);
            run.record_movement(
                StepKind::Shift {
                    from: j - 1,
                    to: j,
                    value: moved,
                },
                vec![j - 1, j],
            );
            j -= 1;
        }

        run.record_movement(StepKind::Insertion { index: j, value: key }, vec![j]);
    }
}

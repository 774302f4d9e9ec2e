//! Bubble sort without early exit: every pass runs to the end of the unsorted
//! region, so an n-element input always produces n(n-1)/2 comparisons.

use super::SortRun;

pub(super) fn sort(run: &mut SortRun) {
    let n = run.len();
    for pass in 0..n {
        for j in 0..n.saturating_sub(pass + 1) {
            run.compare(j, j + 1);
            if run.value(j) > run.value(j + 1) {
                run.swap(j, j + 1);
            }
        }
    }
}

use super::SortRun;

/// Selection sort. Swaps only when the minimum is not already in place.
pub(super) fn sort(run: &mut SortRun) {
    let n = run.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            run.compare(j, min);
            if run.value(j) < run.value(min) {
                min = j;
            }
        }
        if min != i {
            run.swap(i, min);
        }
    }
}

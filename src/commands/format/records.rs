//! Records output helpers

use algotrace_core::records::{escape_quotes, join_list};
use algotrace_core::trace::StepRecord;

/// `S <index> <kind> hl=<indices> "<explanation>"`
pub fn step_line(index: usize, step: &StepRecord) -> String {
    format!(
        "S {} {} hl={} \"{}\"",
        index,
        step.kind.name(),
        join_list(&step.highlight),
        escape_quotes(&step.to_string())
    )
}

pub fn print_steps(steps: &[StepRecord]) {
    for (index, step) in steps.iter().enumerate() {
        println!("{}", step_line(index, step));
    }
}

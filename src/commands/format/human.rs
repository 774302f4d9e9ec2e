//! Human-readable step playback

use std::thread;
use std::time::Duration;

use algotrace_core::trace::{Snapshot, StepRecord};

use super::format_values;

/// How steps are played back in human output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    pub show_snapshots: bool,
    /// Pause before every step after the first
    pub delay: Duration,
}

impl Playback {
    /// Print numbered step explanations, optionally with the state after each
    pub fn print_steps(&self, steps: &[StepRecord]) {
        for (i, step) in steps.iter().enumerate() {
            if i > 0 && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
            println!("{:>4}. {}", i + 1, step);
            if self.show_snapshots {
                println!("      {}", snapshot_text(&step.snapshot));
            }
        }
    }
}

/// One-line rendering of the state captured with a step
pub fn snapshot_text(snapshot: &Snapshot) -> String {
    match snapshot {
        Snapshot::Array(values) => format!("[{}]", format_values(values)),
        Snapshot::Tree(edges) if edges.is_empty() => "tree: (empty)".to_string(),
        Snapshot::Tree(edges) => format!(
            "tree: {}",
            edges
                .iter()
                .map(|e| format!("e{}", e))
                .collect::<Vec<_>>()
                .join(" ")
        ),
        Snapshot::Distances(distances) => format!(
            "dist: {}",
            distances
                .iter()
                .enumerate()
                .map(|(node, d)| format!("{}={}", node, d))
                .collect::<Vec<_>>()
                .join(" ")
        ),
    }
}

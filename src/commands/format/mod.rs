//! Shared output formatting helpers for commands
//!
//! Step traces print the same way in every command: numbered explanations
//! (human), step objects with a `text` field (JSON), or `S` lines (records).

pub mod human;
pub mod json;
pub mod records;

/// Values joined for display, e.g. `1, 2.5, 3`
pub fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

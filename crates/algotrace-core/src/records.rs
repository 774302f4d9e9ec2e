//! Utilities for records output format

use std::fmt::Display;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Join values with commas, the list encoding used by records fields.
///
/// An empty list encodes as `-` so every field keeps a value.
pub fn join_list<T: Display>(values: &[T]) -> String {
    if values.is_empty() {
        return "-".to_string();
    }
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Build a records header line (`H algotrace=1 records=1 mode=... key=value ...`)
pub fn header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H algotrace=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

//! JSON output helpers

use algotrace_core::error::Result;
use algotrace_core::trace::StepRecord;
use serde_json::{json, Value};

/// Serialize steps, adding each step's position and explanation text
pub fn steps_json(steps: &[StepRecord]) -> Result<Vec<Value>> {
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let mut value = serde_json::to_value(step)?;
            if let Some(obj) = value.as_object_mut() {
                obj.insert("index".to_string(), json!(index));
                obj.insert("text".to_string(), json!(step.to_string()));
            }
            Ok(value)
        })
        .collect()
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

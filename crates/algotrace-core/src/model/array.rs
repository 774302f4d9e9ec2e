use serde::Serialize;

use crate::error::{AlgoError, Result};

/// An ordered sequence of finite numbers, the input to every sort.
///
/// Construction validates the values, so sorts never see NaN or infinities
/// and `<` is a total order over the contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Array(Vec<f64>);

impl Array {
    /// Wrap already-numeric values, rejecting non-finite entries
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if let Some((index, value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(AlgoError::InvalidNumericInput {
                index,
                value: value.to_string(),
            });
        }
        Ok(Array(values))
    }

    /// Parse textual entries (e.g. command-line arguments)
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let mut values = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let raw = entry.as_ref();
            match raw.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => values.push(value),
                _ => {
                    return Err(AlgoError::InvalidNumericInput {
                        index,
                        value: raw.to_string(),
                    })
                }
            }
        }
        Ok(Array(values))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

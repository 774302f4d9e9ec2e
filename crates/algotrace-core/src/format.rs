//! Output format handling for algotrace
//!
//! Supports three output formats:
//! - human: Numbered step explanations for terminal use
//! - json: Stable, machine-readable JSON of the full result and trace
//! - records: Line-oriented format for scripts and renderers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlgoError;

/// Output format for algotrace commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records output
    Records,
}

impl FromStr for OutputFormat {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(AlgoError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

//! Error types and exit codes for algotrace
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown algorithm)
//! - 3: Data error (bad graph, missing source node, non-numeric input)

use std::path::PathBuf;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph or array input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading inputs or running an algorithm.
///
/// Every error aborts only the current invocation; there is no process-wide
/// engine state to corrupt.
#[derive(Error, Debug)]
pub enum AlgoError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("{algorithm} requires a source node")]
    MissingSourceNode { algorithm: String },

    #[error("{context} references node {id}, which is not in the graph")]
    InvalidNodeReference { id: usize, context: String },

    #[error("array entry {index} is not a number: {value:?}")]
    InvalidNumericInput { index: usize, value: String },

    #[error("edge {edge} ({from} -> {to}) has negative weight {weight}; dijkstra requires non-negative weights")]
    NegativeWeightUnsupported {
        edge: usize,
        from: usize,
        to: usize,
        weight: i64,
    },

    #[error("{context} overflows a 64-bit integer")]
    WeightOverflow { context: String },

    #[error("invalid graph document {path:?}: {reason}")]
    InvalidGraphDocument { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(String),
}

impl AlgoError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        AlgoError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        AlgoError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for an algorithm invoked without its source node
    pub fn missing_source(algorithm: impl std::fmt::Display) -> Self {
        AlgoError::MissingSourceNode {
            algorithm: algorithm.to_string(),
        }
    }

    /// Create an error for a reference to a node that does not exist
    pub fn invalid_node(id: usize, context: &str) -> Self {
        AlgoError::InvalidNodeReference {
            id,
            context: context.to_string(),
        }
    }

    /// Create an error for an unreadable graph document
    pub fn graph_document(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        AlgoError::InvalidGraphDocument {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AlgoError::UnknownFormat(_)
            | AlgoError::DuplicateFormat
            | AlgoError::UsageError(_)
            | AlgoError::InvalidValue { .. }
            | AlgoError::Unsupported { .. } => ExitCode::Usage,

            AlgoError::MissingSourceNode { .. }
            | AlgoError::InvalidNodeReference { .. }
            | AlgoError::InvalidNumericInput { .. }
            | AlgoError::NegativeWeightUnsupported { .. }
            | AlgoError::WeightOverflow { .. }
            | AlgoError::InvalidGraphDocument { .. } => ExitCode::Data,

            AlgoError::Io(_)
            | AlgoError::Json(_)
            | AlgoError::Toml(_)
            | AlgoError::Yaml(_)
            | AlgoError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            AlgoError::UnknownFormat(_) => "unknown_format",
            AlgoError::DuplicateFormat => "duplicate_format",
            AlgoError::UsageError(_) => "usage_error",
            AlgoError::InvalidValue { .. } => "invalid_value",
            AlgoError::Unsupported { .. } => "unsupported",
            AlgoError::MissingSourceNode { .. } => "missing_source_node",
            AlgoError::InvalidNodeReference { .. } => "invalid_node_reference",
            AlgoError::InvalidNumericInput { .. } => "invalid_numeric_input",
            AlgoError::NegativeWeightUnsupported { .. } => "negative_weight_unsupported",
            AlgoError::WeightOverflow { .. } => "weight_overflow",
            AlgoError::InvalidGraphDocument { .. } => "invalid_graph_document",
            AlgoError::Io(_) => "io_error",
            AlgoError::Json(_) => "json_error",
            AlgoError::Toml(_) => "toml_error",
            AlgoError::Yaml(_) => "yaml_error",
            AlgoError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for algotrace operations
pub type Result<T> = std::result::Result<T, AlgoError>;

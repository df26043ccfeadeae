//! Error types and exit codes for gka
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, bad graph index)
//! - 3: Data error (unreadable source, unknown node, invalid config)

mod macros;

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
    /// Data error - unreadable source, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or answering path queries
#[derive(Error, Debug)]
pub enum GraphError {
    // Parse-time conditions, recovered locally by the parser
    #[error("cannot read source {name}: {reason}")]
    UnreadableSource { name: String, reason: String },

    #[error("unparsable line {line_no} in {source_name}: {content:?}")]
    UnparsableLine {
        source_name: String,
        line_no: usize,
        content: String,
    },

    #[error("duplicate edge: {id}")]
    DuplicateEdge { id: String },

    // Query-time conditions, surfaced to the caller
    #[error("path finder has no graph bound")]
    UninitializedEngine,

    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("no graph given to bind")]
    InvalidGraph,

    #[error("graph index {index} out of range ({count} graphs loaded)")]
    GraphIndexOutOfRange { index: usize, count: usize },

    // Usage errors
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors
    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a source that could not be opened or read
    pub fn unreadable(name: impl std::fmt::Display, error: impl std::fmt::Display) -> Self {
        GraphError::UnreadableSource {
            name: name.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an identifier that does not resolve to a node
    pub fn node_not_found(id: &str) -> Self {
        GraphError::NodeNotFound { id: id.to_string() }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Whether the parser recovers from this condition by skipping and continuing
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GraphError::UnreadableSource { .. }
                | GraphError::UnparsableLine { .. }
                | GraphError::DuplicateEdge { .. }
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. }
            | GraphError::GraphIndexOutOfRange { .. } => ExitCode::Usage,

            GraphError::UnreadableSource { .. }
            | GraphError::UnparsableLine { .. }
            | GraphError::NodeNotFound { .. }
            | GraphError::InvalidConfig { .. } => ExitCode::Data,

            GraphError::DuplicateEdge { .. }
            | GraphError::UninitializedEngine
            | GraphError::InvalidGraph
            | GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnreadableSource { .. } => "unreadable_source",
            GraphError::UnparsableLine { .. } => "unparsable_line",
            GraphError::DuplicateEdge { .. } => "duplicate_edge",
            GraphError::UninitializedEngine => "uninitialized_engine",
            GraphError::NodeNotFound { .. } => "node_not_found",
            GraphError::InvalidGraph => "invalid_graph",
            GraphError::GraphIndexOutOfRange { .. } => "graph_index_out_of_range",
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::InvalidConfig { .. } => "invalid_config",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
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

/// Result type alias for gka operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_errors_are_not_recoverable() {
        assert!(!GraphError::UninitializedEngine.is_recoverable());
        assert!(!GraphError::InvalidGraph.is_recoverable());
        assert!(!GraphError::node_not_found("A").is_recoverable());
    }

    #[test]
    fn test_parse_errors_are_recoverable() {
        assert!(GraphError::unreadable("x.gka", "missing").is_recoverable());
        assert!(GraphError::DuplicateEdge { id: "A--B".into() }.is_recoverable());
        assert!(GraphError::UnparsableLine {
            source_name: "x.gka".into(),
            line_no: 1,
            content: "junk".into(),
        }
        .is_recoverable());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(GraphError::node_not_found("A").exit_code(), ExitCode::Data);
        assert_eq!(
            GraphError::GraphIndexOutOfRange { index: 4, count: 2 }.exit_code(),
            ExitCode::Usage
        );
        assert_eq!(GraphError::UninitializedEngine.exit_code(), ExitCode::Failure);
        assert_eq!(i32::from(ExitCode::Usage), 2);
    }

    #[test]
    fn test_to_json_envelope() {
        let json = GraphError::node_not_found("Z").to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "node_not_found");
        assert_eq!(json["error"]["message"], "node not found: Z");
    }
}

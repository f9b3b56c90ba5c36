//! Error types and exit codes for wayfind
//!
//! Exit codes:
//! - 0: Success (an unreachable target is a successful search)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed graph input)
//! - 3: Data error (invalid configuration file)

mod macros;

use std::path::PathBuf;

use thiserror::Error;

use crate::graph::{EdgeId, Node};

/// Exit codes for the wayfind binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unreadable or invalid config (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or searching them
#[derive(Error, Debug)]
pub enum WayfindError {
    // Graph contract violations (exit code 2)
    #[error("{context} does not belong to this graph")]
    InvalidReference { context: String },

    #[error("node index {index} out of range (graph has {len} nodes)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("edge {edge} is not incident to node {node}")]
    NotIncident { edge: EdgeId, node: Node },

    #[error("no weight recorded for edge {edge}")]
    MissingWeight { edge: EdgeId },

    #[error("cannot connect node {node} to itself")]
    SelfLoop { node: Node },

    #[error("invalid weight {weight} for edge {edge} (must be finite and non-negative)")]
    InvalidWeight { edge: EdgeId, weight: f64 },

    // CLI usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Configuration errors (exit code 3)
    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WayfindError {
    /// Create an error for a node or edge handle owned by another graph
    pub fn invalid_reference(context: impl std::fmt::Display) -> Self {
        WayfindError::InvalidReference {
            context: context.to_string(),
        }
    }

    /// Create a usage error from any displayable message
    pub fn usage(message: impl std::fmt::Display) -> Self {
        WayfindError::UsageError(message.to_string())
    }

    /// Create an error for a config file that failed to parse or validate
    pub fn invalid_config(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        WayfindError::InvalidConfig {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfindError::InvalidReference { .. }
            | WayfindError::IndexOutOfRange { .. }
            | WayfindError::NotIncident { .. }
            | WayfindError::MissingWeight { .. }
            | WayfindError::SelfLoop { .. }
            | WayfindError::InvalidWeight { .. }
            | WayfindError::UnknownFormat(_)
            | WayfindError::UsageError(_) => ExitCode::Usage,

            WayfindError::InvalidConfig { .. } | WayfindError::Toml(_) => ExitCode::Data,

            WayfindError::Io(_) | WayfindError::Json(_) => ExitCode::Failure,
        }
    }

    /// Stable identifier used in structured output
    pub fn error_type(&self) -> &'static str {
        match self {
            WayfindError::InvalidReference { .. } => "invalid_reference",
            WayfindError::IndexOutOfRange { .. } => "index_out_of_range",
            WayfindError::NotIncident { .. } => "not_incident",
            WayfindError::MissingWeight { .. } => "missing_weight",
            WayfindError::SelfLoop { .. } => "self_loop",
            WayfindError::InvalidWeight { .. } => "invalid_weight",
            WayfindError::UnknownFormat(_) => "unknown_format",
            WayfindError::UsageError(_) => "usage_error",
            WayfindError::InvalidConfig { .. } => "invalid_config",
            WayfindError::Io(_) => "io_error",
            WayfindError::Toml(_) => "toml_error",
            WayfindError::Json(_) => "json_error",
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

/// Result type alias for wayfind operations
pub type Result<T> = std::result::Result<T, WayfindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violations_are_usage_errors() {
        let err = WayfindError::IndexOutOfRange { index: 7, len: 4 };
        assert_eq!(err.exit_code(), ExitCode::Usage);
        assert_eq!(
            err.to_string(),
            "node index 7 out of range (graph has 4 nodes)"
        );

        let err = WayfindError::MissingWeight { edge: EdgeId(3) };
        assert_eq!(err.exit_code(), ExitCode::Usage);
        assert_eq!(err.to_string(), "no weight recorded for edge e3");
    }

    #[test]
    fn test_config_errors_are_data_errors() {
        let err = WayfindError::invalid_config("wayfind.toml", "bad frontier");
        assert_eq!(err.exit_code(), ExitCode::Data);
        assert_eq!(err.error_type(), "invalid_config");
    }

    #[test]
    fn test_to_json_envelope() {
        let err = WayfindError::usage("bad edge spec");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "usage_error");
        assert_eq!(json["error"]["message"], "bad edge spec");
    }

    #[test]
    fn test_exit_code_into_i32() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Data), 3);
    }
}

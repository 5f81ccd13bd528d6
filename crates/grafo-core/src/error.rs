//! Error types and exit codes for grafo
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed edge specs)
//! - 3: Data error (graph rejected the operation)

use thiserror::Error;

/// Exit codes reported by the grafo CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - the graph rejected the operation (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during grafo operations
#[derive(Error, Debug)]
pub enum GrafoError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("invalid edge spec '{spec}': {reason}")]
    InvalidEdgeSpec { spec: String, reason: String },

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("edge limit reached: the graph already holds {limit} edges")]
    CapacityExceeded { limit: usize },

    #[error("invalid endpoints: {reason}")]
    InvalidEndpoints { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GrafoError {
    /// Map an error to the exit code the CLI should report
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            GrafoError::UnknownFormat(_)
            | GrafoError::InvalidEdgeSpec { .. }
            | GrafoError::UsageError(_) => ExitCode::Usage,

            // Data errors
            GrafoError::CapacityExceeded { .. } | GrafoError::InvalidEndpoints { .. } => {
                ExitCode::Data
            }

            // Generic failures
            GrafoError::Io(_) | GrafoError::Json(_) | GrafoError::Other(_) => ExitCode::Failure,
        }
    }

    /// Stable identifier for the error variant, used in the JSON envelope
    pub fn error_type(&self) -> &'static str {
        match self {
            GrafoError::UnknownFormat(_) => "unknown_format",
            GrafoError::InvalidEdgeSpec { .. } => "invalid_edge_spec",
            GrafoError::UsageError(_) => "usage_error",
            GrafoError::CapacityExceeded { .. } => "capacity_exceeded",
            GrafoError::InvalidEndpoints { .. } => "invalid_endpoints",
            GrafoError::Io(_) => "io_error",
            GrafoError::Json(_) => "json_error",
            GrafoError::Other(_) => "other",
        }
    }

    /// Structured error envelope for `--format json`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        })
    }
}

/// Convenience result type for grafo operations
pub type Result<T> = std::result::Result<T, GrafoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(
            GrafoError::CapacityExceeded { limit: 50 }.exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            GrafoError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(GrafoError::Other("x".into()).exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_json_envelope() {
        let err = GrafoError::InvalidEndpoints {
            reason: "empty label".into(),
        };
        let json = err.to_json();
        assert_eq!(json["code"], 3);
        assert_eq!(json["type"], "invalid_endpoints");
        assert!(json["message"]
            .as_str()
            .unwrap()
            .contains("invalid endpoints"));
    }
}

//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur when exporting or importing a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Snapshot text is not JSON of the expected layout
    #[error("Malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// An operand holds text keystrokes cannot produce
    #[error("Invalid {field} operand '{text}'")]
    InvalidOperand { field: &'static str, text: String },

    /// Exactly one of operator and previous operand is set
    #[error("Operator and previous operand must be set together")]
    UnpairedOperator,

    /// A division-by-zero result with an operation still pending
    #[error("An error result cannot have a pending operation")]
    PendingOperationOnError,
}

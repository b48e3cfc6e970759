//! Reconciler errors

use thiserror::Error;

/// Errors from constraint reconciliation
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("Failed to serialize overrides audit trail: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type for reconciliation operations
pub type ReconcileResult<T> = Result<T, ReconcileError>;

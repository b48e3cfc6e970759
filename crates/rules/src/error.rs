//! Rule errors

use thiserror::Error;

/// Errors from rule construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Conditional rule is missing required field: {0}")]
    MissingField(&'static str),
}

/// Result type for rule operations
pub type RuleResult<T> = Result<T, RuleError>;

//! Domain error taxonomy for the learning portal backend.
//!
//! Services return [`DomainError`]; the REST layer maps each variant to an
//! HTTP status in `io::rest::api_error`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Referenced child, activity or other record does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The child exists but belongs to a different account
    #[error("Child {child_id} does not belong to the requesting account")]
    Unauthorized { child_id: String },

    /// Rejected input
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Stored data broke an assumption of the exposure computation
    #[error("Computation invariant violated: {0}")]
    ComputationInvariantViolation(String),

    /// Persistence layer failure
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    pub fn child_not_found(child_id: &str) -> Self {
        DomainError::NotFound {
            entity: "Child",
            id: child_id.to_string(),
        }
    }

    pub fn activity_not_found(activity_id: &str) -> Self {
        DomainError::NotFound {
            entity: "Activity",
            id: activity_id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }
}

/// Convenience Result type for domain services
pub type DomainResult<T> = std::result::Result<T, DomainError>;

// Copyright 2025 Cowboy AI, LLC.

//! Error types for composite store operations

use thiserror::Error;

/// Errors that can occur while coordinating the runtime and declarative stores
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Resource not found in either store
    #[error("Resource not found: {resource_type} with id {id}")]
    ResourceNotFound {
        /// Type of resource that wasn't found
        resource_type: String,
        /// ID that was searched for
        id: String,
    },

    /// Create would collide with an immutable declarative resource
    #[error("Resource {id} already exists as a declarative resource")]
    DeclarativeConflict {
        /// ID of the conflicting resource
        id: String,
    },

    /// Mutation attempted on an immutable declarative resource
    #[error("Resource {resource_type} with id {id} is declarative and cannot be modified")]
    ImmutableResource {
        /// Type of the immutable resource
        resource_type: String,
        /// ID of the immutable resource
        id: String,
    },

    /// Pagination parameter was negative
    #[error("{parameter} must be non-negative, got {value}")]
    NegativeParameter {
        /// Name of the offending parameter
        parameter: &'static str,
        /// The rejected value
        value: i64,
    },

    /// Invalid operation
    #[error("Invalid operation: {reason}")]
    InvalidOperation {
        /// Reason why the operation is invalid
        reason: String,
    },

    /// Backing store failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for composite store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl StoreError {
    /// Create a not-found error for a resource type and id
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::ResourceNotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        StoreError::Storage(msg.into())
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::ResourceNotFound { .. })
    }

    /// Check if this is a create-time declarative conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::DeclarativeConflict { .. })
    }

    /// Check if this is an update/delete-time immutability rejection
    pub fn is_immutable(&self) -> bool {
        matches!(self, StoreError::ImmutableResource { .. })
    }

    /// Check if this is a parameter validation error
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, StoreError::NegativeParameter { .. })
    }
}

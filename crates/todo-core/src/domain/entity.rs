//! Domain Layer - Core Entity Trait and Errors
//!
//! Every persisted record has a unique id. Errors raised anywhere in the
//! core funnel into [`DomainError`].

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    InvalidInput(String),
    /// A stored value exists but does not have the expected shape
    Corrupt(String),
    Storage(StorageError),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Corrupt(msg) => write!(f, "Corrupt stored value: {}", msg),
            DomainError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for DomainError {}

/// Result type for key-value backends
pub type StorageResult<T> = Result<T, StorageError>;

/// Failures reported by a key-value backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageError {
    /// The backend cannot be reached at all (e.g. storage disabled by the browser)
    Unavailable,
    /// A write would exceed the backend's capacity
    QuotaExceeded,
    /// Anything else the backend reported
    Backend(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "storage unavailable"),
            StorageError::QuotaExceeded => write!(f, "storage quota exceeded"),
            StorageError::Backend(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::Storage(err)
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Corrupt(err.to_string())
    }
}

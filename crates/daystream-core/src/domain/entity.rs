//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! All entities carry a stable string identifier and are thread-safe.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// Generate a fresh identifier for a new entity
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    /// Durable storage could not be read or written
    Storage(String),
    /// Stored data exists but is structurally invalid
    Corrupt(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
            DomainError::Corrupt(msg) => write!(f, "Corrupt data: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::Corrupt("daystream_items".to_string());
        assert_eq!(err.to_string(), "Corrupt data: daystream_items");
    }
}

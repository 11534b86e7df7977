//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! Both front-ends render them: the REST layer as status codes, the SOAP layer
//! as `error` children inside an otherwise normal response element.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An item with the same id is already stored
    DuplicateId(i64),
    /// No item carries the requested id
    NotFound(i64),
}

impl DomainError {
    /// The id the failed operation was keyed on
    pub fn id(&self) -> i64 {
        match self {
            DomainError::DuplicateId(id) | DomainError::NotFound(id) => *id,
        }
    }
}

// The message text is part of the wire contract of both front-ends,
// so it deliberately leaves the id out.
impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::DuplicateId(_) => write!(f, "Item with this ID already exists"),
            DomainError::NotFound(_) => write!(f, "Item not found"),
        }
    }
}

impl std::error::Error for DomainError {}

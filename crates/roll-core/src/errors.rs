//! Cross-cutting error types for rollcall.
//!
//! Parsing and validation helpers in this crate return `CoreError`. Storage
//! errors live in `roll-db` (`DatabaseError`), which converts from this type.

use thiserror::Error;

/// Errors that can be raised by any rollcall crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result, or the entity belongs to another user.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Required input is missing or malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

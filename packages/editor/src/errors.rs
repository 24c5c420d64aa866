//! Error types for the editor

use inkspire_content::EntityKind;
use thiserror::Error;

use crate::mutations::MutationError;

/// Errors from the admin edit tools
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("Required fields are empty: {}", fields.join(", "))]
    Validation { fields: Vec<String> },

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Edit mode is not active")]
    NotAuthorized,

    #[error("No editor is open")]
    NotEditing,

    #[error("Unknown image: {0}")]
    UnknownImage(String),

    #[error("{kind} records cannot be created or deleted")]
    UnsupportedOperation { kind: EntityKind },

    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),
}

impl EditError {
    /// Field names that failed validation (empty for other errors)
    pub fn invalid_fields(&self) -> &[String] {
        match self {
            EditError::Validation { fields } => fields,
            _ => &[],
        }
    }
}

/// Credential check failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Every variant that concerns a single field carries the field's wire name
/// so callers can report it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// A required text field is empty or whitespace only.
    EmptyField { field: &'static str },

    /// `updatedAt` lies before `createdAt`.
    TimestampOrder {
        created_at: String,
        updated_at: String,
    },

    /// Pagination parameters do not describe a valid page.
    Pagination(String),
}

impl ValidationError {
    /// Wire name of the offending field, when the error concerns one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::EmptyId => Some("id"),
            Self::InvalidEmail(_) => Some("email"),
            Self::EmptyField { field } => Some(*field),
            Self::TimestampOrder { .. } => Some("updatedAt"),
            Self::Pagination(_) => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::EmptyField { field } => write!(f, "Field '{}' cannot be empty", field),
            Self::TimestampOrder {
                created_at,
                updated_at,
            } => write!(
                f,
                "updatedAt ({}) must not be earlier than createdAt ({})",
                updated_at, created_at
            ),
            Self::Pagination(reason) => write!(f, "Invalid pagination: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

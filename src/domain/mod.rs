//! Domain value objects and types.
//!
//! Type-safe wrappers for contact IDs and email addresses. These value
//! objects validate at construction time, including during deserialization,
//! so an invalid value cannot be represented inside a `Contact`.

pub mod contact_id;
pub mod email;
pub mod errors;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;

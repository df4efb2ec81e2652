//! Data models for the Contact entity.
//!
//! The canonical `Contact` record, the payloads used to create and patch it,
//! and the paginated envelope returned by searches.

pub mod contact;
pub mod search_result;

pub use contact::{Contact, ContactField, CreateContactDto, UpdateContactDto};
pub use search_result::ContactSearchResult;

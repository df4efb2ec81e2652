//! Contact search over an in-memory collection.
//!
//! Filters a slice of contacts with a [`ContactQuery`] and returns one page
//! of the ordered matches as a [`crate::models::ContactSearchResult`].

pub mod contact_query;

pub use contact_query::{normalize, search_contacts, ContactQuery};

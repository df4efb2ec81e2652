//! Contact Schema - shared data shapes for a Contact entity.
//!
//! This library defines the interchange contract that services, UIs and
//! storage layers use to pass contacts around, plus a few helpers for the
//! record's lifecycle.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`ContactId`, `EmailAddress`) and `ValidationError`
//! - **models**: `Contact`, `CreateContactDto`, `UpdateContactDto`, `ContactSearchResult`
//! - **search**: In-memory filtering and paging into a `ContactSearchResult`
//! - **schema**: JSON Schema generation and export
//! - **config**: Configuration from environment variables
//! - **error**: Configuration and export error types
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use contact_schema::{Contact, ContactId, CreateContactDto, EmailAddress, UpdateContactDto};
//!
//! let dto = CreateContactDto::new("Ada", "Lovelace", EmailAddress::new("ada@example.com").unwrap());
//! let mut contact = Contact::create(ContactId::new("c-1").unwrap(), dto, Utc::now()).unwrap();
//! assert!(!contact.is_favorite);
//!
//! let patch = UpdateContactDto { is_favorite: Some(true), ..Default::default() };
//! contact.apply_update(patch, Utc::now()).unwrap();
//! assert!(contact.is_favorite);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod schema;
pub mod search;

pub use config::Config;
pub use domain::{ContactId, EmailAddress, ValidationError};
pub use error::{ConfigError, SchemaExportError};
pub use models::{Contact, ContactField, ContactSearchResult, CreateContactDto, UpdateContactDto};
pub use search::{search_contacts, ContactQuery};

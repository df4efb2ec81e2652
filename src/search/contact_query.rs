//! In-memory contact filtering and paging.
//!
//! Matching is case-insensitive and whitespace-normalized:
//! - `text` matches as a substring of the first, last or full name, the
//!   email, the company or any tag
//! - `tag` must equal one of the contact's tags
//! - `favorites_only` keeps favorites only
//!
//! Results are ordered by last name, then first name, then id.

use crate::config::Config;
use crate::domain::ValidationError;
use crate::models::{Contact, ContactSearchResult};
use std::cmp::Ordering;
use tracing::debug;

/// Filter criteria for [`search_contacts`]. The default query matches every
/// contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactQuery {
    /// Free text to look for
    pub text: Option<String>,

    /// Exact tag to require
    pub tag: Option<String>,

    /// Keep favorites only
    pub favorites_only: bool,
}

impl ContactQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn favorites_only(mut self) -> Self {
        self.favorites_only = true;
        self
    }

    /// Returns true if the query has no effective criteria.
    pub fn is_empty(&self) -> bool {
        !self.favorites_only
            && self.text.as_deref().map_or(true, |t| t.trim().is_empty())
            && self.tag.as_deref().map_or(true, |t| t.trim().is_empty())
    }

    /// Check a single contact against every criterion.
    pub fn matches(&self, contact: &Contact) -> bool {
        if self.favorites_only && !contact.is_favorite {
            return false;
        }

        if let Some(tag) = self.tag.as_deref().map(normalize).filter(|t| !t.is_empty()) {
            if !contact.tags().iter().any(|t| normalize(t) == tag) {
                return false;
            }
        }

        match self.text.as_deref().map(normalize).filter(|t| !t.is_empty()) {
            Some(text) => text_matches(&text, contact),
            None => true,
        }
    }
}

/// Lowercase, trim and collapse inner whitespace.
pub fn normalize(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn text_matches(needle: &str, contact: &Contact) -> bool {
    let optional = [contact.company.as_deref()];

    contact.email.normalized().contains(needle)
        || normalize(&contact.full_name()).contains(needle)
        || [contact.first_name.as_str(), contact.last_name.as_str()]
            .into_iter()
            .chain(optional.into_iter().flatten())
            .chain(contact.tags().iter().map(String::as_str))
            .any(|field| normalize(field).contains(needle))
}

fn compare_contacts(a: &Contact, b: &Contact) -> Ordering {
    normalize(&a.last_name)
        .cmp(&normalize(&b.last_name))
        .then_with(|| normalize(&a.first_name).cmp(&normalize(&b.first_name)))
        .then_with(|| a.id.cmp(&b.id))
}

/// Filter, order and page a set of contacts.
///
/// `page` is 1-based. A `page_size` of 0 uses the configured default and
/// larger values are clamped to the configured maximum; the returned
/// envelope reports the size actually used.
///
/// # Errors
///
/// Returns `ValidationError::Pagination` if `page` is 0.
pub fn search_contacts(
    contacts: &[Contact],
    query: &ContactQuery,
    page: usize,
    page_size: usize,
    config: &Config,
) -> Result<ContactSearchResult, ValidationError> {
    let page_size = config.resolve_page_size(page_size);

    let mut matched: Vec<Contact> = contacts
        .iter()
        .filter(|contact| query.matches(contact))
        .cloned()
        .collect();
    matched.sort_by(compare_contacts);

    debug!(
        candidates = contacts.len(),
        matched = matched.len(),
        page,
        page_size,
        "Contact search"
    );

    ContactSearchResult::paginate(matched, page, page_size)
}

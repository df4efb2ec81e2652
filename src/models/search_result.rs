//! Pagination envelope for contact searches.

use super::contact::Contact;
use crate::domain::ValidationError;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// One page of contacts plus the paging metadata needed to fetch the rest.
///
/// Pages are numbered from 1. Deserialization applies the same rules as
/// [`ContactSearchResult::new`].
#[derive(Debug, Clone, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSearchResult {
    /// Contacts on this page, in result order
    pub contacts: Vec<Contact>,

    /// Number of matching contacts across all pages
    pub total: usize,

    /// 1-based page number
    pub page: usize,

    /// Maximum number of contacts per page
    pub page_size: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContactSearchResult {
    contacts: Vec<Contact>,
    total: usize,
    page: usize,
    page_size: usize,
}

impl<'de> Deserialize<'de> for ContactSearchResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawContactSearchResult::deserialize(deserializer)?;
        ContactSearchResult::new(raw.contacts, raw.total, raw.page, raw.page_size)
            .map_err(serde::de::Error::custom)
    }
}

impl ContactSearchResult {
    /// Build an envelope, checking that it describes a possible page.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Pagination` when `page` or `page_size` is
    /// zero, the page holds more than `page_size` contacts, or `total` is
    /// smaller than the page.
    pub fn new(
        contacts: Vec<Contact>,
        total: usize,
        page: usize,
        page_size: usize,
    ) -> Result<Self, ValidationError> {
        let result = Self {
            contacts,
            total,
            page,
            page_size,
        };
        result.validate()?;
        Ok(result)
    }

    /// An empty first page.
    ///
    /// Unlike [`ContactSearchResult::new`] this cannot fail: a `page_size`
    /// of 0 is raised to 1 so the result always validates.
    pub fn empty(page_size: usize) -> Self {
        Self {
            contacts: Vec::new(),
            total: 0,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Cut one page out of an already ordered collection.
    ///
    /// A page past the end yields an empty `contacts` list with the real
    /// `total`, so callers can still render paging controls.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Pagination` if `page` or `page_size` is zero.
    pub fn paginate(
        all: Vec<Contact>,
        page: usize,
        page_size: usize,
    ) -> Result<Self, ValidationError> {
        check_paging(page, page_size)?;

        let total = all.len();
        let start = (page - 1).saturating_mul(page_size);
        let contacts = all.into_iter().skip(start).take(page_size).collect();

        Ok(Self {
            contacts,
            total,
            page,
            page_size,
        })
    }

    /// Check the envelope's structural rules.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Pagination` describing the first broken rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_paging(self.page, self.page_size)?;

        if self.contacts.len() > self.page_size {
            return Err(ValidationError::Pagination(format!(
                "page holds {} contacts but pageSize is {}",
                self.contacts.len(),
                self.page_size
            )));
        }

        if self.total < self.contacts.len() {
            return Err(ValidationError::Pagination(format!(
                "total {} is smaller than the {} contacts on this page",
                self.total,
                self.contacts.len()
            )));
        }

        Ok(())
    }

    /// Returns true if the envelope passes [`ContactSearchResult::validate`].
    pub fn is_consistent(&self) -> bool {
        self.validate().is_ok()
    }

    /// Number of pages needed to hold `total` contacts.
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }
}

fn check_paging(page: usize, page_size: usize) -> Result<(), ValidationError> {
    if page == 0 {
        return Err(ValidationError::Pagination(
            "page must be at least 1".to_string(),
        ));
    }
    if page_size == 0 {
        return Err(ValidationError::Pagination(
            "pageSize must be at least 1".to_string(),
        ));
    }
    Ok(())
}

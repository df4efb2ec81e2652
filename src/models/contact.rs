//! Contact record and its create/update payloads.

use crate::domain::{ContactId, EmailAddress, ValidationError};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::debug;

/// A person with contact details.
///
/// Optional fields are `None` when unknown and are omitted from JSON rather
/// than written as `null`. `Some(String::new())` is a distinct, explicitly
/// empty value.
///
/// Deserialization runs [`Contact::validate`], so a decoded contact always
/// has non-blank names and `updated_at >= created_at`.
#[derive(Debug, Clone, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique identifier, assigned once by the owning store
    pub id: ContactId,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Email address
    pub email: EmailAddress,

    /// Phone number, free-form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Company/organization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Tags in insertion order; duplicates are kept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Whether the contact is marked as a favorite
    pub is_favorite: bool,

    /// When the contact was created
    pub created_at: DateTime<Utc>,

    /// When the contact was last updated, never earlier than `created_at`
    pub updated_at: DateTime<Utc>,
}

/// Wire form of a contact before its invariants are checked
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContact {
    id: ContactId,
    first_name: String,
    last_name: String,
    email: EmailAddress,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    is_favorite: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

// Deserialize through `validate` so producers cannot hand us a broken record
impl<'de> Deserialize<'de> for Contact {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawContact::deserialize(deserializer)?;
        let contact = Contact {
            id: raw.id,
            first_name: raw.first_name,
            last_name: raw.last_name,
            email: raw.email,
            phone: raw.phone,
            company: raw.company,
            notes: raw.notes,
            tags: raw.tags,
            is_favorite: raw.is_favorite,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        };
        contact.validate().map_err(serde::de::Error::custom)?;
        Ok(contact)
    }
}

/// Payload for creating a new contact.
///
/// Carries everything except the fields the creating system assigns:
/// `id`, `isFavorite`, `createdAt` and `updatedAt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactDto {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Sparse patch for an existing contact.
///
/// Every field is optional. A field left as `None` leaves the stored value
/// untouched; it never clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

/// A patchable contact field, named as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Notes,
    Tags,
    IsFavorite,
}

impl ContactField {
    /// The camelCase key used in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Company => "company",
            Self::Notes => "notes",
            Self::Tags => "tags",
            Self::IsFavorite => "isFavorite",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

impl Contact {
    /// Build a new contact from a creation payload.
    ///
    /// The caller supplies the identifier and the creation instant. The new
    /// contact is not a favorite and has `created_at == updated_at == now`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if a required name is blank.
    pub fn create(
        id: ContactId,
        dto: CreateContactDto,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        dto.validate()?;

        let CreateContactDto {
            first_name,
            last_name,
            email,
            phone,
            company,
            notes,
            tags,
        } = dto;

        debug!(contact_id = %id, "Creating contact");

        Ok(Self {
            id,
            first_name,
            last_name,
            email,
            phone,
            company,
            notes,
            tags,
            is_favorite: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a sparse patch, returning the fields it supplied.
    ///
    /// Only fields present in `patch` are written.
    ///
    /// # Timestamps
    ///
    /// The caller owns the clock, so `updated_at` follows these rules:
    /// - a patch supplying at least one field sets `updated_at` to `now`
    /// - if `now` is not later than the current `updated_at`, it is kept, so
    ///   `updated_at` never moves backwards or below `created_at`
    /// - an empty patch (see [`UpdateContactDto::is_empty`]) changes nothing,
    ///   `updated_at` included, and returns an empty list
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if the patch sets a required
    /// name to a blank string. The contact is left unmodified in that case.
    pub fn apply_update(
        &mut self,
        patch: UpdateContactDto,
        now: DateTime<Utc>,
    ) -> Result<Vec<ContactField>, ValidationError> {
        patch.validate()?;

        let UpdateContactDto {
            first_name,
            last_name,
            email,
            phone,
            company,
            notes,
            tags,
            is_favorite,
        } = patch;

        let mut changed = Vec::new();

        if let Some(first_name) = first_name {
            self.first_name = first_name;
            changed.push(ContactField::FirstName);
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
            changed.push(ContactField::LastName);
        }
        if let Some(email) = email {
            self.email = email;
            changed.push(ContactField::Email);
        }
        if let Some(phone) = phone {
            self.phone = Some(phone);
            changed.push(ContactField::Phone);
        }
        if let Some(company) = company {
            self.company = Some(company);
            changed.push(ContactField::Company);
        }
        if let Some(notes) = notes {
            self.notes = Some(notes);
            changed.push(ContactField::Notes);
        }
        if let Some(tags) = tags {
            self.tags = Some(tags);
            changed.push(ContactField::Tags);
        }
        if let Some(is_favorite) = is_favorite {
            self.is_favorite = is_favorite;
            changed.push(ContactField::IsFavorite);
        }

        if !changed.is_empty() {
            self.updated_at = self.updated_at.max(now);
        }

        debug!(
            contact_id = %self.id,
            fields = changed.len(),
            "Applied contact update"
        );

        Ok(changed)
    }

    /// Check the record's invariants.
    ///
    /// Useful for contacts that arrive via deserialization, where the
    /// timestamps come from an external producer.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule: blank names, then timestamp order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)?;

        if self.updated_at < self.created_at {
            return Err(ValidationError::TimestampOrder {
                created_at: self.created_at.to_rfc3339(),
                updated_at: self.updated_at.to_rfc3339(),
            });
        }

        Ok(())
    }

    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Tags as a slice; empty when unset.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

impl CreateContactDto {
    /// Create a payload with the required fields only.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: EmailAddress,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email,
            phone: None,
            company: None,
            notes: None,
            tags: None,
        }
    }

    /// Reject blank required names.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` naming the first blank field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)
    }
}

impl UpdateContactDto {
    /// Returns true if the patch supplies no fields at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Reject supplied names that are blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` naming the first blank field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(first_name) = &self.first_name {
            require_text("firstName", first_name)?;
        }
        if let Some(last_name) = &self.last_name {
            require_text("lastName", last_name)?;
        }
        Ok(())
    }
}

impl From<CreateContactDto> for UpdateContactDto {
    fn from(dto: CreateContactDto) -> Self {
        Self {
            first_name: Some(dto.first_name),
            last_name: Some(dto.last_name),
            email: Some(dto.email),
            phone: dto.phone,
            company: dto.company,
            notes: dto.notes,
            tags: dto.tags,
            is_favorite: None,
        }
    }
}

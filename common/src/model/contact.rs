use serde::{Deserialize, Serialize};

/// A single contact produced by the import pipeline.
///
/// Every row of an uploaded file that carries at least a name or an email
/// becomes one `ParsedContact`. The format processors fill the canonical
/// fields; the duplicate detector is the only component allowed to touch
/// `duplicate` and `duplicate_of` afterwards.
///
/// The frontend shows this list to the user, who may drop rows by hand before
/// the remainder is turned into [`NewContact`]s and sent to persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedContact {
    /// Full display name. May be empty when the row only carried an email.
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    /// Ordered, de-duplicated labels. Use [`ParsedContact::add_tag`] to keep
    /// the set semantics.
    pub tags: Vec<String>,
    /// Free text from a notes-like column. Not part of the matching keys.
    pub notes: Option<String>,
    /// Exporter identifier, e.g. `"CSV Import"` or `"Eventbrite"`.
    pub source: String,
    /// Set when an earlier contact in the same batch shares a matching key.
    #[serde(default)]
    pub duplicate: bool,
    /// Human readable pointer to the first contact that produced the same key.
    #[serde(default)]
    pub duplicate_of: Option<String>,
}

impl ParsedContact {
    /// Creates an empty draft attributed to `source`.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// Appends `tag` unless an identical tag is already present.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !tag.is_empty() && !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// A draft is only worth keeping if it can be identified by name or email.
    pub fn has_identity(&self) -> bool {
        !self.name.trim().is_empty() || self.email.as_deref().is_some_and(|e| !e.trim().is_empty())
    }
}

/// The payload handed to contact persistence once duplicates are filtered out.
///
/// Mirrors [`ParsedContact`] without the import annotations (`source`,
/// `duplicate`, `duplicate_of`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub notes: Option<String>,
}

impl From<ParsedContact> for NewContact {
    fn from(contact: ParsedContact) -> Self {
        Self {
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            organization: contact.organization,
            role: contact.role,
            location: contact.location,
            tags: contact.tags,
            notes: contact.notes,
        }
    }
}

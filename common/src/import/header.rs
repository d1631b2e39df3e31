//! Maps free-form column headers onto the canonical contact fields.

use serde::{Deserialize, Serialize};

/// The fields a generic column can be mapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Organization,
    Role,
    Location,
    Tags,
    Notes,
}

/// Recognized header spellings, lower-cased, with their canonical field.
pub static FIELD_SYNONYMS: &[(&str, ContactField)] = &[
    ("name", ContactField::Name),
    ("full name", ContactField::Name),
    ("fullname", ContactField::Name),
    ("contact name", ContactField::Name),
    ("attendee", ContactField::Name),
    ("attendee name", ContactField::Name),
    ("guest name", ContactField::Name),
    ("email", ContactField::Email),
    ("e-mail", ContactField::Email),
    ("email address", ContactField::Email),
    ("contact email", ContactField::Email),
    ("phone", ContactField::Phone),
    ("phone number", ContactField::Phone),
    ("telephone", ContactField::Phone),
    ("mobile", ContactField::Phone),
    ("cell", ContactField::Phone),
    ("organization", ContactField::Organization),
    ("organisation", ContactField::Organization),
    ("company", ContactField::Organization),
    ("employer", ContactField::Organization),
    ("role", ContactField::Role),
    ("job title", ContactField::Role),
    ("position", ContactField::Role),
    ("occupation", ContactField::Role),
    ("location", ContactField::Location),
    ("address", ContactField::Location),
    ("city", ContactField::Location),
    ("region", ContactField::Location),
    ("tags", ContactField::Tags),
    ("categories", ContactField::Tags),
    ("labels", ContactField::Tags),
    ("notes", ContactField::Notes),
    ("comments", ContactField::Notes),
    ("description", ContactField::Notes),
];

/// Looks headers up in a synonym table.
#[derive(Debug, Clone, Copy)]
pub struct HeaderNormalizer<'t> {
    synonyms: &'t [(&'t str, ContactField)],
}

impl Default for HeaderNormalizer<'static> {
    fn default() -> Self {
        Self::new(FIELD_SYNONYMS)
    }
}

impl<'t> HeaderNormalizer<'t> {
    /// `synonyms` keys must already be lower-cased and trimmed.
    pub fn new(synonyms: &'t [(&'t str, ContactField)]) -> Self {
        Self { synonyms }
    }

    /// The canonical field for `header`, ignoring case and surrounding
    /// whitespace. Unknown headers map to `None`.
    pub fn normalize(&self, header: &str) -> Option<ContactField> {
        let key = header.trim().to_lowercase();
        self.synonyms
            .iter()
            .find(|(synonym, _)| *synonym == key)
            .map(|&(_, field)| field)
    }
}

/// [`HeaderNormalizer::normalize`] against [`FIELD_SYNONYMS`].
pub fn normalize_header(header: &str) -> Option<ContactField> {
    HeaderNormalizer::default().normalize(header)
}

//! One row transform per supported exporter.
//!
//! Each processor turns a [`RawRow`] into a [`ParsedContact`]. Rows that end
//! up with neither a name nor an email are dropped here, so the list handed to
//! the duplicate detector is contiguous.

use crate::import::header::{ContactField, HeaderNormalizer};
use crate::import::tokenizer::RawRow;
use crate::model::contact::ParsedContact;
use crate::model::format::ImportFormat;

pub const CSV_IMPORT_SOURCE: &str = "CSV Import";
pub const EVENTBRITE_SOURCE: &str = "Eventbrite";
pub const LUMA_SOURCE: &str = "Luma";
pub const PARTIFUL_SOURCE: &str = "Partiful";

/// Runs the processor for `format` over `rows`, keeping input order.
pub fn process_rows<'a>(
    format: ImportFormat,
    rows: impl IntoIterator<Item = RawRow<'a>>,
    normalizer: &HeaderNormalizer<'_>,
) -> Vec<ParsedContact> {
    let mut dropped = 0usize;
    let contacts: Vec<ParsedContact> = rows
        .into_iter()
        .map(|row| match format {
            ImportFormat::Generic => generic(&row, normalizer),
            ImportFormat::Eventbrite => eventbrite(&row),
            ImportFormat::Luma => luma(&row),
            ImportFormat::Partiful => partiful(&row),
        })
        .filter(|contact| {
            let keep = contact.has_identity();
            if !keep {
                dropped += 1;
            }
            keep
        })
        .collect();

    if dropped > 0 {
        log::debug!("{format}: dropped {dropped} rows without a name or email");
    }
    contacts
}

/// First non-blank cell among `headers`, in preference order.
fn first_of(row: &RawRow<'_>, headers: &[&str]) -> Option<String> {
    headers
        .iter()
        .find_map(|h| row.value(h))
        .map(str::to_string)
}

/// "First Name" and "Last Name" joined by a space, or `None` if the row has
/// neither column.
fn first_last_name(row: &RawRow<'_>) -> Option<String> {
    let first = row.get("First Name");
    let last = row.get("Last Name");
    if first.is_none() && last.is_none() {
        return None;
    }
    let joined = format!(
        "{} {}",
        first.unwrap_or_default().trim(),
        last.unwrap_or_default().trim()
    );
    Some(joined.trim().to_string())
}

fn split_tags(value: &str) -> impl Iterator<Item = &str> {
    value
        .split([',', ';'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Columns are mapped through the synonym table. The first non-blank column
/// for a field wins; unknown columns are ignored.
pub fn generic(row: &RawRow<'_>, normalizer: &HeaderNormalizer<'_>) -> ParsedContact {
    let mut contact = ParsedContact::new(CSV_IMPORT_SOURCE);

    for (header, value) in row.entries() {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        let Some(field) = normalizer.normalize(header) else {
            continue;
        };
        let slot = match field {
            ContactField::Name => {
                if contact.name.is_empty() {
                    contact.name = value.to_string();
                }
                continue;
            }
            ContactField::Tags => {
                for tag in split_tags(value) {
                    contact.add_tag(tag);
                }
                continue;
            }
            ContactField::Email => &mut contact.email,
            ContactField::Phone => &mut contact.phone,
            ContactField::Organization => &mut contact.organization,
            ContactField::Role => &mut contact.role,
            ContactField::Location => &mut contact.location,
            ContactField::Notes => &mut contact.notes,
        };
        if slot.is_none() {
            *slot = Some(value.to_string());
        }
    }

    if contact.name.is_empty() {
        if let Some(name) = first_last_name(row) {
            contact.name = name;
        }
    }
    contact.add_tag(CSV_IMPORT_SOURCE);
    contact
}

pub fn eventbrite(row: &RawRow<'_>) -> ParsedContact {
    let mut contact = ParsedContact::new(EVENTBRITE_SOURCE);
    contact.name = first_last_name(row).unwrap_or_default();
    contact.email = first_of(row, &["Email", "Email Address"]);
    contact.phone = first_of(row, &["Phone", "Cell Phone"]);
    contact.organization = first_of(row, &["Company", "Organization"]);
    contact.role = first_of(row, &["Job Title", "Position"]);
    contact.location = first_of(row, &["Shipping Address", "Billing Address", "Address"]);
    contact.add_tag(EVENTBRITE_SOURCE);
    contact
}

pub fn luma(row: &RawRow<'_>) -> ParsedContact {
    let mut contact = ParsedContact::new(LUMA_SOURCE);
    contact.name = first_of(row, &["Name", "Guest Name", "Attendee Name"])
        .or_else(|| first_last_name(row))
        .unwrap_or_default();
    contact.email = first_of(row, &["Email", "Email Address", "Guest Email"]);
    contact.phone = first_of(row, &["Phone", "Phone Number", "Mobile"]);
    contact.organization = first_of(row, &["Company", "Organization"]);
    contact.role = first_of(row, &["Job Title", "Title", "Position"]);
    contact.location = first_of(row, &["Location", "City", "Address"]);
    contact.add_tag(LUMA_SOURCE);
    contact
}

/// Partiful exports carry no company, job or address columns.
pub fn partiful(row: &RawRow<'_>) -> ParsedContact {
    let mut contact = ParsedContact::new(PARTIFUL_SOURCE);
    contact.name = first_of(row, &["Name", "Guest"])
        .or_else(|| first_last_name(row))
        .unwrap_or_default();
    contact.email = first_of(row, &["Email", "Guest Email"]);
    contact.phone = first_of(row, &["Phone"]);
    contact.add_tag(PARTIFUL_SOURCE);
    contact
}

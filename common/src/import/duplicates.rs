//! In-batch duplicate detection.
//!
//! The first contact to produce a key owns it; every later contact with the
//! same key is flagged. Keys are tried in order email, phone, full name, and
//! the first hit decides what `duplicate_of` cites.

use crate::model::contact::ParsedContact;
use std::collections::HashMap;

fn email_key(contact: &ParsedContact) -> Option<String> {
    contact
        .email
        .as_deref()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
}

fn phone_key(contact: &ParsedContact) -> Option<String> {
    contact
        .phone
        .as_deref()
        .map(|p| p.chars().filter(char::is_ascii_digit).collect::<String>())
        .filter(|p| !p.is_empty())
}

/// Only names of two or more words take part in matching; single names like
/// "Sam" are too common.
fn name_key(contact: &ParsedContact) -> Option<String> {
    let name = contact.name.trim();
    (name.split_whitespace().count() > 1).then(|| name.to_lowercase())
}

#[derive(Default)]
struct FirstSeen {
    email: HashMap<String, usize>,
    phone: HashMap<String, usize>,
    name: HashMap<String, usize>,
}

impl FirstSeen {
    fn build(contacts: &[ParsedContact]) -> Self {
        let mut index = Self::default();
        for (i, contact) in contacts.iter().enumerate() {
            if let Some(key) = email_key(contact) {
                index.email.entry(key).or_insert(i);
            }
            if let Some(key) = phone_key(contact) {
                index.phone.entry(key).or_insert(i);
            }
            if let Some(key) = name_key(contact) {
                index.name.entry(key).or_insert(i);
            }
        }
        index
    }
}

fn earlier(map: &HashMap<String, usize>, key: Option<String>, i: usize) -> Option<usize> {
    key.and_then(|k| map.get(&k).copied()).filter(|&first| first < i)
}

fn display_name(contact: &ParsedContact) -> &str {
    if contact.name.is_empty() {
        "Unknown"
    } else {
        &contact.name
    }
}

/// Flags every contact that repeats a key of an earlier contact and returns
/// how many were flagged. Contacts are neither added nor removed.
pub fn mark_duplicates(contacts: &mut [ParsedContact]) -> usize {
    let first_seen = FirstSeen::build(contacts);
    let mut flagged = 0;

    for i in 0..contacts.len() {
        let contact = &contacts[i];
        let descriptor = if let Some(first) = earlier(&first_seen.email, email_key(contact), i) {
            let first = &contacts[first];
            format!(
                "{} ({})",
                display_name(first),
                first.email.as_deref().unwrap_or_default()
            )
        } else if let Some(first) = earlier(&first_seen.phone, phone_key(contact), i) {
            let first = &contacts[first];
            format!(
                "{} ({})",
                display_name(first),
                first.phone.as_deref().unwrap_or_default()
            )
        } else if let Some(first) = earlier(&first_seen.name, name_key(contact), i) {
            contacts[first].name.clone()
        } else {
            continue;
        };

        log::trace!("contact {i} duplicates {descriptor}");
        let contact = &mut contacts[i];
        contact.duplicate = true;
        contact.duplicate_of = Some(descriptor);
        flagged += 1;
    }

    flagged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: Option<&str>, phone: Option<&str>) -> ParsedContact {
        ParsedContact {
            name: name.to_string(),
            email: email.map(str::to_string),
            phone: phone.map(str::to_string),
            ..ParsedContact::new("CSV Import")
        }
    }

    #[test]
    fn email_match_cites_name_and_email() {
        let mut contacts = vec![
            contact("Jane Doe", Some("Jane@X.com"), Some("555-0100")),
            contact("Janet Dole", Some(" jane@x.com "), Some("555-9999")),
        ];
        assert_eq!(mark_duplicates(&mut contacts), 1);
        assert!(!contacts[0].duplicate);
        assert!(contacts[1].duplicate);
        assert_eq!(contacts[1].duplicate_of.as_deref(), Some("Jane Doe (Jane@X.com)"));
    }

    #[test]
    fn phone_match_ignores_punctuation() {
        let mut contacts = vec![
            contact("", Some("a@x.com"), Some("(555) 010-0000")),
            contact("Al Bo", Some("b@x.com"), Some("555.010.0000")),
        ];
        mark_duplicates(&mut contacts);
        assert_eq!(
            contacts[1].duplicate_of.as_deref(),
            Some("Unknown ((555) 010-0000)")
        );
    }

    #[test]
    fn phone_without_digits_is_not_a_key() {
        let mut contacts = vec![
            contact("A", None, Some("n/a")),
            contact("B", None, Some("n/a")),
        ];
        assert_eq!(mark_duplicates(&mut contacts), 0);
    }

    #[test]
    fn multi_word_name_is_the_last_resort() {
        let mut contacts = vec![
            contact("Jane  Doe", Some("a@x.com"), None),
            contact("jane  doe", Some("b@x.com"), None),
        ];
        mark_duplicates(&mut contacts);
        assert_eq!(contacts[1].duplicate_of.as_deref(), Some("Jane  Doe"));
    }

    #[test]
    fn single_word_names_never_match() {
        let mut contacts = vec![contact("Sam", None, None), contact("Sam", None, None)];
        assert_eq!(mark_duplicates(&mut contacts), 0);
        assert!(contacts.iter().all(|c| !c.duplicate && c.duplicate_of.is_none()));
    }

    #[test]
    fn email_takes_priority_over_an_earlier_phone_match() {
        let mut contacts = vec![
            contact("Ann Lee", None, Some("555")),
            contact("Bo Ray", Some("bo@x.com"), None),
            contact("Cy Moe", Some("bo@x.com"), Some("555")),
        ];
        mark_duplicates(&mut contacts);
        assert_eq!(contacts[2].duplicate_of.as_deref(), Some("Bo Ray (bo@x.com)"));
    }

    #[test]
    fn references_always_point_to_the_first_occurrence() {
        let mut contacts = vec![
            contact("A One", Some("x@x.com"), None),
            contact("B Two", Some("x@x.com"), None),
            contact("C Three", Some("x@x.com"), None),
        ];
        assert_eq!(mark_duplicates(&mut contacts), 2);
        assert_eq!(contacts[2].duplicate_of.as_deref(), Some("A One (x@x.com)"));
    }
}

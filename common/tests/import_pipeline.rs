//! End-to-end tests for the contact import pipeline.

use common::import::{ImportError, ImportPipeline};
use common::model::format::{FormatOverride, ImportFormat};

fn pipeline() -> ImportPipeline<'static> {
    ImportPipeline::default()
}

#[test]
fn generic_file_flags_repeated_email() {
    let text = "Name,Email,Phone\nJane Doe,jane@x.com,555-0100\nJane D.,jane@x.com,555-9999\n";
    let contacts = pipeline().run(text, FormatOverride::Generic).unwrap();

    assert_eq!(contacts.len(), 2);
    assert!(!contacts[0].duplicate);
    assert!(contacts[1].duplicate);
    assert_eq!(
        contacts[1].duplicate_of.as_deref(),
        Some("Jane Doe (jane@x.com)")
    );
}

#[test]
fn eventbrite_export_is_detected() {
    let text = "Order #,Attendee Status,Event Name,Ticket Type,First Name,Last Name,Email\n\
                1001,Attending,Launch,GA,Jane,Doe,jane@x.com\n\
                1002,Attending,Launch,VIP,John,Roe,john@x.com\n";
    let report = pipeline().report(text, FormatOverride::Auto).unwrap();

    assert_eq!(report.format, ImportFormat::Eventbrite);
    assert_eq!(report.total, 2);
    for contact in &report.contacts {
        assert_eq!(contact.source, "Eventbrite");
        assert_eq!(contact.tags, vec!["Eventbrite"]);
    }
    assert_eq!(report.contacts[0].name, "Jane Doe");
}

#[test]
fn header_without_rows_is_rejected() {
    let err = pipeline()
        .run("Name,Email,Phone\n\n", FormatOverride::Auto)
        .unwrap_err();
    assert_eq!(err, ImportError::EmptyInput);
}

#[test]
fn repeated_runs_are_identical() {
    let text = "Full Name,E-mail,Tags\nAda Lovelace,ada@x.com,math;history\nAda Lovelace,,math\nSam,,\n";
    let first = serde_json::to_string(&pipeline().run(text, FormatOverride::Auto).unwrap()).unwrap();
    let second = serde_json::to_string(&pipeline().run(text, FormatOverride::Auto).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn luma_is_preferred_when_partiful_markers_also_match() {
    let text = "Guest ID,Name,Email,RSVP Status,Plus Ones\ng-1,Ana Ruiz,ana@x.com,going,0\n";
    let report = pipeline().report(text, FormatOverride::Auto).unwrap();
    assert_eq!(report.format, ImportFormat::Luma);
    assert_eq!(report.contacts[0].source, "Luma");
}

#[test]
fn email_match_wins_over_name() {
    let text = "Name,Email,Phone\nJane Doe,jane@x.com,111\nJoan Dee,jane@x.com,222\n";
    let contacts = pipeline().run(text, FormatOverride::Auto).unwrap();
    assert_eq!(
        contacts[1].duplicate_of.as_deref(),
        Some("Jane Doe (jane@x.com)")
    );
}

#[test]
fn single_word_names_are_not_matched() {
    let text = "Name\nSam\nSam\n";
    let contacts = pipeline().run(text, FormatOverride::Generic).unwrap();
    assert_eq!(contacts.len(), 2);
    assert!(contacts.iter().all(|c| !c.duplicate));
}

#[test]
fn location_only_row_is_dropped() {
    let text = "Name,Email,Phone,Company,Role,Location\n,,,,,Lisbon\nBo Ray,bo@x.com,,,,\n";
    let contacts = pipeline().run(text, FormatOverride::Auto).unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name, "Bo Ray");
}

#[test]
fn override_changes_extracted_fields() {
    let text = "Order #,Name,Email\n1,Jane Doe,jane@x.com\n";

    let detected = pipeline().run(text, FormatOverride::Auto).unwrap();
    assert_eq!(detected[0].name, "");
    assert_eq!(detected[0].source, "Eventbrite");

    let generic = pipeline().run(text, FormatOverride::Generic).unwrap();
    assert_eq!(generic[0].name, "Jane Doe");
    assert_eq!(generic[0].tags, vec!["CSV Import"]);
}

#[test]
fn partiful_guest_list() {
    let text = "Guest Name,Guest Email,RSVP Status,Phone\n\
                ,dee@x.com,Going,(555) 123-4567\n\
                ,lee@x.com,Maybe,555 123 4567\n";
    let report = pipeline().report(text, FormatOverride::Partiful).unwrap();

    assert_eq!(report.format, ImportFormat::Partiful);
    assert_eq!(report.duplicates, 1);
    assert_eq!(
        report.contacts[1].duplicate_of.as_deref(),
        Some("Unknown ((555) 123-4567)")
    );
}

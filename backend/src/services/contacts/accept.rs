//! Hands the reviewed import list over to contact storage.
//!
//! The frontend posts back the (possibly hand-edited) list of
//! `ParsedContact`s. Duplicates are dropped and the import annotations are
//! stripped, leaving the `NewContact` payloads that get persisted.

use actix_web::{web, HttpResponse, Responder};
use common::import::accept;
use common::model::contact::{NewContact, ParsedContact};

const CSV_HEADERS: [&str; 8] = [
    "name",
    "email",
    "phone",
    "organization",
    "role",
    "location",
    "tags",
    "notes",
];

/// `POST /api/contacts/import/accept`
pub(crate) async fn process(payload: web::Json<Vec<ParsedContact>>) -> impl Responder {
    HttpResponse::Ok().json(accept(payload.into_inner()))
}

/// `POST /api/contacts/import/accept.csv`: same as `process`, rendered as CSV.
pub(crate) async fn process_csv(payload: web::Json<Vec<ParsedContact>>) -> impl Responder {
    match write_csv(&accept(payload.into_inner())) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error writing CSV: {}", e)),
    }
}

/// Tags are joined with `;` so they survive a round trip through the importer.
fn write_csv(contacts: &[NewContact]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;

    for contact in contacts {
        let tags = contact.tags.join(";");
        writer.write_record([
            contact.name.as_str(),
            contact.email.as_deref().unwrap_or_default(),
            contact.phone.as_deref().unwrap_or_default(),
            contact.organization.as_deref().unwrap_or_default(),
            contact.role.as_deref().unwrap_or_default(),
            contact.location.as_deref().unwrap_or_default(),
            tags.as_str(),
            contact.notes.as_deref().unwrap_or_default(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

//! HTTP surface of the bulk contact import.
//!
//! The provided routes are:
//! - `POST /api/contacts/import/parse`: synchronous. Takes `{ "text", "format" }`
//!   as JSON and returns the `ImportReport` (annotated contacts, detected
//!   format, duplicate count).
//!
//! - `POST /api/contacts/import/upload`: multipart/form-data with an optional
//!   `json` part (`{ "format": ... }`) followed by a `file` part. The file is
//!   hashed, decoded and handed to a background import job; the response holds
//!   the `job_id` and the file's MD5.
//!
//! - `GET /api/contacts/import/status/{job_id}`: current `JobStatus` of an
//!   upload job. `Completed` carries the `ImportReport`; a finished status is
//!   returned once and the job is then forgotten.
//!
//! - `POST /api/contacts/import/accept` and `/accept.csv`: take the reviewed
//!   contact list and return the non-duplicates stripped of import
//!   annotations, as JSON or CSV.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod accept;
mod get_status;
mod import_job;
mod parse;
mod upload;

const API_PATH: &str = "/api/contacts/import";

/// Configures and returns the Actix scope for contact import routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/parse", post().to(parse::process))
        .route("/upload", post().to(upload::process))
        .route("/status/{job_id}", get().to(get_status::process))
        .route("/accept", post().to(accept::process))
        .route("/accept.csv", post().to(accept::process_csv))
}

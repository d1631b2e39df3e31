use actix_web::{web, HttpResponse, Responder};
use common::import::ImportPipeline;
use common::requests::ParseContactsRequest;

/// `POST /api/contacts/import/parse`
///
/// Runs the import pipeline over the text in the request body and answers with
/// the `ImportReport`. The frontend calls this again whenever the user changes
/// the format selector; each call is independent.
///
/// # Returns
/// - `200 OK` with the report as JSON.
/// - `400 Bad Request` with a user-facing message when the text has no data.
pub(crate) async fn process(payload: web::Json<ParseContactsRequest>) -> impl Responder {
    let req = payload.into_inner();
    match web::block(move || ImportPipeline::default().report(&req.text, req.format)).await {
        Ok(Ok(report)) => HttpResponse::Ok().json(report),
        Ok(Err(e)) => HttpResponse::BadRequest().body(e.to_string()),
        Err(e) => HttpResponse::InternalServerError().body(format!("Blocking error: {}", e)),
    }
}

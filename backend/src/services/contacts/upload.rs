use crate::config::Config;
use crate::job_controller::state::JobsState;
use crate::services::contacts::import_job::schedule_import_job;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::requests::UploadOptions;
use futures_util::StreamExt;
use log::{info, warn};
use md5::Context;
use serde_json::from_slice;

/// A fully received upload, decoded to text.
pub struct Upload {
    pub options: UploadOptions,
    pub filename: String,
    pub text: String,
    /// Hex MD5 of the raw file bytes.
    pub md5: String,
}

fn is_accepted_filename(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    lower.ends_with(".csv") || lower.ends_with(".txt")
}

/// HTTP handler for `POST /api/contacts/import/upload`.
///
/// - On success: `200 OK` with `{ "job_id", "md5" }`; poll `/status/{job_id}`
///   for the report.
/// - On failure: `400 Bad Request` with the error message.
pub async fn process(
    payload: Multipart,
    state: web::Data<JobsState>,
    config: web::Data<Config>,
) -> impl Responder {
    match read_upload(payload, config.max_upload_bytes).await {
        Ok(upload) => {
            let job_id = schedule_import_job(&state, upload.text, upload.options.format).await;
            info!(
                "Scheduled import job {} for {} (md5 {})",
                job_id, upload.filename, upload.md5
            );
            HttpResponse::Ok().json(serde_json::json!({ "job_id": job_id, "md5": upload.md5 }))
        }
        Err(e) => HttpResponse::BadRequest().body(format!("Error: {}", e)),
    }
}

/// Reads a multipart upload: an optional `json` part with [`UploadOptions`],
/// followed by the `file` part. The file is kept in memory and must not exceed
/// `max_bytes`.
pub async fn read_upload(
    mut payload: Multipart,
    max_bytes: usize,
) -> Result<Upload, Box<dyn std::error::Error>> {
    let mut options = UploadOptions::default();
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut md5_hasher = Context::new();

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let part_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match part_name.as_deref() {
            Some("json") => {
                if file.is_some() {
                    return Err("Upload options must be sent before the file".into());
                }
                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    bytes.extend_from_slice(&chunk?);
                }
                options = from_slice(&bytes)?;
            }

            Some("file") => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
                    .unwrap_or_default();

                if !is_accepted_filename(&filename) {
                    return Err("The file must end with .csv or .txt".into());
                }

                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk?;
                    if bytes.len() + chunk.len() > max_bytes {
                        return Err(format!("The file is larger than {} bytes", max_bytes).into());
                    }
                    md5_hasher.consume(&chunk);
                    bytes.extend_from_slice(&chunk);
                }
                file = Some((filename, bytes));
            }

            _ => {}
        }
    }

    let (filename, bytes) = file.ok_or("Missing file")?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("{} is not valid UTF-8, decoding lossily", filename);
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    Ok(Upload {
        options,
        filename,
        text,
        md5: format!("{:x}", md5_hasher.finalize()),
    })
}

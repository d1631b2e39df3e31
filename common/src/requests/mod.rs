use crate::model::format::FormatOverride;
use serde::Deserialize;

#[derive(Deserialize)]
/// Request payload for the synchronous parse endpoint.
/// Carries the full text of the file and the format chosen by the user.
pub struct ParseContactsRequest {
    pub text: String,
    #[serde(default)]
    pub format: FormatOverride,
}

#[derive(Deserialize, Default)]
/// Metadata sent in the `json` part of a multipart upload, before the file.
pub struct UploadOptions {
    #[serde(default)]
    pub format: FormatOverride,
}

use crate::model::contact::ParsedContact;
use crate::model::format::ImportFormat;
use serde::{Deserialize, Serialize};

/// The outcome of running the import pipeline over one uploaded file.
///
/// Sent to the frontend either directly (synchronous parse) or as the payload
/// of `JobStatus::Completed` once a background import job finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// The format the rows were processed with, detected or forced.
    pub format: ImportFormat,
    /// Number of contacts in `contacts`.
    pub total: usize,
    /// Number of contacts flagged as duplicates of an earlier row.
    pub duplicates: usize,
    pub contacts: Vec<ParsedContact>,
}

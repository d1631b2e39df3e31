use crate::model::import::ImportReport;
use serde::{Deserialize, Serialize};

/// Lifecycle of a background import job, as reported by the status endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum JobStatus {
    Pending,
    /// Number of data rows found in the upload, being processed.
    InProgress(u32),
    Completed(ImportReport),
    Failed(String),
}

impl JobStatus {
    /// `Completed` and `Failed` never change again.
    pub fn is_finished(&self) -> bool {
        matches!(self, JobStatus::Completed(_) | JobStatus::Failed(_))
    }
}

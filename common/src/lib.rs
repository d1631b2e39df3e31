//! Types and logic shared between the contacts backend and its clients.
//!
//! - `model`: serde models exchanged over the HTTP API.
//! - `import`: the synchronous bulk contact import pipeline.
//! - `jobs`: status of background import jobs.
//! - `requests`: request payloads accepted by the backend.

pub mod import;
pub mod jobs;
pub mod model;
pub mod requests;

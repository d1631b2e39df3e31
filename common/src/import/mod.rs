//! Bulk contact import pipeline.
//!
//! Turns the text of an uploaded file into an annotated contact list:
//!
//! 1. `tokenizer` splits the text into a header line and rows.
//! 2. `detect` picks the exporter from the headers, unless the caller forced one.
//! 3. `processors` converts each row into a `ParsedContact`, using the
//!    `header` synonym table for generic files.
//! 4. `duplicates` flags contacts repeating an earlier email, phone or name.
//!
//! The pipeline is a pure, synchronous function of `(text, format)`. It keeps
//! no state between runs and never touches storage.

pub mod detect;
pub mod duplicates;
pub mod header;
pub mod processors;
pub mod tokenizer;

use crate::model::contact::{NewContact, ParsedContact};
use crate::model::format::{FormatOverride, ImportFormat};
use crate::model::import::ImportReport;
use detect::FormatDetector;
use header::HeaderNormalizer;
use thiserror::Error;
use tokenizer::Table;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// No header line, or a header line without any data below it.
    #[error("The file appears to be empty or could not be parsed")]
    EmptyInput,

    /// A format name outside `auto`, `generic`, `eventbrite`, `luma`, `partiful`.
    #[error("Unknown import format: {0}")]
    UnknownFormat(String),
}

/// The import pipeline, bound to its header and marker tables.
#[derive(Debug, Clone, Copy)]
pub struct ImportPipeline<'t> {
    detector: FormatDetector<'t>,
    normalizer: HeaderNormalizer<'t>,
}

impl Default for ImportPipeline<'static> {
    fn default() -> Self {
        Self::new(FormatDetector::default(), HeaderNormalizer::default())
    }
}

impl<'t> ImportPipeline<'t> {
    pub fn new(detector: FormatDetector<'t>, normalizer: HeaderNormalizer<'t>) -> Self {
        Self {
            detector,
            normalizer,
        }
    }

    /// The forced format, or the detected one when `format` is `Auto`.
    pub fn resolve_format<S: AsRef<str>>(
        &self,
        headers: &[S],
        format: FormatOverride,
    ) -> ImportFormat {
        format
            .forced()
            .unwrap_or_else(|| self.detector.detect(headers))
    }

    /// Parses `text` and returns the annotated contacts in file order.
    pub fn run(
        &self,
        text: &str,
        format: FormatOverride,
    ) -> Result<Vec<ParsedContact>, ImportError> {
        self.report(text, format).map(|report| report.contacts)
    }

    /// Like [`ImportPipeline::run`], also reporting the format used and the
    /// number of duplicates.
    pub fn report(&self, text: &str, format: FormatOverride) -> Result<ImportReport, ImportError> {
        let table = tokenizer::tokenize(text)?;
        Ok(self.report_table(&table, format))
    }

    /// Runs the remaining stages over an already tokenized file.
    pub fn report_table(&self, table: &Table, format: FormatOverride) -> ImportReport {
        let resolved = self.resolve_format(table.headers(), format);

        let mut contacts = processors::process_rows(resolved, table.rows(), &self.normalizer);
        let duplicates = duplicates::mark_duplicates(&mut contacts);

        log::info!(
            "Imported {} of {} rows as {} ({} duplicates)",
            contacts.len(),
            table.len(),
            resolved,
            duplicates
        );

        ImportReport {
            format: resolved,
            total: contacts.len(),
            duplicates,
            contacts,
        }
    }
}

/// Drops the contacts flagged as duplicates and strips the import annotations,
/// yielding what should be forwarded to contact storage.
pub fn accept(contacts: impl IntoIterator<Item = ParsedContact>) -> Vec<NewContact> {
    contacts
        .into_iter()
        .filter(|c| !c.duplicate)
        .map(NewContact::from)
        .collect()
}

use crate::import::ImportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The exporters whose file layouts the importer understands.
///
/// `Generic` covers every file that does not look like one of the known
/// event platforms; its columns go through the header synonym table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportFormat {
    Generic,
    Eventbrite,
    Luma,
    Partiful,
}

impl ImportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportFormat::Generic => "generic",
            ImportFormat::Eventbrite => "eventbrite",
            ImportFormat::Luma => "luma",
            ImportFormat::Partiful => "partiful",
        }
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user picked in the "format" selector of the import dialog.
///
/// `Auto` lets the detector look at the headers; anything else forces the
/// matching processor regardless of what the headers say.
///
/// Deserialized through [`FromStr`], so JSON payloads accept any case and the
/// `"csv"` alias, and unknown names fail with [`ImportError::UnknownFormat`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum FormatOverride {
    #[default]
    Auto,
    Generic,
    Eventbrite,
    Luma,
    Partiful,
}

impl FormatOverride {
    /// The forced format, or `None` when detection should decide.
    pub fn forced(&self) -> Option<ImportFormat> {
        match self {
            FormatOverride::Auto => None,
            FormatOverride::Generic => Some(ImportFormat::Generic),
            FormatOverride::Eventbrite => Some(ImportFormat::Eventbrite),
            FormatOverride::Luma => Some(ImportFormat::Luma),
            FormatOverride::Partiful => Some(ImportFormat::Partiful),
        }
    }
}

impl From<ImportFormat> for FormatOverride {
    fn from(format: ImportFormat) -> Self {
        match format {
            ImportFormat::Generic => FormatOverride::Generic,
            ImportFormat::Eventbrite => FormatOverride::Eventbrite,
            ImportFormat::Luma => FormatOverride::Luma,
            ImportFormat::Partiful => FormatOverride::Partiful,
        }
    }
}

impl FromStr for FormatOverride {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "auto" => Ok(FormatOverride::Auto),
            "generic" | "csv" => Ok(FormatOverride::Generic),
            "eventbrite" => Ok(FormatOverride::Eventbrite),
            "luma" => Ok(FormatOverride::Luma),
            "partiful" => Ok(FormatOverride::Partiful),
            other => Err(ImportError::UnknownFormat(other.to_string())),
        }
    }
}

impl TryFrom<String> for FormatOverride {
    type Error = ImportError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

//! Recognizes which event platform exported a file by its header line.

use crate::model::format::ImportFormat;

/// Headers that only a given exporter is known to produce.
#[derive(Debug, Clone, Copy)]
pub struct FormatMarkers<'m> {
    pub format: ImportFormat,
    pub headers: &'m [&'m str],
}

/// Marker sets in detection order. Sets overlap ("Event Name", "RSVP Status"),
/// so the first format with any marker present wins.
pub static FORMAT_MARKERS: &[FormatMarkers<'static>] = &[
    FormatMarkers {
        format: ImportFormat::Eventbrite,
        headers: &["Order #", "Attendee Status", "Event Name", "Ticket Type"],
    },
    FormatMarkers {
        format: ImportFormat::Luma,
        headers: &["Guest ID", "Guest Status", "Event Name", "Ticket Type", "RSVP Status"],
    },
    FormatMarkers {
        format: ImportFormat::Partiful,
        headers: &["Guest Name", "RSVP Status", "Party", "Plus Ones"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct FormatDetector<'m> {
    markers: &'m [FormatMarkers<'m>],
}

impl Default for FormatDetector<'static> {
    fn default() -> Self {
        Self::new(FORMAT_MARKERS)
    }
}

impl<'m> FormatDetector<'m> {
    pub fn new(markers: &'m [FormatMarkers<'m>]) -> Self {
        Self { markers }
    }

    /// Classifies a header list. Case, surrounding whitespace and column order
    /// are ignored; files matching no marker set are `Generic`.
    pub fn detect<S: AsRef<str>>(&self, headers: &[S]) -> ImportFormat {
        let present: Vec<String> = headers
            .iter()
            .map(|h| h.as_ref().trim().to_lowercase())
            .collect();

        self.markers
            .iter()
            .find(|m| {
                m.headers
                    .iter()
                    .any(|marker| present.iter().any(|h| *h == marker.to_lowercase()))
            })
            .map(|m| m.format)
            .unwrap_or(ImportFormat::Generic)
    }
}

/// [`FormatDetector::detect`] against [`FORMAT_MARKERS`].
pub fn detect_format<S: AsRef<str>>(headers: &[S]) -> ImportFormat {
    FormatDetector::default().detect(headers)
}

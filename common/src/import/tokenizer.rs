//! Splits the raw text of an uploaded file into a header list and rows.
//!
//! This is deliberately a line/comma splitter and not a full CSV reader:
//! quoted fields containing commas or newlines are not supported.

use crate::import::ImportError;

/// The tokenized contents of one file: a header line plus its data lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

impl Table {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data lines (blank lines excluded).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows in file order, each keyed by this table's headers.
    pub fn rows(&self) -> impl Iterator<Item = RawRow<'_>> {
        self.records.iter().map(|cells| RawRow {
            headers: &self.headers,
            cells,
        })
    }
}

/// One data line, viewed as a header -> cell mapping.
///
/// Cells are matched to headers by position. When a line has fewer cells than
/// there are headers, the trailing headers are absent from the row.
#[derive(Debug, Clone, Copy)]
pub struct RawRow<'a> {
    headers: &'a [String],
    cells: &'a [String],
}

impl<'a> RawRow<'a> {
    /// The cell under `header`, compared case-insensitively.
    ///
    /// If a header is repeated, the first column carrying it wins.
    pub fn get(&self, header: &str) -> Option<&'a str> {
        self.entries()
            .find(|(h, _)| h.eq_ignore_ascii_case(header))
            .map(|(_, value)| value)
    }

    /// Like [`RawRow::get`] but trims the value and treats blank cells as missing.
    pub fn value(&self, header: &str) -> Option<&'a str> {
        self.get(header).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Whether the row has a cell for `header` at all, blank or not.
    pub fn contains(&self, header: &str) -> bool {
        self.get(header).is_some()
    }

    /// `(header, cell)` pairs in column order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &'a str)> + use<'a> {
        let (headers, cells) = (self.headers, self.cells);
        headers
            .iter()
            .zip(cells.iter())
            .map(|(h, c)| (h.as_str(), c.as_str()))
    }
}

/// Trims a token and removes one pair of surrounding double quotes.
fn clean_token(token: &str) -> String {
    let token = token.trim();
    token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(token)
        .to_string()
}

fn split_line(line: &str) -> Vec<String> {
    line.split(',').map(clean_token).collect()
}

/// Tokenizes `text` into a [`Table`].
///
/// The first non-blank line is the header line; every later non-blank line is
/// a data row. Fails with [`ImportError::EmptyInput`] when either is missing.
pub fn tokenize(text: &str) -> Result<Table, ImportError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split('\n').map(str::trim).filter(|l| !l.is_empty());

    let headers = lines.next().map(split_line).ok_or(ImportError::EmptyInput)?;
    let records: Vec<Vec<String>> = lines.map(split_line).collect();

    if records.is_empty() {
        return Err(ImportError::EmptyInput);
    }

    log::trace!(
        "tokenized {} headers and {} data lines",
        headers.len(),
        records.len()
    );
    Ok(Table { headers, records })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_header_and_rows() {
        let table = tokenize("Name,Email\nJane Doe,jane@x.com\nJohn Roe,john@x.com\n").unwrap();
        assert_eq!(table.headers(), ["Name", "Email"]);
        assert_eq!(table.len(), 2);

        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows[1].get("Email"), Some("john@x.com"));
    }

    #[test]
    fn strips_whitespace_quotes_and_carriage_returns() {
        let table = tokenize("\"Name\" , \"Email\"\r\n  \"Jane Doe\" ,jane@x.com\r\n").unwrap();
        assert_eq!(table.headers(), ["Name", "Email"]);
        let row = table.rows().next().unwrap();
        assert_eq!(row.get("name"), Some("Jane Doe"));
        assert_eq!(row.get("EMAIL"), Some("jane@x.com"));
    }

    #[test]
    fn a_lone_quote_is_kept() {
        let table = tokenize("Name\n\"Jane\n").unwrap();
        assert_eq!(table.rows().next().unwrap().get("Name"), Some("\"Jane"));
    }

    #[test]
    fn skips_blank_lines_everywhere() {
        let table = tokenize("\n\n  \nName,Email\n\n   \nJane,j@x.com\n\n").unwrap();
        assert_eq!(table.headers(), ["Name", "Email"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn short_rows_leave_trailing_headers_absent() {
        let table = tokenize("Name,Email,Phone\nJane,\n").unwrap();
        let row = table.rows().next().unwrap();
        assert_eq!(row.get("Email"), Some(""));
        assert!(!row.contains("Phone"));
        assert_eq!(row.value("Email"), None);
    }

    #[test]
    fn byte_order_mark_does_not_leak_into_first_header() {
        let table = tokenize("\u{feff}Name,Email\nJane,j@x.com").unwrap();
        assert_eq!(table.headers()[0], "Name");
    }

    #[test]
    fn header_only_is_empty_input() {
        assert!(matches!(tokenize("Name,Email\n"), Err(ImportError::EmptyInput)));
    }

    #[test]
    fn blank_text_is_empty_input() {
        assert!(matches!(tokenize(""), Err(ImportError::EmptyInput)));
        assert!(matches!(tokenize(" \r\n \n"), Err(ImportError::EmptyInput)));
    }
}

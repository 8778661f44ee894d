use alloc::string::String;
use alloc::vec::Vec;

use crate::config::HeaderSplit;
use crate::error::{Result, TallyError};

/// Fields of one input line, in order.
pub type Row = Vec<String>;

/// Split one line into cleaned fields.
///
/// Commas inside a pair of double quotes belong to the field. Each field is
/// passed through [`clean_field`]. An empty line yields a single empty field.
#[must_use]
pub fn split_row(line: &str) -> Row {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    // ',' and '"' are ASCII, so byte offsets are always char boundaries here.
    for (idx, byte) in line.bytes().enumerate() {
        match byte {
            b'"' => in_quotes = !in_quotes,
            b',' if !in_quotes => {
                fields.push(String::from(clean_field(&line[start..idx])));
                start = idx + 1;
            }
            _ => {}
        }
    }
    fields.push(String::from(clean_field(&line[start..])));

    fields
}

/// Split on every comma, ignoring quotes.
///
/// Only used for the legacy flat-mode header check.
#[must_use]
pub fn split_plain(line: &str) -> Row {
    line.split(',')
        .map(|field| String::from(clean_field(field)))
        .collect()
}

/// Trim whitespace, drop at most one leading and one trailing `"`, then trim
/// whitespace once more. Interior quotes are kept.
#[must_use]
pub fn clean_field(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    trimmed.strip_suffix('"').unwrap_or(trimmed).trim()
}

/// Every parsed row of one input, in file order.
///
/// A dataset is never empty: construction from zero lines fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    first_line: String,
    rows: Vec<Row>,
}

impl Dataset {
    /// Parse already-split lines.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::EmptyInput`] when `lines` yields nothing.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = lines.into_iter();
        let first = lines.next().ok_or(TallyError::EmptyInput)?;
        let first_line = String::from(first.as_ref());

        let mut rows = Vec::new();
        rows.push(split_row(&first_line));
        rows.extend(lines.map(|line| split_row(line.as_ref())));

        Ok(Self { first_line, rows })
    }

    /// Parse a whole text buffer, one record per `\n` or `\r\n` terminated line.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::EmptyInput`] when `text` contains no lines.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_lines(text.lines())
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The unparsed first line.
    #[must_use]
    pub fn first_line(&self) -> &str {
        &self.first_line
    }

    /// Whether row 0 is a header, splitting the first line per `split`.
    #[must_use]
    pub fn has_header(&self, split: HeaderSplit) -> bool {
        match split {
            HeaderSplit::QuoteAware => crate::header::is_header(&self.rows[0]),
            HeaderSplit::Plain => crate::header::is_header(&split_plain(&self.first_line)),
        }
    }

    /// Rows after the header, or every row when there is none.
    #[must_use]
    pub fn data_rows(&self, has_header: bool) -> &[Row] {
        if has_header { &self.rows[1..] } else { &self.rows }
    }
}

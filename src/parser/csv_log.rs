//! CSV ping log parser.
//!
//! Turns raw rows into typed [`Entry`] values. The first row of every log is
//! a header and is skipped without looking at it. Every data row must carry
//! exactly six fields in the order given by [`FIELD_NAMES`].

use super::entry::Entry;
use crate::utils::config::{DEFAULT_DELIMITER, FIELD_COUNT, FIELD_NAMES};
use crate::utils::error::ParseError;
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Options for reading a log from CSV text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    pub delimiter: u8,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl ReaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Parse raw rows into entries
///
/// **Public** - pure entry point, no I/O
///
/// # Arguments
/// * `rows` - Field sequences in file order, header first
///
/// # Returns
/// Entries in input order. Row numbers in errors are 1-based with the
/// header as row 1.
///
/// # Errors
/// * `ParseError::FieldCount` - A data row does not have six fields
/// * `ParseError::InvalidField` - A numeric field does not parse
pub fn parse_rows<I, R, S>(rows: I) -> Result<Vec<Entry>, ParseError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    rows.into_iter()
        .enumerate()
        .skip(1)
        .map(|(index, row)| parse_row(index as u64 + 1, row.as_ref()))
        .collect()
}

/// Parse a single data row
///
/// **Public** - used by both the pure and the CSV entry points
pub fn parse_row<S: AsRef<str>>(row: u64, fields: &[S]) -> Result<Entry, ParseError> {
    if fields.len() != FIELD_COUNT {
        return Err(ParseError::FieldCount {
            row,
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let field = |i: usize| fields[i].as_ref();

    Ok(Entry {
        recipient: field(0).to_string(),
        hops: parse_field(row, 1, field(1))?,
        pings_sent: parse_field(row, 2, field(2))?,
        acks: parse_field(row, 3, field(3))?,
        avg_latency: parse_real(row, 4, field(4))?,
        battery_level: parse_real(row, 5, field(5))?,
    })
}

/// Read entries from CSV text
///
/// **Public** - accepts any reader so callers can inject in-memory data
///
/// The first physical line is the header even when it is blank. A blank line
/// anywhere after it is a data row with no fields.
///
/// # Errors
/// * `ParseError::Csv` - Underlying CSV/I/O failure
/// * `ParseError::FieldCount` - Includes blank data lines (`found: 0`)
/// * Any error from [`parse_row`]
pub fn read_entries<R: Read>(
    mut reader: R,
    options: &ReaderOptions,
) -> Result<Vec<Entry>, ParseError> {
    // The whole log is held in memory so blank lines, which the csv reader
    // drops, can be located from its byte positions.
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(csv::Error::from)?;

    // Header and field count are checked here, not by the csv crate.
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(data.as_slice());

    let mut lines = LineTracker::new(&data);
    let mut header_seen = false;
    let mut record = csv::StringRecord::new();
    let mut entries = Vec::new();

    while csv_reader.read_record(&mut record)? {
        for blank in lines.skip_blank_lines() {
            blank_row(blank, &mut header_seen)?;
        }

        let row = lines.line();
        lines.advance_to(csv_reader.position().byte() as usize);

        if !header_seen {
            header_seen = true;
            debug!("Skipping header row: {:?}", record);
            continue;
        }

        let fields: Vec<&str> = record.iter().collect();
        entries.push(parse_row(row, fields.as_slice())?);
    }

    for blank in lines.skip_blank_lines() {
        blank_row(blank, &mut header_seen)?;
    }

    debug!("Parsed {} entries", entries.len());
    Ok(entries)
}

/// A blank header is skipped like any other header; a blank data row has no fields.
fn blank_row(line: u64, header_seen: &mut bool) -> Result<(), ParseError> {
    if !*header_seen {
        *header_seen = true;
        debug!("Skipping blank header row");
        return Ok(());
    }
    Err(ParseError::FieldCount {
        row: line,
        expected: FIELD_COUNT,
        found: 0,
    })
}

/// Walks the raw input alongside the csv reader, counting `\n` line breaks
struct LineTracker<'a> {
    data: &'a [u8],
    cursor: usize,
    newlines: u64,
}

impl<'a> LineTracker<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            cursor: 0,
            newlines: 0,
        }
    }

    /// 1-based line number at the cursor
    fn line(&self) -> u64 {
        self.newlines + 1
    }

    /// Consume line terminators at the cursor, returning the line numbers of
    /// the empty lines among them. A terminator that ends the previous
    /// record's line is consumed without being reported.
    fn skip_blank_lines(&mut self) -> Vec<u64> {
        let mut blanks = Vec::new();
        while let Some(&byte) = self.data.get(self.cursor) {
            match byte {
                b'\n' => {
                    if self.line_is_empty(self.cursor) {
                        blanks.push(self.line());
                    }
                    self.newlines += 1;
                }
                b'\r' => {}
                _ => break,
            }
            self.cursor += 1;
        }
        blanks
    }

    /// Move the cursor to `end`, counting the line breaks passed
    fn advance_to(&mut self, end: usize) {
        let end = end.min(self.data.len()).max(self.cursor);
        self.newlines += self.data[self.cursor..end]
            .iter()
            .filter(|&&b| b == b'\n')
            .count() as u64;
        self.cursor = end;
    }

    /// True when the line ending at the `\n` at `pos` holds nothing but an optional `\r`
    fn line_is_empty(&self, pos: usize) -> bool {
        let before = &self.data[..pos];
        let before = before.strip_suffix(b"\r").unwrap_or(before);
        before.is_empty() || before.ends_with(b"\n")
    }
}

/// Open a log file and read its entries
///
/// **Public** - file wrapper around [`read_entries`]
///
/// # Errors
/// * `ParseError::MissingFile` - File absent or unreadable
pub fn load_entries(
    path: impl AsRef<Path>,
    options: &ReaderOptions,
) -> Result<Vec<Entry>, ParseError> {
    let path = path.as_ref();
    info!("Reading ping log: {}", path.display());

    let file = File::open(path).map_err(|source| ParseError::MissingFile {
        path: path.to_path_buf(),
        source,
    })?;

    read_entries(file, options)
}

fn parse_field<T: FromStr>(row: u64, index: usize, raw: &str) -> Result<T, ParseError> {
    raw.trim().parse::<T>().map_err(|_| invalid(row, index, raw))
}

/// Reals must also be finite; "nan" and "inf" parse as f64 but are not measurements.
fn parse_real(row: u64, index: usize, raw: &str) -> Result<f64, ParseError> {
    let value: f64 = parse_field(row, index, raw)?;
    if !value.is_finite() {
        return Err(invalid(row, index, raw));
    }
    Ok(value)
}

fn invalid(row: u64, index: usize, raw: &str) -> ParseError {
    ParseError::InvalidField {
        row,
        field: FIELD_NAMES[index],
        value: raw.to_string(),
    }
}

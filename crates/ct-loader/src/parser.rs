//! Row parser for NCI EVS terminology exports.
//!
//! Reads the tab-delimited export record-by-record and classifies each row
//! as either a codelist header or a term belonging to the preceding header.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use ct_types::{Codelist, Term};

use crate::types::{CtError, CtResult, LoaderConfig};

/// Minimum number of fields in a data row.
pub const MIN_FIELDS: usize = 8;

/// Column labels of the NCI export header line.
pub const EXPECTED_COLUMNS: &[&str] = &[
    "Code",
    "Codelist Code",
    "Codelist Extensible (Yes/No)",
    "Codelist Name",
    "CDISC Submission Value",
    "CDISC Synonym(s)",
    "CDISC Definition",
    "NCI Preferred Term",
];

/// Field positions within a row.
pub mod column {
    /// NCI code of the codelist or term.
    pub const CODE: usize = 0;
    /// Code of the enclosing codelist; empty on header rows.
    pub const CODELIST_CODE: usize = 1;
    /// Codelist extensible flag (Yes/No).
    pub const EXTENSIBLE: usize = 2;
    /// Codelist name.
    pub const NAME: usize = 3;
    /// CDISC submission value.
    pub const SUBMISSION_VALUE: usize = 4;
    /// Semicolon-joined CDISC synonyms.
    pub const SYNONYMS: usize = 5;
    /// CDISC definition.
    pub const DEFINITION: usize = 6;
    /// NCI preferred term.
    pub const PREFERRED_TERM: usize = 7;
}

/// Trait for types that can be built from a data row.
///
/// Implementations may assume the record has at least [`MIN_FIELDS`] fields;
/// the parser rejects shorter rows before calling them.
pub trait CtRecord: Sized {
    /// Builds a value from a row.
    fn from_record(record: &StringRecord) -> Self;
}

/// A classified data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CtRow {
    /// A codelist header row (empty codelist-reference field).
    Codelist {
        /// 1-based line number in the export.
        line: u64,
        /// The codelist declared by the row.
        codelist: Codelist,
    },
    /// A term row.
    Term {
        /// 1-based line number in the export.
        line: u64,
        /// Codelist reference stated by the row (field 1).
        codelist_code: String,
        /// The term declared by the row.
        term: Term,
    },
}

impl CtRow {
    /// Returns the line number the row was read from.
    pub fn line(&self) -> u64 {
        match self {
            CtRow::Codelist { line, .. } | CtRow::Term { line, .. } => *line,
        }
    }
}

/// Classifies a single record.
///
/// # Errors
/// Returns [`CtError::MalformedRow`] if the record has fewer than
/// [`MIN_FIELDS`] fields.
pub fn classify(record: &StringRecord) -> CtResult<CtRow> {
    let line = parse::line(record);

    if record.len() < MIN_FIELDS {
        return Err(CtError::MalformedRow {
            line,
            code: parse::field(record, column::CODE).to_string(),
            codelist_code: parse::field(record, column::CODELIST_CODE).to_string(),
            expected: MIN_FIELDS,
            found: record.len(),
        });
    }

    let codelist_code = parse::field(record, column::CODELIST_CODE);
    if codelist_code.is_empty() {
        Ok(CtRow::Codelist {
            line,
            codelist: Codelist::from_record(record),
        })
    } else {
        Ok(CtRow::Term {
            line,
            codelist_code: codelist_code.to_string(),
            term: Term::from_record(record),
        })
    }
}

/// A parser over the rows of a terminology export.
///
/// The header line is consumed on construction. Iterating yields one
/// classified row per non-blank line.
pub struct CtParser<R: Read> {
    reader: Reader<R>,
    rows_read: usize,
    blank_rows: usize,
    /// Line of the last record seen, used to count the empty lines the
    /// csv reader drops between records.
    last_line: u64,
}

impl CtParser<BufReader<File>> {
    /// Creates a new parser from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or, with
    /// `check_header` set, has an unexpected header.
    pub fn from_path<P: AsRef<Path>>(path: P, config: LoaderConfig) -> CtResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CtError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), config)
    }
}

impl<R: Read> CtParser<R> {
    /// Creates a new parser from a reader.
    pub fn from_reader(reader: R, config: LoaderConfig) -> CtResult<Self> {
        // Definitions contain bare quotes, so quoting is disabled and
        // every tab is a field boundary.
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::None)
            .from_reader(reader);

        // Forces the header line to be read even when it is not checked
        let headers = csv_reader.headers()?.clone();
        if config.check_header {
            validate_headers(&headers)?;
        }

        Ok(Self {
            reader: csv_reader,
            rows_read: 0,
            blank_rows: 0,
            last_line: parse::line(&headers).max(1),
        })
    }

    /// Returns the number of lines read after the header so far, up to
    /// the last non-empty line.
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Returns the number of blank lines skipped so far.
    pub fn blank_rows(&self) -> usize {
        self.blank_rows
    }

    /// Accounts for empty lines between the previous record and `record`.
    fn track_gap(&mut self, record: &StringRecord) {
        let line = parse::line(record);
        if line > self.last_line + 1 {
            let gap = (line - self.last_line - 1) as usize;
            self.rows_read += gap;
            self.blank_rows += gap;
        }
        if line > 0 {
            self.last_line = line;
        }
    }
}

/// Validates that the header line carries the NCI column labels.
fn validate_headers(headers: &StringRecord) -> CtResult<()> {
    if headers.len() < EXPECTED_COLUMNS.len() {
        return Err(CtError::InvalidHeader {
            expected: EXPECTED_COLUMNS.len(),
            found: headers.len(),
        });
    }

    for (i, expected_col) in EXPECTED_COLUMNS.iter().enumerate() {
        let found = headers.get(i).unwrap_or("");
        // Handle UTF-8 BOM at start of file
        let found = found.trim_start_matches('\u{feff}');
        if found != *expected_col {
            return Err(CtError::UnexpectedColumn {
                position: i,
                expected: expected_col.to_string(),
                found: found.to_string(),
            });
        }
    }

    Ok(())
}

impl<R: Read> Iterator for CtParser<R> {
    type Item = CtResult<CtRow>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    self.track_gap(&record);
                    self.rows_read += 1;

                    // A whitespace-only line is one field; anything with a
                    // tab in it is a row and goes through the field check.
                    if is_blank(&record) {
                        self.blank_rows += 1;
                        continue;
                    }

                    return Some(classify(&record));
                }
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

fn is_blank(record: &StringRecord) -> bool {
    match record.len() {
        0 => true,
        1 => record[0].trim().is_empty(),
        _ => false,
    }
}

/// Helper functions for reading field values.
pub mod parse {
    use csv::StringRecord;

    /// Returns field `index`, or an empty string if the record is shorter.
    pub fn field(record: &StringRecord, index: usize) -> &str {
        record.get(index).unwrap_or("")
    }

    /// Returns the 1-based line number a record started on, or 0 if unknown.
    pub fn line(record: &StringRecord) -> u64 {
        record.position().map(|p| p.line()).unwrap_or(0)
    }

    /// Splits a semicolon-joined synonym field.
    ///
    /// Values are kept verbatim. An empty field yields no synonyms, and
    /// trailing empty entries (from a trailing `;`) are dropped.
    pub fn synonyms(value: &str) -> Vec<String> {
        let mut synonyms: Vec<String> = value.split(';').map(str::to_string).collect();
        while synonyms.last().is_some_and(|s| s.is_empty()) {
            synonyms.pop();
        }
        synonyms
    }
}

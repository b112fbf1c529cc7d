//! Loader-specific types: errors, configuration and statistics.

use thiserror::Error;

/// Errors that can occur while loading a terminology export.
#[derive(Error, Debug)]
pub enum CtError {
    /// I/O error reading the export.
    #[error("IO error reading terminology file: {0}")]
    Io(#[from] std::io::Error),

    /// Low-level delimited-text error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Row with too few fields, usually caused by stray control characters.
    #[error(
        "Invalid row content likely due to invalid characters in the load file \
         in row: {code}.{codelist_code} (line {line}: expected at least {expected} fields, found {found})"
    )]
    MalformedRow {
        /// 1-based line number in the export.
        line: u64,
        /// Field 0 of the offending row.
        code: String,
        /// Field 1 of the offending row.
        codelist_code: String,
        /// Number of fields required.
        expected: usize,
        /// Number of fields found.
        found: usize,
    },

    /// Term row encountered before any codelist header row.
    #[error("Term {code} at line {line} has no enclosing codelist (stated codelist: {codelist_code})")]
    OrphanTerm {
        /// 1-based line number in the export.
        line: u64,
        /// Code of the orphaned term.
        code: String,
        /// Codelist reference stated by the term row.
        codelist_code: String,
    },

    /// Invalid header - column count mismatch.
    #[error("Invalid header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// Unexpected column name.
    #[error("Unexpected column '{found}' at position {position}, expected '{expected}'")]
    UnexpectedColumn {
        /// The column position.
        position: usize,
        /// Expected column name.
        expected: String,
        /// Found column name.
        found: String,
    },
}

/// Result type for loader operations.
pub type CtResult<T> = Result<T, CtError>;

/// Configuration for loading a terminology export.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    /// Whether to check the header line against the NCI column labels.
    /// When false the header line is discarded unread.
    pub check_header: bool,
}

impl LoaderConfig {
    /// Creates a config that rejects files whose header does not match
    /// the NCI column layout.
    pub fn strict() -> Self {
        Self { check_header: true }
    }
}

/// Statistics from loading a terminology export.
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Lines read after the header up to the last non-empty line,
    /// including blank ones.
    pub rows_read: usize,
    /// Empty or whitespace-only lines skipped.
    pub blank_rows: usize,
    /// Codelist header rows.
    pub codelist_rows: usize,
    /// Term rows.
    pub term_rows: usize,
    /// Codelists replaced by a later header row with the same code.
    pub replaced_codelists: usize,
    /// Term rows whose stated codelist differs from the enclosing codelist.
    pub reference_mismatches: usize,
    /// Term rows missing a code or submission value.
    pub incomplete_terms: usize,
    /// Time taken to load in milliseconds.
    pub load_time_ms: u64,
}

impl LoadStats {
    /// Returns the number of classified (non-blank) rows.
    pub fn data_rows(&self) -> usize {
        self.codelist_rows + self.term_rows
    }
}

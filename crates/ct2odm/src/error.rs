//! Error types for the conversion pipeline.

use ct_loader::CtError;
use thiserror::Error;

/// Errors that can occur while validating options or producing the ODM file.
#[derive(Error, Debug)]
pub enum OdmError {
    /// Loading the terminology export failed.
    #[error(transparent)]
    Load(#[from] CtError),

    /// I/O error writing the ODM file.
    #[error("IO error writing ODM file: {0}")]
    Io(#[from] std::io::Error),

    /// A value holds a character that XML 1.0 does not allow.
    #[error(
        "Invalid character {character:?} in {location}. \
         The load file likely contains stray control characters."
    )]
    IllegalCharacter {
        /// Where the value was found, e.g. `term C2 (CDISC Definition)`.
        location: String,
        /// The offending character.
        character: char,
    },

    /// Input file missing or not a regular file.
    #[error("The controlled terminology text file is not found: {path}")]
    InputNotFound {
        /// The path that was given.
        path: String,
    },

    /// Output file name missing.
    #[error("Invalid ODM file name. A valid ODM file name is required.")]
    MissingOutput,

    /// Package date not in `YYYY-MM-DD` form or not a calendar date.
    #[error("Invalid package date '{value}'. The package date of the input file is required (YYYY-MM-DD).")]
    InvalidPackageDate {
        /// The value that was given.
        value: String,
    },

    /// Standard name missing.
    #[error("Missing standard name. The standard name (e.g. SDTM, SEND, CDASH, ADaM) is required.")]
    MissingStandard,
}

impl OdmError {
    /// Returns true for errors caused by invalid invocation parameters.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            OdmError::InputNotFound { .. }
                | OdmError::MissingOutput
                | OdmError::InvalidPackageDate { .. }
                | OdmError::MissingStandard
        )
    }
}

/// Result type for conversion operations.
pub type OdmResult<T> = Result<T, OdmError>;

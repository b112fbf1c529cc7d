//! Conversion options and their validation.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use ct_loader::LoaderConfig;

use crate::assembler::PackageInfo;
use crate::error::{OdmError, OdmResult};

/// Controlled terminology schema version used when none is given.
pub const DEFAULT_CT_VERSION: &str = "1.1.1";

/// Unvalidated conversion parameters.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Tab-delimited terminology export to read.
    pub input: PathBuf,
    /// ODM file to write.
    pub output: PathBuf,
    /// Standard name, e.g. `SDTM`, `SEND`, `CDASH`, `ADaM`.
    pub standard: String,
    /// Package date as given (`YYYY-MM-DD`).
    pub package_date: String,
    /// Controlled terminology schema version.
    pub version: String,
    /// Loader settings.
    pub loader: LoaderConfig,
}

impl ConvertOptions {
    /// Creates options with the default version and loader settings.
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        standard: impl Into<String>,
        package_date: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            standard: standard.into(),
            package_date: package_date.into(),
            version: DEFAULT_CT_VERSION.to_string(),
            loader: LoaderConfig::default(),
        }
    }

    /// Sets the controlled terminology schema version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the loader configuration.
    #[must_use]
    pub fn with_loader_config(mut self, loader: LoaderConfig) -> Self {
        self.loader = loader;
        self
    }

    /// Checks the options, stamping the creation time on success.
    ///
    /// Checks run in order: input file, output name, package date, standard.
    /// The first failure is returned.
    pub fn validate(self) -> OdmResult<ValidatedOptions> {
        if self.input.as_os_str().is_empty() || !self.input.is_file() {
            return Err(OdmError::InputNotFound {
                path: self.input.display().to_string(),
            });
        }
        if self.output.as_os_str().is_empty() {
            return Err(OdmError::MissingOutput);
        }
        let package_date = parse_package_date(&self.package_date)?;
        if self.standard.trim().is_empty() {
            return Err(OdmError::MissingStandard);
        }

        Ok(ValidatedOptions {
            input: self.input,
            output: self.output,
            loader: self.loader,
            info: PackageInfo::new(self.standard, package_date, self.version),
        })
    }
}

/// Options that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedOptions {
    input: PathBuf,
    output: PathBuf,
    loader: LoaderConfig,
    info: PackageInfo,
}

impl ValidatedOptions {
    /// Returns the input path.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Returns the output path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Returns the loader configuration.
    pub fn loader(&self) -> &LoaderConfig {
        &self.loader
    }

    /// Returns the package metadata.
    pub fn info(&self) -> &PackageInfo {
        &self.info
    }
}

/// Parses a package date, which must be `YYYY-MM-DD` and a real calendar date.
pub fn parse_package_date(value: &str) -> OdmResult<NaiveDate> {
    let invalid = || OdmError::InvalidPackageDate {
        value: value.to_string(),
    };
    if !has_date_shape(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())
}

/// `\d{4}-[01]\d-[0-3]\d`
fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, b)| b.is_ascii_digit());
    digits_ok && bytes[5] <= b'1' && bytes[8] <= b'3'
}

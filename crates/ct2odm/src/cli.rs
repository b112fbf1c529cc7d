//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use ct2odm::{ConvertOptions, DEFAULT_CT_VERSION};
use ct2odm::ct_loader::LoaderConfig;

/// Usage line printed after invocation-parameter errors.
pub const USAGE: &str = "Usage: ct2odm --txt <text CT file> --odm <ODM CT file> \
                         --std <standard> --date <package date> [--ver <schema version>]";

#[derive(Parser, Debug)]
#[command(
    name = "ct2odm",
    version,
    about = "Convert an NCI EVS controlled terminology text file into CDISC CT-XML",
    long_about = "Convert the NCI EVS Controlled Terminology tab-delimited text file into \
                  a CT-XML file based on CDISC ODM v1.3.2."
)]
pub struct Cli {
    /// Tab-delimited controlled terminology text file to read.
    #[arg(long = "txt", value_name = "FILE")]
    pub txt: PathBuf,

    /// ODM XML file to write.
    #[arg(long = "odm", value_name = "FILE")]
    pub odm: PathBuf,

    /// Name of the standard for the CT package (e.g. SDTM, SEND, CDASH, ADaM).
    #[arg(long = "std", value_name = "STANDARD")]
    pub standard: String,

    /// CT package date in ISO 8601 format.
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: String,

    /// Controlled terminology schema version.
    #[arg(id = "ver", long = "ver", value_name = "VERSION", default_value = DEFAULT_CT_VERSION)]
    pub version: String,

    /// Reject input files whose header line is not the NCI column layout.
    #[arg(long = "check-header")]
    pub check_header: bool,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Returns the default log filter implied by -v/-q.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Converts parsed arguments into conversion options.
    pub fn into_options(self) -> ConvertOptions {
        let loader = LoaderConfig {
            check_header: self.check_header,
        };
        ConvertOptions::new(self.txt, self.odm, self.standard, self.date)
            .with_version(self.version)
            .with_loader_config(loader)
    }
}

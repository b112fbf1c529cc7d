//! # ct-loader
//!
//! Parser for NCI EVS controlled terminology tab-delimited exports.
//!
//! The export is a flat file: one row per codelist header, each followed by
//! the rows of the terms that belong to it. This crate classifies those rows
//! and folds them into a [`Package`](ct_types::Package).
//!
//! ```no_run
//! use ct_loader::{load_package, LoaderConfig};
//!
//! let (package, stats) = load_package("SDTM Terminology.txt", &LoaderConfig::default())?;
//! println!("{} codelists, {} terms", package.len(), stats.term_rows);
//! # Ok::<(), ct_loader::CtError>(())
//! ```

#![warn(missing_docs)]

mod builder;
mod codelist;
mod loader;
pub mod parser;
mod term;
mod types;

pub use builder::{build_package, PackageBuilder};
pub use loader::{load_package, load_package_from_reader};
pub use parser::{CtParser, CtRecord, CtRow};
pub use types::{CtError, CtResult, LoadStats, LoaderConfig};

// Re-export ct-types for convenience
pub use ct_types;

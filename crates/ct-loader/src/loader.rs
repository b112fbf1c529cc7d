//! Terminology file loading.

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use ct_types::Package;
use tracing::info;

use crate::builder::PackageBuilder;
use crate::parser::CtParser;
use crate::types::{CtResult, LoadStats, LoaderConfig};

/// Loads a terminology export from a file.
///
/// # Errors
/// Returns an error if the file is missing or unreadable, or on the first
/// malformed row or orphan term.
pub fn load_package<P: AsRef<Path>>(
    path: P,
    config: &LoaderConfig,
) -> CtResult<(Package, LoadStats)> {
    let path = path.as_ref();
    info!("Loading controlled terminology from: {}", path.display());
    let parser = CtParser::from_path(path, config.clone())?;
    load_from_parser(parser)
}

/// Loads a terminology export from any reader.
pub fn load_package_from_reader<R: Read>(
    reader: R,
    config: &LoaderConfig,
) -> CtResult<(Package, LoadStats)> {
    let parser = CtParser::from_reader(reader, config.clone())?;
    load_from_parser(parser)
}

fn load_from_parser<R: Read>(mut parser: CtParser<R>) -> CtResult<(Package, LoadStats)> {
    let start = Instant::now();
    let mut builder = PackageBuilder::new();

    for row in parser.by_ref() {
        builder.push(row?)?;
    }

    let (package, mut stats) = builder.finish();
    stats.rows_read = parser.rows_read();
    stats.blank_rows = parser.blank_rows();
    stats.load_time_ms = start.elapsed().as_millis() as u64;

    info!(
        "Loaded {} codelists, {} terms in {} ms",
        package.len(),
        package.term_count(),
        stats.load_time_ms
    );

    Ok((package, stats))
}

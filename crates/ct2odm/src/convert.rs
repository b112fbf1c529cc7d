//! End-to-end conversion: load, assemble, write.

use std::path::PathBuf;

use ct_loader::{load_package, LoadStats};
use tracing::info;

use crate::assembler::{check_package, OdmAssembler};
use crate::error::OdmResult;
use crate::namespace::Namespaces;
use crate::options::ValidatedOptions;
use crate::writer::write_document_to_path;

/// Outcome of a successful conversion.
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    /// Codelists written.
    pub codelists: usize,
    /// Enumerated items written.
    pub terms: usize,
    /// Path of the written ODM file.
    pub output: PathBuf,
    /// Statistics from loading the export.
    pub stats: LoadStats,
}

/// Converts a terminology export into a CT-XML file.
///
/// The export is fully loaded and checked before the output file is
/// created, so a load failure or an illegal character leaves no output
/// behind.
pub fn convert(options: &ValidatedOptions) -> OdmResult<ConversionSummary> {
    let (package, stats) = load_package(options.input(), options.loader())?;
    check_package(&package)?;

    let namespaces = Namespaces::default();
    let document = OdmAssembler::new(&namespaces, options.info()).assemble(&package);

    write_document_to_path(&document, options.output())?;
    info!("Wrote ODM file: {}", options.output().display());

    Ok(ConversionSummary {
        codelists: package.len(),
        terms: package.term_count(),
        output: options.output().to_path_buf(),
        stats,
    })
}

//! # ct2odm
//!
//! Converts an NCI EVS controlled terminology text file into a CDISC
//! CT-XML document (ODM v1.3.2 with the NCI `nciodm` extension namespace).
//!
//! The pipeline is: load the export into a [`Package`](ct_types::Package)
//! with `ct-loader`, assemble an [`Element`] tree with [`OdmAssembler`],
//! then serialize it with [`write_document`].
//!
//! ```no_run
//! use ct2odm::{convert, ConvertOptions};
//!
//! let options = ConvertOptions::new("SDTM Terminology.txt", "SDTM Terminology.odm.xml", "SDTM", "2024-03-29")
//!     .validate()?;
//! let summary = convert(&options)?;
//! println!("wrote {} codelists", summary.codelists);
//! # Ok::<(), ct2odm::OdmError>(())
//! ```

#![warn(missing_docs)]

mod assembler;
mod convert;
mod element;
mod error;
mod namespace;
mod options;
mod writer;

pub use assembler::{
    check_package, OdmAssembler, PackageInfo, ODM_VERSION, ORIGINATOR, SOURCE_SYSTEM,
};
pub use convert::{convert, ConversionSummary};
pub use element::Element;
pub use error::{OdmError, OdmResult};
pub use namespace::{Namespace, Namespaces, NCI_NS, ODM_NS, XML_NS, XSI_NS};
pub use options::{parse_package_date, ConvertOptions, ValidatedOptions, DEFAULT_CT_VERSION};
pub use writer::{
    find_illegal_char, is_xml_char, to_xml_string, write_document, write_document_to_path,
};

// Re-export the loader for convenience
pub use ct_loader;

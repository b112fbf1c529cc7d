//! # ct-types
//!
//! Type definitions for CDISC controlled terminology packages.
//!
//! This crate provides the in-memory model of an NCI EVS terminology
//! export: codelists owning ordered lists of terms, collected into a
//! package keyed by codelist code.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use ct_types::{Codelist, Package, Term};
//!
//! let mut codelist = Codelist::new(
//!     "C66731",
//!     "No",
//!     "Sex",
//!     "SEX",
//!     "Sex",
//!     "The assemblage of physical properties or qualities by which male is distinguished from female.",
//!     "CDISC SDTM Sex of Individual Terminology",
//! );
//! codelist.add_term(Term {
//!     code: "C20197".to_string(),
//!     submission_value: "M".to_string(),
//!     synonyms: vec!["Male".to_string()],
//!     definition: "A person who belongs to the sex that normally produces sperm.".to_string(),
//!     preferred_term: "Male".to_string(),
//! });
//!
//! let mut package = Package::new();
//! package.insert(codelist);
//!
//! assert_eq!(package.len(), 1);
//! assert_eq!(package.term_count(), 1);
//! ```

#![warn(missing_docs)]

mod codelist;
mod package;
mod term;

pub use codelist::Codelist;
pub use package::Package;
pub use term::Term;

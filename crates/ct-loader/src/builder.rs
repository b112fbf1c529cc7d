//! Folds classified rows into a [`Package`].
//!
//! Terms are attached to the most recently declared codelist, purely by row
//! order. The codelist reference stated on a term row is only compared, never
//! used for lookup.

use ct_types::{Codelist, Package};
use tracing::{debug, warn};

use crate::parser::CtRow;
use crate::types::{CtError, CtResult, LoadStats};

/// Single-pass package builder.
///
/// Holds the codelist currently receiving terms. It is moved into the
/// package when the next header row arrives or when the builder finishes.
#[derive(Debug, Default)]
pub struct PackageBuilder {
    package: Package,
    current: Option<Codelist>,
    stats: LoadStats,
}

impl PackageBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one classified row.
    ///
    /// # Errors
    /// Returns [`CtError::OrphanTerm`] if a term row arrives before any
    /// codelist header row.
    pub fn push(&mut self, row: CtRow) -> CtResult<()> {
        match row {
            CtRow::Codelist { codelist, .. } => {
                self.stats.codelist_rows += 1;
                if let Some(previous) = self.current.replace(codelist) {
                    self.commit(previous);
                }
            }
            CtRow::Term {
                line,
                codelist_code,
                term,
            } => {
                let current = self.current.as_mut().ok_or_else(|| CtError::OrphanTerm {
                    line,
                    code: term.code.clone(),
                    codelist_code: codelist_code.clone(),
                })?;

                if current.code != codelist_code {
                    warn!(
                        line,
                        term = %term.code,
                        stated = %codelist_code,
                        enclosing = %current.code,
                        "term row references a different codelist than the one it follows"
                    );
                    self.stats.reference_mismatches += 1;
                }

                if !term.is_well_formed() {
                    warn!(
                        line,
                        term = %term.code,
                        codelist = %current.code,
                        "term row is missing its code or submission value"
                    );
                    self.stats.incomplete_terms += 1;
                }

                current.add_term(term);
                self.stats.term_rows += 1;
            }
        }
        Ok(())
    }

    /// Returns the statistics gathered so far.
    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }

    /// Completes the package.
    pub fn finish(mut self) -> (Package, LoadStats) {
        if let Some(last) = self.current.take() {
            self.commit(last);
        }
        (self.package, self.stats)
    }

    fn commit(&mut self, codelist: Codelist) {
        debug!(code = %codelist.code, terms = codelist.term_count(), "codelist complete");
        if let Some(replaced) = self.package.insert(codelist) {
            warn!(
                code = %replaced.code,
                dropped_terms = replaced.term_count(),
                "duplicate codelist header replaces an earlier one"
            );
            self.stats.replaced_codelists += 1;
        }
    }
}

/// Builds a package from a stream of classified rows.
///
/// Stops at the first error; no partial package is returned.
pub fn build_package<I>(rows: I) -> CtResult<(Package, LoadStats)>
where
    I: IntoIterator<Item = CtResult<CtRow>>,
{
    let mut builder = PackageBuilder::new();
    for row in rows {
        builder.push(row?)?;
    }
    Ok(builder.finish())
}

//! Controlled terminology codelist type.

use crate::Term;

/// A CDISC codelist built from a codelist header row.
///
/// The header metadata is fixed at construction. Terms can only be
/// appended, in the order they are encountered in the source file.
///
/// # Examples
///
/// ```
/// use ct_types::{Codelist, Term};
///
/// let mut codelist = Codelist::new("C1", "Yes", "CL Name", "SUBVAL1", "Syn1;Syn2", "Def text", "Pref1");
/// assert_eq!(codelist.oid(), "CL.C1.SUBVAL1");
///
/// codelist.add_term(Term {
///     code: "C2".to_string(),
///     submission_value: "TV1".to_string(),
///     synonyms: vec!["S1".to_string()],
///     definition: "TDef".to_string(),
///     preferred_term: "TPref1".to_string(),
/// });
/// assert_eq!(codelist.term_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Codelist {
    /// NCI concept code of the codelist; the package key.
    pub code: String,
    /// "Yes"/"No" literal, kept as written.
    pub extensible: String,
    /// Codelist name.
    pub name: String,
    /// CDISC submission value.
    pub submission_value: String,
    /// Raw CDISC synonym field (not split).
    pub synonym: String,
    /// CDISC definition.
    pub definition: String,
    /// NCI preferred term.
    pub preferred_term: String,
    terms: Vec<Term>,
}

impl Codelist {
    /// Creates a codelist with no terms.
    pub fn new(
        code: impl Into<String>,
        extensible: impl Into<String>,
        name: impl Into<String>,
        submission_value: impl Into<String>,
        synonym: impl Into<String>,
        definition: impl Into<String>,
        preferred_term: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            extensible: extensible.into(),
            name: name.into(),
            submission_value: submission_value.into(),
            synonym: synonym.into(),
            definition: definition.into(),
            preferred_term: preferred_term.into(),
            terms: Vec::new(),
        }
    }

    /// Appends a term to the end of the codelist.
    pub fn add_term(&mut self, term: Term) {
        self.terms.push(term);
    }

    /// Returns the terms in attachment order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the number of attached terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Returns the ODM object identifier, `CL.<code>.<submission value>`.
    pub fn oid(&self) -> String {
        format!("CL.{}.{}", self.code, self.submission_value)
    }
}

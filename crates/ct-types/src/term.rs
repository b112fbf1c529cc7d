//! Controlled terminology term type.

/// A single enumerated value belonging to a codelist.
///
/// Built from a term row of the terminology export, i.e. a row whose
/// codelist-reference column is filled in.
///
/// # Examples
///
/// ```
/// use ct_types::Term;
///
/// let term = Term {
///     code: "C20197".to_string(),
///     submission_value: "M".to_string(),
///     synonyms: vec!["Male".to_string()],
///     definition: "A person who belongs to the sex that normally produces sperm.".to_string(),
///     preferred_term: "Male".to_string(),
/// };
///
/// assert!(term.is_well_formed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    /// NCI concept code of the term (e.g. `C20197`).
    pub code: String,
    /// CDISC submission value.
    pub submission_value: String,
    /// CDISC synonyms in declaration order. Never contains an empty entry
    /// produced from an empty source field.
    pub synonyms: Vec<String>,
    /// CDISC definition.
    pub definition: String,
    /// NCI preferred term.
    pub preferred_term: String,
}

impl Term {
    /// Returns true if both the code and the submission value are present.
    pub fn is_well_formed(&self) -> bool {
        !self.code.is_empty() && !self.submission_value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_term(code: &str, submission_value: &str) -> Term {
        Term {
            code: code.to_string(),
            submission_value: submission_value.to_string(),
            synonyms: vec![],
            definition: "TDef".to_string(),
            preferred_term: "TPref1".to_string(),
        }
    }

    #[test]
    fn test_well_formed_term() {
        let term = make_term("C2", "TV1");
        assert!(term.is_well_formed());
    }

    #[test]
    fn test_term_missing_submission_value() {
        assert!(!make_term("C2", "").is_well_formed());
        assert!(!make_term("", "TV1").is_well_formed());
    }
}

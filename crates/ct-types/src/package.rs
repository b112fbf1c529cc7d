//! Terminology package: codelists keyed by code.

use std::collections::BTreeMap;

use crate::Codelist;

/// An ordered collection of codelists keyed by codelist code.
///
/// Iteration is always in ascending (lexicographic) code order,
/// independent of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    codelists: BTreeMap<String, Codelist>,
}

impl Package {
    /// Creates an empty package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a codelist under its code.
    ///
    /// If a codelist with the same code was already present it is replaced
    /// and the previous value is returned.
    pub fn insert(&mut self, codelist: Codelist) -> Option<Codelist> {
        self.codelists.insert(codelist.code.clone(), codelist)
    }

    /// Looks up a codelist by code.
    pub fn get(&self, code: &str) -> Option<&Codelist> {
        self.codelists.get(code)
    }

    /// Iterates over codelists in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = &Codelist> {
        self.codelists.values()
    }

    /// Iterates over codelist codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codelists.keys().map(String::as_str)
    }

    /// Returns the number of codelists.
    pub fn len(&self) -> usize {
        self.codelists.len()
    }

    /// Returns true if the package holds no codelists.
    pub fn is_empty(&self) -> bool {
        self.codelists.is_empty()
    }

    /// Returns the total number of terms across all codelists.
    pub fn term_count(&self) -> usize {
        self.codelists.values().map(Codelist::term_count).sum()
    }
}

impl<'a> IntoIterator for &'a Package {
    type Item = &'a Codelist;
    type IntoIter = std::collections::btree_map::Values<'a, String, Codelist>;

    fn into_iter(self) -> Self::IntoIter {
        self.codelists.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_codelist(code: &str, name: &str) -> Codelist {
        Codelist::new(code, "No", name, "SV", "", "", "")
    }

    #[test]
    fn test_iteration_is_sorted_by_code() {
        let mut package = Package::new();
        package.insert(make_codelist("C99", "last"));
        package.insert(make_codelist("C10", "first"));
        package.insert(make_codelist("C5", "middle"));

        let codes: Vec<&str> = package.codes().collect();
        // Lexicographic, not numeric
        assert_eq!(codes, vec!["C10", "C5", "C99"]);
    }

    #[test]
    fn test_insert_replaces_duplicate() {
        let mut package = Package::new();
        assert!(package.insert(make_codelist("C1", "old")).is_none());
        let replaced = package.insert(make_codelist("C1", "new"));

        assert_eq!(replaced.map(|c| c.name), Some("old".to_string()));
        assert_eq!(package.len(), 1);
        assert_eq!(package.get("C1").map(|c| c.name.as_str()), Some("new"));
    }

    #[test]
    fn test_empty_package() {
        let package = Package::new();
        assert!(package.is_empty());
        assert_eq!(package.term_count(), 0);
        assert!(package.get("C1").is_none());
    }
}

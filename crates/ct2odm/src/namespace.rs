//! XML namespaces used by CDISC CT-XML.

/// ODM namespace.
pub const ODM_NS: &str = "http://www.cdisc.org/ns/odm/v1.3";

/// NCI EVS CDISC extension namespace.
pub const NCI_NS: &str = "http://ncicb.nci.nih.gov/xml/odm/EVS/CDISC";

/// Reserved XML namespace (`xml:` prefix).
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// XML Schema instance namespace.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// A namespace URI with an optional prefix. No prefix means the default
/// namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    prefix: Option<String>,
    uri: String,
}

impl Namespace {
    /// Creates a default (unprefixed) namespace.
    pub fn default_ns(uri: impl Into<String>) -> Self {
        Self {
            prefix: None,
            uri: uri.into(),
        }
    }

    /// Creates a prefixed namespace.
    pub fn prefixed(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            uri: uri.into(),
        }
    }

    /// Returns the prefix, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Returns the namespace URI.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the qualified name of `local` in this namespace.
    pub fn qualify(&self, local: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}:{local}"),
            None => local.to_string(),
        }
    }

    /// Returns the `xmlns` attribute name that declares this namespace.
    pub fn declaration(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("xmlns:{prefix}"),
            None => "xmlns".to_string(),
        }
    }
}

/// The namespaces a CT-XML document uses.
///
/// Built once and passed by reference to the assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespaces {
    /// Default ODM namespace.
    pub odm: Namespace,
    /// NCI extension namespace (`nciodm`).
    pub nci: Namespace,
    /// Reserved `xml` namespace; never declared.
    pub xml: Namespace,
    /// Schema instance namespace (`xsi`).
    pub xsi: Namespace,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            odm: Namespace::default_ns(ODM_NS),
            nci: Namespace::prefixed("nciodm", NCI_NS),
            xml: Namespace::prefixed("xml", XML_NS),
            xsi: Namespace::prefixed("xsi", XSI_NS),
        }
    }
}

impl Namespaces {
    /// Returns the `xmlns` declarations for the document root, in
    /// declaration order. The `xml` namespace is implicit and omitted.
    pub fn declarations(&self) -> Vec<(String, &str)> {
        [&self.odm, &self.nci, &self.xsi]
            .into_iter()
            .map(|ns| (ns.declaration(), ns.uri()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualify() {
        let ns = Namespaces::default();
        assert_eq!(ns.odm.qualify("CodeList"), "CodeList");
        assert_eq!(ns.nci.qualify("ExtCodeID"), "nciodm:ExtCodeID");
        assert_eq!(ns.xml.qualify("lang"), "xml:lang");
    }

    #[test]
    fn test_declarations() {
        let ns = Namespaces::default();
        let decls = ns.declarations();
        assert_eq!(
            decls,
            vec![
                ("xmlns".to_string(), ODM_NS),
                ("xmlns:nciodm".to_string(), NCI_NS),
                ("xmlns:xsi".to_string(), XSI_NS),
            ]
        );
    }
}

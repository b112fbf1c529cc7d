//! Builds the CT-XML element tree from a terminology package.

use chrono::{Local, NaiveDate, NaiveDateTime};
use ct_types::{Codelist, Package, Term};
use tracing::{debug, info};

use crate::element::Element;
use crate::error::{OdmError, OdmResult};
use crate::namespace::Namespaces;
use crate::writer::find_illegal_char;

/// ODM version written on the root element.
pub const ODM_VERSION: &str = "1.3.2";

/// Value of the root `Originator` attribute.
pub const ORIGINATOR: &str = "CDISC Data Exchange Standards Team (CT2ODM converter)";

/// Value of the root `SourceSystem` attribute.
pub const SOURCE_SYSTEM: &str = "NCI Thesaurus";

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Package-level metadata written into the document header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    /// Standard name, e.g. `SDTM`.
    pub standard: String,
    /// Package publication date.
    pub package_date: NaiveDate,
    /// Controlled terminology schema version.
    pub version: String,
    /// Document creation time (local).
    pub created: NaiveDateTime,
}

impl PackageInfo {
    /// Creates package info stamped with the current local time.
    pub fn new(
        standard: impl Into<String>,
        package_date: NaiveDate,
        version: impl Into<String>,
    ) -> Self {
        Self {
            standard: standard.into(),
            package_date,
            version: version.into(),
            created: Local::now().naive_local(),
        }
    }

    /// Overrides the creation time.
    #[must_use]
    pub fn with_created(mut self, created: NaiveDateTime) -> Self {
        self.created = created;
        self
    }

    /// Returns the package date as `YYYY-MM-DD`.
    pub fn date(&self) -> String {
        self.package_date.format(DATE_FORMAT).to_string()
    }

    /// Returns the creation time truncated to whole seconds.
    pub fn creation_date_time(&self) -> String {
        self.created.format(DATETIME_FORMAT).to_string()
    }

    /// Returns `CDISC_CT.<standard>.<date>`, used for the file and study OIDs.
    pub fn file_oid(&self) -> String {
        format!("CDISC_CT.{}.{}", self.standard, self.date())
    }

    /// Returns the MetaDataVersion OID.
    pub fn metadata_version_oid(&self) -> String {
        format!("CDISC_CT_MetaDataVersion.{}.{}", self.standard, self.date())
    }

    /// Returns `CDISC <standard> Controlled Terminology`.
    pub fn title(&self) -> String {
        format!("CDISC {} Controlled Terminology", self.standard)
    }

    /// Returns the title suffixed with the package date.
    pub fn dated_title(&self) -> String {
        format!("{}, {}", self.title(), self.date())
    }
}

/// Checks every value in `package` for characters XML 1.0 forbids.
///
/// # Errors
/// Returns [`OdmError::IllegalCharacter`] naming the codelist or term code
/// and the column holding the first offending character.
pub fn check_package(package: &Package) -> OdmResult<()> {
    for codelist in package {
        let fields = [
            ("Code", codelist.code.as_str()),
            ("Codelist Extensible", codelist.extensible.as_str()),
            ("Codelist Name", codelist.name.as_str()),
            ("CDISC Submission Value", codelist.submission_value.as_str()),
            ("CDISC Synonym", codelist.synonym.as_str()),
            ("CDISC Definition", codelist.definition.as_str()),
            ("NCI Preferred Term", codelist.preferred_term.as_str()),
        ];
        check_fields("codelist", &codelist.code, &fields)?;

        for term in codelist.terms() {
            let fields = [
                ("Code", term.code.as_str()),
                ("CDISC Submission Value", term.submission_value.as_str()),
                ("CDISC Definition", term.definition.as_str()),
                ("NCI Preferred Term", term.preferred_term.as_str()),
            ];
            check_fields("term", &term.code, &fields)?;
            for synonym in &term.synonyms {
                check_fields("term", &term.code, &[("CDISC Synonym", synonym.as_str())])?;
            }
        }
    }
    Ok(())
}

fn check_fields(kind: &str, code: &str, fields: &[(&str, &str)]) -> OdmResult<()> {
    for (column, value) in fields {
        if let Some(character) = find_illegal_char(value) {
            return Err(OdmError::IllegalCharacter {
                location: format!("{kind} {} ({column})", code.escape_debug()),
                character,
            });
        }
    }
    Ok(())
}

/// Assembles a CT-XML document tree.
#[derive(Debug, Clone, Copy)]
pub struct OdmAssembler<'a> {
    ns: &'a Namespaces,
    info: &'a PackageInfo,
}

impl<'a> OdmAssembler<'a> {
    /// Creates an assembler for the given namespaces and package metadata.
    pub fn new(ns: &'a Namespaces, info: &'a PackageInfo) -> Self {
        Self { ns, info }
    }

    /// Builds the complete `ODM` root element for `package`.
    ///
    /// Codelists appear in ascending code order; terms in attachment order.
    pub fn assemble(&self, package: &Package) -> Element {
        info!(
            "Assembling ODM document for {} codelists, {} terms",
            package.len(),
            package.term_count()
        );
        self.root().child(self.study(package))
    }

    fn root(&self) -> Element {
        let date = self.info.date();
        let mut root = self.odm("ODM");
        for (name, uri) in self.ns.declarations() {
            root = root.attr(name, uri);
        }
        root.attr("FileType", "Snapshot")
            .attr("FileOID", self.info.file_oid())
            .attr("Granularity", "Metadata")
            .attr("CreationDateTime", self.info.creation_date_time())
            .attr("AsOfDateTime", format!("{date}T00:00:00"))
            .attr("ODMVersion", ODM_VERSION)
            .attr(
                self.ns.nci.qualify("ControlledTerminologyVersion"),
                self.info.version.as_str(),
            )
            .attr("Originator", ORIGINATOR)
            .attr("SourceSystem", SOURCE_SYSTEM)
            .attr("SourceSystemVersion", date)
    }

    fn study(&self, package: &Package) -> Element {
        self.odm("Study")
            .attr("OID", self.info.file_oid())
            .child(self.global_variables())
            .child(self.metadata_version(package))
    }

    fn global_variables(&self) -> Element {
        self.odm("GlobalVariables")
            .child(self.odm("StudyName").text(self.info.title()))
            .child(self.odm("StudyDescription").text(self.info.dated_title()))
            .child(self.odm("ProtocolName").text(self.info.title()))
    }

    fn metadata_version(&self, package: &Package) -> Element {
        let mut mdv = self
            .odm("MetaDataVersion")
            .attr("OID", self.info.metadata_version_oid())
            .attr("Name", self.info.title())
            .attr("Description", self.info.dated_title());
        for codelist in package {
            mdv.push(self.codelist(codelist));
        }
        mdv
    }

    /// Builds a `CodeList` element with its enumerated items.
    pub fn codelist(&self, codelist: &Codelist) -> Element {
        debug!(code = %codelist.code, terms = codelist.term_count(), "assembling codelist");
        let mut element = self
            .odm("CodeList")
            .attr("OID", codelist.oid())
            .attr("Name", codelist.name.as_str())
            .attr("DataType", "text")
            .attr(self.ns.nci.qualify("ExtCodeID"), codelist.code.as_str())
            .attr(
                self.ns.nci.qualify("CodeListExtensible"),
                codelist.extensible.as_str(),
            )
            .child(self.description(&codelist.definition));

        for term in codelist.terms() {
            element.push(self.enumerated_item(term));
        }

        element
            .child(self.nci_leaf("CDISCSubmissionValue", &codelist.submission_value))
            .child(self.nci_leaf("CDISCSynonym", &codelist.synonym))
            .child(self.nci_leaf("PreferredTerm", &codelist.preferred_term))
    }

    /// Builds an `EnumeratedItem` element for a term.
    pub fn enumerated_item(&self, term: &Term) -> Element {
        let mut item = self
            .odm("EnumeratedItem")
            .attr("CodedValue", term.submission_value.as_str())
            .attr(self.ns.nci.qualify("ExtCodeID"), term.code.as_str());

        for synonym in &term.synonyms {
            item.push(self.nci_leaf("CDISCSynonym", synonym));
        }

        item.child(self.nci_leaf("CDISCDefinition", &term.definition))
            .child(self.nci_leaf("PreferredTerm", &term.preferred_term))
    }

    fn description(&self, definition: &str) -> Element {
        self.odm("Description").child(
            self.odm("TranslatedText")
                .attr(self.ns.xml.qualify("lang"), "en")
                .text(definition),
        )
    }

    fn odm(&self, local: &str) -> Element {
        Element::new(self.ns.odm.qualify(local))
    }

    fn nci_leaf(&self, local: &str, text: &str) -> Element {
        Element::new(self.ns.nci.qualify(local)).text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_info() -> PackageInfo {
        let date = NaiveDate::from_ymd_opt(2024, 3, 29).unwrap();
        let created = date.and_hms_opt(14, 5, 0).unwrap();
        PackageInfo::new("SDTM", date, "1.1.1").with_created(created)
    }

    fn make_term(code: &str, submission_value: &str, synonyms: &[&str]) -> Term {
        Term {
            code: code.to_string(),
            submission_value: submission_value.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
            definition: format!("{code} definition"),
            preferred_term: format!("{code} preferred"),
        }
    }

    fn example_package() -> Package {
        let mut codelist = Codelist::new(
            "C1", "Yes", "CL Name", "SUBVAL1", "Syn1;Syn2", "Def text", "Pref1",
        );
        codelist.add_term(Term {
            code: "C2".to_string(),
            submission_value: "TV1".to_string(),
            synonyms: vec!["S1".to_string()],
            definition: "TDef".to_string(),
            preferred_term: "TPref1".to_string(),
        });
        let mut package = Package::new();
        package.insert(codelist);
        package
    }

    fn codelists(root: &Element) -> Vec<&Element> {
        root.first_child("Study")
            .and_then(|s| s.first_child("MetaDataVersion"))
            .map(|m| m.children_named("CodeList").collect())
            .unwrap_or_default()
    }

    fn child_names(element: &Element) -> Vec<&str> {
        element.children().iter().map(Element::name).collect()
    }

    #[test]
    fn test_root_attributes() {
        let ns = Namespaces::default();
        let info = make_info();
        let root = OdmAssembler::new(&ns, &info).assemble(&Package::new());

        assert_eq!(root.name(), "ODM");
        assert_eq!(root.attribute("xmlns"), Some(crate::ODM_NS));
        assert_eq!(root.attribute("xmlns:nciodm"), Some(crate::NCI_NS));
        assert_eq!(root.attribute("xmlns:xsi"), Some(crate::XSI_NS));
        assert_eq!(root.attribute("FileType"), Some("Snapshot"));
        assert_eq!(root.attribute("FileOID"), Some("CDISC_CT.SDTM.2024-03-29"));
        assert_eq!(root.attribute("Granularity"), Some("Metadata"));
        // Seconds are always written, even when zero
        assert_eq!(root.attribute("CreationDateTime"), Some("2024-03-29T14:05:00"));
        assert_eq!(root.attribute("AsOfDateTime"), Some("2024-03-29T00:00:00"));
        assert_eq!(root.attribute("ODMVersion"), Some("1.3.2"));
        assert_eq!(
            root.attribute("nciodm:ControlledTerminologyVersion"),
            Some("1.1.1")
        );
        assert_eq!(root.attribute("Originator"), Some(ORIGINATOR));
        assert_eq!(root.attribute("SourceSystem"), Some("NCI Thesaurus"));
        assert_eq!(root.attribute("SourceSystemVersion"), Some("2024-03-29"));
    }

    #[test]
    fn test_study_and_global_variables() {
        let ns = Namespaces::default();
        let info = make_info();
        let root = OdmAssembler::new(&ns, &info).assemble(&Package::new());

        let study = root.first_child("Study").unwrap();
        assert_eq!(study.attribute("OID"), Some("CDISC_CT.SDTM.2024-03-29"));
        assert_eq!(child_names(study), vec!["GlobalVariables", "MetaDataVersion"]);

        let globals = study.first_child("GlobalVariables").unwrap();
        let texts: Vec<Option<&str>> = globals.children().iter().map(Element::text_content).collect();
        assert_eq!(
            texts,
            vec![
                Some("CDISC SDTM Controlled Terminology"),
                Some("CDISC SDTM Controlled Terminology, 2024-03-29"),
                Some("CDISC SDTM Controlled Terminology"),
            ]
        );
        assert_eq!(
            child_names(globals),
            vec!["StudyName", "StudyDescription", "ProtocolName"]
        );

        let mdv = study.first_child("MetaDataVersion").unwrap();
        assert_eq!(
            mdv.attribute("OID"),
            Some("CDISC_CT_MetaDataVersion.SDTM.2024-03-29")
        );
        assert_eq!(mdv.attribute("Name"), Some("CDISC SDTM Controlled Terminology"));
        assert_eq!(
            mdv.attribute("Description"),
            Some("CDISC SDTM Controlled Terminology, 2024-03-29")
        );
        assert!(mdv.children().is_empty());
    }

    #[test]
    fn test_example_codelist_shape() {
        let ns = Namespaces::default();
        let info = make_info();
        let root = OdmAssembler::new(&ns, &info).assemble(&example_package());

        let lists = codelists(&root);
        assert_eq!(lists.len(), 1);
        let cl = lists[0];
        assert_eq!(cl.attribute("OID"), Some("CL.C1.SUBVAL1"));
        assert_eq!(cl.attribute("Name"), Some("CL Name"));
        assert_eq!(cl.attribute("DataType"), Some("text"));
        assert_eq!(cl.attribute("nciodm:ExtCodeID"), Some("C1"));
        assert_eq!(cl.attribute("nciodm:CodeListExtensible"), Some("Yes"));
        assert_eq!(
            child_names(cl),
            vec![
                "Description",
                "EnumeratedItem",
                "nciodm:CDISCSubmissionValue",
                "nciodm:CDISCSynonym",
                "nciodm:PreferredTerm",
            ]
        );

        let translated = cl
            .first_child("Description")
            .and_then(|d| d.first_child("TranslatedText"))
            .unwrap();
        assert_eq!(translated.attribute("xml:lang"), Some("en"));
        assert_eq!(translated.text_content(), Some("Def text"));

        // Codelist synonym stays unsplit
        assert_eq!(
            cl.first_child("nciodm:CDISCSynonym").and_then(Element::text_content),
            Some("Syn1;Syn2")
        );
        assert_eq!(
            cl.first_child("nciodm:CDISCSubmissionValue").and_then(Element::text_content),
            Some("SUBVAL1")
        );
        assert_eq!(
            cl.first_child("nciodm:PreferredTerm").and_then(Element::text_content),
            Some("Pref1")
        );

        let item = cl.first_child("EnumeratedItem").unwrap();
        assert_eq!(item.attribute("CodedValue"), Some("TV1"));
        assert_eq!(item.attribute("nciodm:ExtCodeID"), Some("C2"));
        assert_eq!(
            child_names(item),
            vec![
                "nciodm:CDISCSynonym",
                "nciodm:CDISCDefinition",
                "nciodm:PreferredTerm"
            ]
        );
        assert_eq!(item.children()[0].text_content(), Some("S1"));
        assert_eq!(item.children()[1].text_content(), Some("TDef"));
        assert_eq!(item.children()[2].text_content(), Some("TPref1"));
    }

    #[test]
    fn test_synonyms_become_ordered_children() {
        let ns = Namespaces::default();
        let info = make_info();
        let assembler = OdmAssembler::new(&ns, &info);

        let item = assembler.enumerated_item(&make_term("C2", "TV", &["A", "B", "C"]));
        let synonyms: Vec<&str> = item
            .children_named("nciodm:CDISCSynonym")
            .filter_map(Element::text_content)
            .collect();
        assert_eq!(synonyms, vec!["A", "B", "C"]);

        let bare = assembler.enumerated_item(&make_term("C3", "TV", &[]));
        assert_eq!(bare.children_named("nciodm:CDISCSynonym").count(), 0);
        assert_eq!(
            child_names(&bare),
            vec!["nciodm:CDISCDefinition", "nciodm:PreferredTerm"]
        );
    }

    #[test]
    fn test_codelists_sorted_terms_in_attachment_order() {
        let mut package = Package::new();
        for code in ["C9", "C10", "C2"] {
            let mut codelist = Codelist::new(code, "No", code, format!("SV{code}"), "", "", "");
            for suffix in ["z", "a", "m"] {
                codelist.add_term(make_term(&format!("{code}{suffix}"), suffix, &[]));
            }
            package.insert(codelist);
        }

        let ns = Namespaces::default();
        let info = make_info();
        let root = OdmAssembler::new(&ns, &info).assemble(&package);

        let lists = codelists(&root);
        let codes: Vec<&str> = lists
            .iter()
            .filter_map(|cl| cl.attribute("nciodm:ExtCodeID"))
            .collect();
        assert_eq!(codes, vec!["C10", "C2", "C9"]);

        for cl in lists {
            let values: Vec<&str> = cl
                .children_named("EnumeratedItem")
                .filter_map(|item| item.attribute("CodedValue"))
                .collect();
            assert_eq!(values, vec!["z", "a", "m"]);
        }
    }

    #[test]
    fn test_custom_extension_prefix() {
        let ns = Namespaces {
            nci: crate::Namespace::prefixed("nci", crate::NCI_NS),
            ..Namespaces::default()
        };
        let info = make_info();
        let root = OdmAssembler::new(&ns, &info).assemble(&example_package());

        assert_eq!(root.attribute("xmlns:nci"), Some(crate::NCI_NS));
        assert_eq!(codelists(&root)[0].attribute("nci:ExtCodeID"), Some("C1"));
    }

    #[test]
    fn test_check_package_names_offending_term() {
        let mut package = example_package();
        assert!(check_package(&package).is_ok());

        let mut codelist = Codelist::new("C5", "No", "Name", "SV", "", "Def", "Pref");
        codelist.add_term(make_term("C6", "TV", &["ok", "bad\u{0c}"]));
        package.insert(codelist);

        match check_package(&package) {
            Err(OdmError::IllegalCharacter {
                location,
                character,
            }) => {
                assert_eq!(location, "term C6 (CDISC Synonym)");
                assert_eq!(character, '\u{0c}');
            }
            other => panic!("expected illegal character, got {other:?}"),
        }
    }

    #[test]
    fn test_check_package_names_offending_codelist() {
        let mut package = Package::new();
        package.insert(Codelist::new(
            "C7", "No", "Name\u{0b}", "SV", "", "Def", "Pref",
        ));

        let err = check_package(&package).unwrap_err();
        assert!(err.to_string().contains("codelist C7 (Codelist Name)"));
    }

    #[test]
    fn test_package_info_titles() {
        let info = make_info();
        assert_eq!(info.date(), "2024-03-29");
        assert_eq!(info.title(), "CDISC SDTM Controlled Terminology");
        assert_eq!(
            info.dated_title(),
            "CDISC SDTM Controlled Terminology, 2024-03-29"
        );
    }
}

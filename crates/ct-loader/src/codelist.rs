//! Codelist header row parser.

use csv::StringRecord;
use ct_types::Codelist;

use crate::parser::{column, parse, CtRecord};

impl CtRecord for Codelist {
    fn from_record(record: &StringRecord) -> Self {
        Codelist::new(
            parse::field(record, column::CODE),
            parse::field(record, column::EXTENSIBLE),
            parse::field(record, column::NAME),
            parse::field(record, column::SUBMISSION_VALUE),
            parse::field(record, column::SYNONYMS),
            parse::field(record, column::DEFINITION),
            parse::field(record, column::PREFERRED_TERM),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(fields: &[&str]) -> StringRecord {
        let mut record = StringRecord::new();
        for field in fields {
            record.push_field(field);
        }
        record
    }

    #[test]
    fn test_parse_codelist_record() {
        let record = make_record(&[
            "C66742",
            "",
            "No",
            "No Yes Response",
            "NY",
            "No Yes Response",
            "A term that is used to indicate a question with permissible values of yes/no/unknown/not applicable.",
            "CDISC SDTM Yes No Unknown or Not Applicable Response Terminology",
        ]);

        let codelist = Codelist::from_record(&record);
        assert_eq!(codelist.code, "C66742");
        assert_eq!(codelist.extensible, "No");
        assert_eq!(codelist.name, "No Yes Response");
        assert_eq!(codelist.submission_value, "NY");
        assert_eq!(codelist.synonym, "No Yes Response");
        assert_eq!(
            codelist.preferred_term,
            "CDISC SDTM Yes No Unknown or Not Applicable Response Terminology"
        );
        assert_eq!(codelist.term_count(), 0);
    }

    #[test]
    fn test_codelist_synonym_is_not_split() {
        let record = make_record(&[
            "C1", "", "Yes", "CL Name", "SUBVAL1", "Syn1;Syn2", "Def text", "Pref1",
        ]);
        let codelist = Codelist::from_record(&record);
        assert_eq!(codelist.synonym, "Syn1;Syn2");
        assert_eq!(codelist.oid(), "CL.C1.SUBVAL1");
    }

    #[test]
    fn test_extensible_is_kept_verbatim() {
        let record = make_record(&["C1", "", "maybe", "N", "SV", "", "", ""]);
        let codelist = Codelist::from_record(&record);
        assert_eq!(codelist.extensible, "maybe");
    }
}

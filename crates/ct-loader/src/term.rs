//! Term row parser.

use csv::StringRecord;
use ct_types::Term;

use crate::parser::{column, parse, CtRecord};

impl CtRecord for Term {
    fn from_record(record: &StringRecord) -> Self {
        Term {
            code: parse::field(record, column::CODE).to_string(),
            submission_value: parse::field(record, column::SUBMISSION_VALUE).to_string(),
            synonyms: parse::synonyms(parse::field(record, column::SYNONYMS)),
            definition: parse::field(record, column::DEFINITION).to_string(),
            preferred_term: parse::field(record, column::PREFERRED_TERM).to_string(),
        }
    }
}

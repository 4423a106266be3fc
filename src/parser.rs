//! Parsing entry points
//!
//! [`CaptionParser`] owns a compiled grammar. Building one walks the field
//! table and the vocabularies once, so reuse it across captions. The grammar
//! is read-only after construction: a parser is `Send + Sync` and one
//! instance can serve any number of threads at once. The free function
//! [`parse`] uses a process-wide parser built on first use.

use chumsky::prelude::*;
use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::ast::CaptionTree;
use crate::error::{GrammarError, ParseFailure};
use crate::grammar::assembler::caption;
use crate::grammar::labels::{FieldSpec, FieldTable, FIELDS};
use crate::grammar::SharedParser;
use crate::normalize::normalize;

/// A compiled enumeration/chronology grammar
pub struct CaptionParser {
    grammar: SharedParser<CaptionTree>,
    fields: usize,
}

impl CaptionParser {
    /// Compile the grammar over the built-in field table.
    ///
    /// # Panics
    ///
    /// Panics if the built-in table fails validation, which no caption can
    /// cause.
    pub fn new() -> Self {
        match Self::with_fields(FIELDS) {
            Ok(parser) => parser,
            Err(err) => panic!("built-in field table is invalid: {err}"),
        }
    }

    /// Compile the grammar over a caller-supplied field table.
    pub fn with_fields(fields: &'static [FieldSpec]) -> Result<Self, GrammarError> {
        let table = FieldTable::new(fields)?;
        debug!(fields = table.len(), "compiled caption grammar");
        Ok(Self {
            grammar: caption(&table),
            fields: table.len(),
        })
    }

    /// Number of label-value fields the grammar recognizes
    pub fn field_count(&self) -> usize {
        self.fields
    }

    /// Normalize a raw caption and parse it completely.
    pub fn parse(&self, caption: &str) -> Result<CaptionTree, ParseFailure> {
        let normalized = normalize(caption);
        trace!(caption, normalized = %normalized, "parsing caption");

        self.grammar.parse(normalized.as_str()).map_err(|errors| {
            let failure = ParseFailure::from_errors(&normalized, errors);
            debug!(
                normalized = %failure.normalized,
                position = failure.position,
                expected = ?failure.expected,
                "caption did not parse"
            );
            failure
        })
    }
}

impl Default for CaptionParser {
    fn default() -> Self {
        Self::new()
    }
}

static PARSER: Lazy<CaptionParser> = Lazy::new(CaptionParser::new);

/// Parse a caption with the built-in grammar, compiled once per process.
pub fn parse(caption: &str) -> Result<CaptionTree, ParseFailure> {
    PARSER.parse(caption)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Field, Fragment, Value};

    #[test]
    fn test_parse_normalizes_first() {
        assert_eq!(
            parse("  V.3.*\r\n").unwrap(),
            CaptionTree::Fragment(Fragment::labeled(Field::Volumes, Value::number("3")))
        );
    }

    #[test]
    fn test_failure_carries_normalized_caption() {
        let err = parse("V.3 ???").unwrap_err();
        assert_eq!(err.normalized, "v.3 ???");
        assert!(err.position >= 3);
        assert!(err.to_string().starts_with("no rule matched caption \"v.3 ???\""));
    }

    #[test]
    fn test_parser_is_reusable() {
        let parser = CaptionParser::new();
        assert_eq!(parser.field_count(), FIELDS.len());
        assert!(parser.parse("v.1").is_ok());
        assert!(parser.parse("v.1").is_ok());
        assert!(parser.parse("").is_err());
    }

    #[test]
    fn test_one_parser_serves_many_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CaptionParser>();

        let parser = CaptionParser::new();
        let captions = ["v.12 no.3", "1990/91", "jan./feb. 1999", "(1985-86)"];
        let expected: Vec<_> = captions.iter().map(|c| parser.parse(c).unwrap()).collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| captions.map(|c| parser.parse(c).unwrap())))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap().to_vec(), expected);
            }
        });
    }

    #[test]
    fn test_custom_field_table() {
        static ONLY_VOLUMES: &[FieldSpec] = &[FieldSpec {
            field: Field::Volumes,
            singular: "volume",
            plural: "volumes",
            abbreviations: &["vol", "v"],
        }];
        let parser = CaptionParser::with_fields(ONLY_VOLUMES).unwrap();
        assert!(parser.parse("v.2").is_ok());
        // `no` is no longer a label, and `n` alone is reserved
        assert!(parser.parse("no.2").is_err());
    }

    #[test]
    fn test_invalid_field_table() {
        static EMPTY: &[FieldSpec] = &[];
        assert!(matches!(
            CaptionParser::with_fields(EMPTY),
            Err(GrammarError::EmptyFieldTable)
        ));
    }
}

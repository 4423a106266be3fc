//! Supplements, indexes, marker phrases and SuDoc numbers

use chumsky::prelude::*;

use super::labels::label_value_tail;
use super::primitives::{abbreviation, digit};
use super::ParserError;
use crate::ast::Fragment;

/// `supplement`, `suppl.`, `supp`, optionally with a value: `suppl. 2`
pub fn supplement() -> impl Parser<char, Fragment, Error = ParserError> + Clone {
    let label = choice((
        just("supplement").ignored(),
        abbreviation("suppl"),
        abbreviation("supp"),
    ));
    label
        .ignore_then(label_value_tail().or_not())
        .map(Fragment::Supplement)
        .labelled("supplement")
}

/// `index`, optionally with a value: `index 1-5`, `index: a`
pub fn index() -> impl Parser<char, Fragment, Error = ParserError> + Clone {
    just("index")
        .ignore_then(label_value_tail().or_not())
        .map(Fragment::Index)
        .labelled("index")
}

pub fn new_series() -> impl Parser<char, Fragment, Error = ParserError> + Clone {
    choice((
        just("new series"),
        just("new ser."),
        just("new ser"),
        just("n.s."),
    ))
    .to(Fragment::NewSeries)
    .labelled("new series")
}

pub fn incomplete() -> impl Parser<char, Fragment, Error = ParserError> + Clone {
    just("incomplete")
        .ignored()
        .or(abbreviation("incompl"))
        .to(Fragment::Incomplete)
}

/// An annual summary issued in place of the regular numbers
pub fn annual_summary() -> impl Parser<char, Fragment, Error = ParserError> + Clone {
    just("annual summaries")
        .or(just("annual summary"))
        .to(Fragment::AnnualSummary)
}

pub fn revision() -> impl Parser<char, Fragment, Error = ParserError> + Clone {
    just("revision").or(just("rev")).to(Fragment::Revision)
}

/// A classification number: a digit, a period, then digits, `:`, `/`, `-`.
///
/// Only meaningful when it covers a whole caption; callers anchor it.
pub fn sudoc() -> impl Parser<char, String, Error = ParserError> + Clone {
    digit()
        .chain::<char, _, _>(just('.'))
        .chain::<char, _, _>(
            filter(|c: &char| c.is_ascii_digit() || matches!(c, ':' | '/' | '-'))
                .repeated()
                .at_least(1),
        )
        .collect::<String>()
        .labelled("sudoc")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Item, Value};

    fn full_parse(
        parser: impl Parser<char, Fragment, Error = ParserError>,
        input: &str,
    ) -> Result<Fragment, Vec<ParserError>> {
        parser.then_ignore(end()).parse(input)
    }

    #[test]
    fn test_supplement_alone_and_with_value() {
        assert_eq!(
            full_parse(supplement(), "supplement").unwrap(),
            Fragment::Supplement(None)
        );
        assert_eq!(
            full_parse(supplement(), "suppl. 2").unwrap(),
            Fragment::Supplement(Some(Value::number("2")))
        );
        assert_eq!(
            full_parse(supplement(), "supp:a-b").unwrap(),
            Fragment::Supplement(Some(Value::Letters(vec![Item::range('a', 'b')])))
        );
        assert_eq!(
            full_parse(supplement(), "supp.").unwrap(),
            Fragment::Supplement(None)
        );
    }

    #[test]
    fn test_index() {
        assert_eq!(full_parse(index(), "index").unwrap(), Fragment::Index(None));
        assert_eq!(
            full_parse(index(), "index 1-5").unwrap(),
            Fragment::Index(Some(Value::Numeric(vec![Item::range("1", "5")])))
        );
    }

    #[test]
    fn test_markers() {
        for input in ["new series", "new ser.", "new ser", "n.s."] {
            assert_eq!(full_parse(new_series(), input).unwrap(), Fragment::NewSeries);
        }
        for input in ["incomplete", "incompl", "incompl."] {
            assert_eq!(full_parse(incomplete(), input).unwrap(), Fragment::Incomplete);
        }
        assert_eq!(
            full_parse(annual_summary(), "annual summaries").unwrap(),
            Fragment::AnnualSummary
        );
        assert_eq!(full_parse(revision(), "rev").unwrap(), Fragment::Revision);
    }

    #[test]
    fn test_sudoc_shape() {
        let parse = |input: &str| sudoc().then_ignore(end()).parse(input);
        assert_eq!(parse("4.12:3").unwrap(), "4.12:3");
        assert_eq!(parse("3.1/2-4").unwrap(), "3.1/2-4");
        assert!(parse("4.").is_err());
        assert!(parse("v.12").is_err());
        assert!(parse("4.12a").is_err());
    }
}

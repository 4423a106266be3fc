//! Composite assembler: fragments, sequences, groups and the entry rule
//!
//! Grammar:
//! ```text
//! <ec-delim> = " "* ("," | ":") " "* | " "+
//! <ec>       = <component> (<ec-delim> <component>)*
//! <ecp>      = "(" " "* <ec> " "* ")" | <ec>
//! <ecset>    = <ecp> (<ec-delim>? <ecp>)*
//! <caption>  = <sudoc> END | <ecset> END
//! ```
//!
//! The component alternation is the priority list. High-confidence forms
//! (labels, month names, fixed phrases) come first; bare numbers come last
//! because they are the easiest to misread.

use chumsky::prelude::*;

use super::auxiliary::{
    annual_summary, incomplete, index, new_series, revision, sudoc, supplement,
};
use super::labels::{label_values, FieldTable};
use super::primitives::{letter_range, numerics, numlets, ordinals, space, space0};
use super::temporal::{explicit_years, implicit_years, months, seasons, year_month};
use super::{IntoShared, ParserError, SharedParser};
use crate::ast::{CaptionTree, Fragment, Value};

/// A year list with a `year`/`yr` label, or any label-value field.
pub fn explicit(table: &FieldTable) -> SharedParser<Fragment> {
    explicit_years().or(label_values(table)).shared()
}

/// Forms that are almost always right when they match.
pub fn slam_dunks(table: &FieldTable) -> SharedParser<Fragment> {
    choice((
        explicit(table),
        year_month().shared(),
        implicit_years().shared(),
        months().map(Fragment::Months).shared(),
        seasons().map(Fragment::Seasons).shared(),
        new_series().shared(),
        incomplete().shared(),
    ))
    .shared()
}

/// A bare numeric list or a bare letter range. A lone letter is not one.
pub fn unknown_list() -> impl Parser<char, Fragment, Error = ParserError> + Clone {
    numerics()
        .or(letter_range().map(|range| Value::Letters(vec![range])))
        .map(Fragment::Unknown)
        .labelled("unknown list")
}

/// Any single fragment, in priority order.
pub fn component(table: &FieldTable) -> SharedParser<Fragment> {
    choice((
        slam_dunks(table),
        supplement().shared(),
        index().shared(),
        ordinals().map(Fragment::Ordinals).shared(),
        annual_summary().shared(),
        revision().shared(),
        numlets().map(Fragment::Numlets).shared(),
        unknown_list().shared(),
    ))
    .shared()
}

pub(crate) fn ec_delim() -> impl Parser<char, (), Error = ParserError> + Clone {
    space0()
        .then(one_of(",:"))
        .then(space0())
        .ignored()
        .or(space())
}

/// Delimited fragments in reading order
pub fn ec(
    component: SharedParser<Fragment>,
) -> impl Parser<char, CaptionTree, Error = ParserError> + Clone {
    component
        .clone()
        .then(ec_delim().ignore_then(component).repeated())
        .map(|(first, rest)| {
            let mut fragments = vec![first];
            fragments.extend(rest);
            CaptionTree::sequence(fragments)
        })
}

/// A sequence, optionally in parentheses
pub fn ecp(
    component: SharedParser<Fragment>,
) -> impl Parser<char, CaptionTree, Error = ParserError> + Clone {
    just('(')
        .ignore_then(space0())
        .ignore_then(ec(component.clone()))
        .then_ignore(space0())
        .then_ignore(just(')'))
        .map(CaptionTree::group)
        .or(ec(component))
}

/// Groups and sequences, delimited or simply juxtaposed
pub fn ecset(
    component: SharedParser<Fragment>,
) -> impl Parser<char, CaptionTree, Error = ParserError> + Clone {
    let group = ecp(component);
    group
        .clone()
        .then(ec_delim().or_not().ignore_then(group).repeated())
        .map(|(first, rest)| {
            let mut groups = vec![first];
            groups.extend(rest);
            CaptionTree::set(groups)
        })
}

/// The whole-caption rule.
///
/// A SuDoc number is only taken when it consumes the entire caption;
/// otherwise the caption is read as fragments.
pub fn caption(table: &FieldTable) -> SharedParser<CaptionTree> {
    sudoc()
        .then_ignore(end())
        .map(CaptionTree::SuDoc)
        .or(ecset(component(table)).then_ignore(end()))
        .shared()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Field, Item, Numlet, Value, YearItem, YearSpan};

    fn parse_caption(input: &str) -> Result<CaptionTree, Vec<ParserError>> {
        let table = FieldTable::builtin().unwrap();
        caption(&table).parse(input)
    }

    fn volume(n: &str) -> Fragment {
        Fragment::labeled(Field::Volumes, Value::number(n))
    }

    #[test]
    fn test_label_beats_year() {
        assert_eq!(
            parse_caption("v.1990").unwrap(),
            CaptionTree::Fragment(volume("1990"))
        );
    }

    #[test]
    fn test_year_month_beats_bare_years_and_months() {
        let tree = parse_caption("1999 jan").unwrap();
        assert!(matches!(
            tree.as_fragment(),
            Some(Fragment::YearMonth { .. })
        ));
    }

    #[test]
    fn test_delimiters() {
        let expected = CaptionTree::Sequence(vec![
            volume("1"),
            Fragment::labeled(Field::Numbers, Value::number("2")),
        ]);
        for input in ["v.1 no.2", "v.1:no.2", "v.1 : no.2", "v.1,no.2", "v.1 , no.2"] {
            assert_eq!(parse_caption(input).unwrap(), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_comma_continues_a_numeric_list() {
        assert_eq!(
            parse_caption("v.1, 2").unwrap(),
            CaptionTree::Fragment(Fragment::labeled(
                Field::Volumes,
                Value::Numeric(vec![Item::single("1"), Item::single("2")])
            ))
        );
    }

    #[test]
    fn test_parenthesized_group_with_padding() {
        assert_eq!(
            parse_caption("( 1990 )").unwrap(),
            CaptionTree::group(CaptionTree::Fragment(Fragment::ImplicitYears(vec![
                YearItem::single("1990")
            ])))
        );
    }

    #[test]
    fn test_juxtaposed_groups() {
        let years = |y: &str| {
            CaptionTree::group(CaptionTree::Fragment(Fragment::ImplicitYears(vec![
                YearItem::single(y),
            ])))
        };
        assert_eq!(
            parse_caption("v.1(1990)v.2(1991)").unwrap(),
            CaptionTree::Set(vec![
                CaptionTree::Fragment(volume("1")),
                years("1990"),
                CaptionTree::Fragment(volume("2")),
                years("1991"),
            ])
        );
    }

    #[test]
    fn test_sudoc_only_when_whole() {
        assert_eq!(
            parse_caption("4.12:3").unwrap(),
            CaptionTree::SuDoc("4.12:3".to_string())
        );
        // the same shape followed by more text is not a SuDoc, and nothing else reads it
        assert!(parse_caption("4.12:3 v.1").is_err());
    }

    #[test]
    fn test_fallback_fragments() {
        assert_eq!(
            parse_caption("2nd").unwrap(),
            CaptionTree::Fragment(Fragment::Ordinals(Item::single("2")))
        );
        assert_eq!(
            parse_caption("4a").unwrap(),
            CaptionTree::Fragment(Fragment::Numlets(Item::Single(Numlet::new(
                "4",
                Item::single('a')
            ))))
        );
        assert_eq!(
            parse_caption("12-14").unwrap(),
            CaptionTree::Fragment(Fragment::Unknown(Value::Numeric(vec![Item::range(
                "12", "14"
            )])))
        );
        assert_eq!(
            parse_caption("c-d").unwrap(),
            CaptionTree::Fragment(Fragment::Unknown(Value::Letters(vec![Item::range('c', 'd')])))
        );
        assert!(parse_caption("b").is_err());
        assert!(parse_caption("v").is_err());
    }

    #[test]
    fn test_new_series_then_volume() {
        assert_eq!(
            parse_caption("n.s. v.3").unwrap(),
            CaptionTree::Sequence(vec![Fragment::NewSeries, volume("3")])
        );
    }

    #[test]
    fn test_dual_range_years_in_group() {
        assert_eq!(
            parse_caption("v.5 (1990/91-1991/92)").unwrap(),
            CaptionTree::Set(vec![
                CaptionTree::Fragment(volume("5")),
                CaptionTree::group(CaptionTree::Fragment(Fragment::ImplicitYears(vec![
                    YearItem::range(YearSpan::dual("1990", "91"), YearSpan::dual("1991", "92"))
                ]))),
            ])
        );
    }

    #[test]
    fn test_empty_caption_fails() {
        assert!(parse_caption("").is_err());
    }
}

//! Temporal grammars
//!
//! Grammar:
//! ```text
//! <year4>      = ("17" | "18" | "19" | "20") <digit> <digit>
//! <year-end>   = <year4> | <digit> <digit>
//! <year-dual>  = <year4> "/" <year-end>
//! <year-range> = <year4> "-" <year-end>
//!              | <year-dual> <range-sep> (<year-dual> | <year-end>)
//! <year-list>  = <year-item> ("," " "* <year-item>)*
//! <months>     = list of <month> or <month> ("-" | "/") <month>
//! <seasons>    = list of <season> or <season> ("-" | "/") <season>
//! <year-month> = <year-list> <ym-sep> <months> | <months> <ym-sep> <year-list>
//! ```
//!
//! A two-digit year only ever appears as the end of a dual or a range.

use chumsky::prelude::*;

use super::primitives::{
    abbreviation, digit, list_of, list_sep, range_or_single, range_sep, slash_sep, space,
    space0,
};
use super::{IntoShared, ParserError, SharedParser};
use crate::ast::{Fragment, Item, Month, Season, YearItem, YearSpan};

/// One accepted spelling of a vocabulary word.
#[derive(Debug, Clone, Copy)]
pub struct Spelling {
    pub text: &'static str,
    /// Whether a trailing period may follow
    pub dotted: bool,
}

const fn full(text: &'static str) -> Spelling {
    Spelling {
        text,
        dotted: false,
    }
}

const fn abbr(text: &'static str) -> Spelling {
    Spelling { text, dotted: true }
}

/// Month spellings, tried in order. Full names come before their prefixes.
pub const MONTHS: &[(Month, &[Spelling])] = &[
    (Month::January, &[full("january"), abbr("jan")]),
    (Month::February, &[full("february"), abbr("feb")]),
    (Month::March, &[full("march"), abbr("mar")]),
    (Month::April, &[full("april"), abbr("apr")]),
    (Month::May, &[full("may")]),
    (Month::June, &[full("june"), abbr("jun")]),
    (Month::July, &[full("july"), abbr("jul")]),
    (Month::August, &[full("august"), abbr("aug")]),
    (Month::September, &[full("september"), abbr("sept"), abbr("sep")]),
    (Month::October, &[full("october"), abbr("oct")]),
    (Month::November, &[full("november"), abbr("nov")]),
    (Month::December, &[full("december"), abbr("dec")]),
];

pub const SEASONS: &[(Season, &[Spelling])] = &[
    (Season::Winter, &[full("winter"), abbr("wint"), abbr("wtr")]),
    (Season::Spring, &[full("spring"), abbr("spr")]),
    (Season::Summer, &[full("summer"), abbr("summ")]),
    (Season::Fall, &[full("fall"), full("autumn"), full("aut")]),
];

fn spelling(spelling: Spelling) -> SharedParser<()> {
    if spelling.dotted {
        abbreviation(spelling.text).shared()
    } else {
        just(spelling.text).ignored().shared()
    }
}

/// Fold a vocabulary table into one ordered alternation.
fn vocabulary<T>(
    table: &'static [(T, &'static [Spelling])],
) -> SharedParser<T>
where
    T: Copy + Send + Sync + 'static,
{
    table
        .iter()
        .flat_map(|(word, spellings)| {
            spellings
                .iter()
                .map(move |s| spelling(*s).to(*word).shared())
        })
        .reduce(|acc, next| acc.or(next).shared())
        .unwrap_or_else(|| {
            end()
                .try_map(|_, span| Err(Simple::custom(span, "empty vocabulary")))
                .shared()
        })
}

pub fn month() -> SharedParser<Month> {
    vocabulary(MONTHS).labelled("month").shared()
}

pub fn season() -> SharedParser<Season> {
    vocabulary(SEASONS).labelled("season").shared()
}

/// `jan`, `jan-mar`, `jan./feb.`, `jan, mar-apr`
pub fn months() -> impl Parser<char, Vec<Item<Month>>, Error = ParserError> + Clone {
    list_of(range_or_single(month(), range_sep().or(slash_sep())))
}

pub fn seasons() -> impl Parser<char, Vec<Item<Season>>, Error = ParserError> + Clone {
    list_of(range_or_single(season(), range_sep().or(slash_sep())))
}

/// A four-digit year from 1700 to 2099.
pub fn year4() -> impl Parser<char, String, Error = ParserError> + Clone {
    just('1')
        .chain::<char, _, _>(one_of("789"))
        .or(just('2').chain::<char, _, _>(just('0')))
        .chain::<char, _, _>(digit())
        .chain::<char, _, _>(digit())
        .collect::<String>()
        .labelled("year")
}

fn year2() -> impl Parser<char, String, Error = ParserError> + Clone {
    digit()
        .chain::<char, _, _>(digit())
        .collect::<String>()
}

fn year_end() -> impl Parser<char, String, Error = ParserError> + Clone {
    year4().or(year2())
}

fn year_dual() -> impl Parser<char, (String, String), Error = ParserError> + Clone {
    year4().then_ignore(just('/')).then(year_end())
}

/// `1985-86`, `1985-1986`; no whitespace around the dash
fn year_range() -> impl Parser<char, YearItem, Error = ParserError> + Clone {
    year4()
        .then_ignore(just('-'))
        .then(year_end())
        .map(|(start, end)| YearItem::Range {
            start: YearSpan::Year(start),
            end: YearSpan::Year(end),
        })
}

/// `1990/91-1992/93`, `1990/91 - 92`
fn year_dual_range() -> impl Parser<char, YearItem, Error = ParserError> + Clone {
    let dual_span = year_dual().map(|(start, end)| YearSpan::Dual { start, end });
    dual_span
        .clone()
        .then_ignore(range_sep())
        .then(dual_span.or(year_end().map(YearSpan::Year)))
        .map(|(start, end)| YearItem::Range { start, end })
}

/// Tried in order: dual range, range, dual, single year.
fn year_item() -> impl Parser<char, YearItem, Error = ParserError> + Clone {
    choice((
        year_dual_range(),
        year_range(),
        year_dual().map(|(start, end)| YearItem::Dual { start, end }),
        year4().map(YearItem::Single),
    ))
}

pub fn year_list() -> impl Parser<char, Vec<YearItem>, Error = ParserError> + Clone {
    year_item()
        .then(list_sep().ignore_then(year_item()).repeated())
        .map(|(first, rest)| {
            let mut years = vec![first];
            years.extend(rest);
            years
        })
}

/// Whitespace, or a colon with optional whitespace around it
fn ym_sep() -> impl Parser<char, (), Error = ParserError> + Clone {
    space().or(space0().then(just(':')).then(space0()).ignored())
}

/// Years and months in either order. Both orders produce the same fragment.
pub fn year_month() -> impl Parser<char, Fragment, Error = ParserError> + Clone {
    let year_first = year_list()
        .then_ignore(ym_sep())
        .then(months())
        .map(|(years, months)| Fragment::YearMonth { years, months });
    let month_first = months()
        .then_ignore(ym_sep())
        .then(year_list())
        .map(|(months, years)| Fragment::YearMonth { years, months });
    year_first.or(month_first).labelled("year-month")
}

/// `year 1990`, `yr. 1990-91`, `yr:1990`
pub fn explicit_years() -> impl Parser<char, Fragment, Error = ParserError> + Clone {
    let label = just("year").ignored().or(abbreviation("yr"));
    let sep = just(':').then_ignore(space0()).ignored().or(space0());
    label
        .ignore_then(sep)
        .ignore_then(year_list())
        .map(Fragment::ExplicitYears)
}

pub fn implicit_years() -> impl Parser<char, Fragment, Error = ParserError> + Clone {
    year_list().map(Fragment::ImplicitYears).labelled("years")
}

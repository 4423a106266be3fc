//! Primitive value grammars
//!
//! Grammar:
//! ```text
//! <digits>   = "0"* [1-9] [0-9]*
//! <range>    = <x> <range-sep> <x>
//! <list>     = (<range> | <x>) ("," " "* (<range> | <x>))*
//! <numlet>   = <digits> (<letter-range> | <letter>)
//! <ordinal>  = <digits> ("st" | "nd" | "rd" | "th")
//! ```

use chumsky::prelude::*;

use super::ParserError;
use crate::ast::{Item, Numlet, Value};

/// Letters that may stand alone as a label abbreviation (c, n, r, s, t, v).
///
/// A field table may only use one of these as a one-letter abbreviation.
pub const RESERVED_LETTERS: &str = "cnrstv";

pub fn is_safe_letter(c: char) -> bool {
    c.is_ascii_lowercase() && !RESERVED_LETTERS.contains(c)
}

/// One or more whitespace characters
pub(crate) fn space() -> impl Parser<char, (), Error = ParserError> + Clone {
    filter(|c: &char| c.is_whitespace())
        .repeated()
        .at_least(1)
        .ignored()
}

/// Optional whitespace
pub(crate) fn space0() -> impl Parser<char, (), Error = ParserError> + Clone {
    filter(|c: &char| c.is_whitespace()).repeated().ignored()
}

pub(crate) fn dot0() -> impl Parser<char, (), Error = ParserError> + Clone {
    just('.').or_not().ignored()
}

/// A word optionally followed by a period: `jan`, `jan.`
pub(crate) fn abbreviation(
    word: &'static str,
) -> impl Parser<char, (), Error = ParserError> + Clone {
    just(word).ignored().then_ignore(dot0())
}

/// `,` followed by optional whitespace
pub(crate) fn list_sep() -> impl Parser<char, (), Error = ParserError> + Clone {
    just(',').then_ignore(space0()).ignored()
}

/// `-` with optional whitespace on either side
pub(crate) fn range_sep() -> impl Parser<char, (), Error = ParserError> + Clone {
    space0().then(just('-')).then(space0()).ignored()
}

/// `/` with optional whitespace on either side
pub(crate) fn slash_sep() -> impl Parser<char, (), Error = ParserError> + Clone {
    space0().then(just('/')).then(space0()).ignored()
}

pub(crate) fn digit() -> impl Parser<char, char, Error = ParserError> + Clone {
    filter(|c: &char| c.is_ascii_digit())
}

/// A natural number. Leading zeros are consumed but not kept, so `007` reads
/// as `7` and a run of zeros alone is not a number.
pub fn digits() -> impl Parser<char, String, Error = ParserError> + Clone {
    just('0')
        .repeated()
        .ignore_then(
            filter(|c: &char| matches!(c, '1'..='9'))
                .chain::<char, _, _>(digit().repeated()),
        )
        .collect::<String>()
        .labelled("number")
}

pub(crate) fn letter() -> impl Parser<char, char, Error = ParserError> + Clone {
    filter(|c: &char| c.is_ascii_lowercase())
}

/// Succeeds without consuming when the next character cannot continue a
/// word: a letter, a digit or a period.
pub(crate) fn word_boundary() -> impl Parser<char, (), Error = ParserError> + Clone {
    filter(|c: &char| !(c.is_ascii_alphanumeric() || *c == '.'))
        .rewind()
        .ignored()
        .or(end())
}

/// A letter standing on its own. `v` in `v.3` or `a` in `ab` is not one.
pub(crate) fn letter_item() -> impl Parser<char, char, Error = ParserError> + Clone {
    letter().then_ignore(word_boundary())
}

/// `<item> <sep> <item>` as a range, otherwise a single `<item>`.
pub(crate) fn range_or_single<T, P, S>(
    item: P,
    sep: S,
) -> impl Parser<char, Item<T>, Error = ParserError> + Clone
where
    T: Clone,
    P: Parser<char, T, Error = ParserError> + Clone,
    S: Parser<char, (), Error = ParserError> + Clone,
{
    item.clone()
        .then_ignore(sep)
        .then(item.clone())
        .map(|(start, end)| Item::Range { start, end })
        .or(item.map(Item::Single))
}

/// A comma-separated list of components, kept in written order.
pub(crate) fn list_of<T, P>(component: P) -> impl Parser<char, Vec<T>, Error = ParserError> + Clone
where
    P: Parser<char, T, Error = ParserError> + Clone,
{
    component
        .clone()
        .then(list_sep().ignore_then(component).repeated())
        .map(|(first, rest)| {
            let mut items = Vec::with_capacity(rest.len() + 1);
            items.push(first);
            items.extend(rest);
            items
        })
}

pub(crate) fn numeric_component() -> impl Parser<char, Item<String>, Error = ParserError> + Clone
{
    range_or_single(digits(), range_sep())
}

pub(crate) fn letter_component() -> impl Parser<char, Item<char>, Error = ParserError> + Clone {
    range_or_single(letter_item(), range_sep())
}

/// `1`, `1-3`, `1, 3-5`
pub fn numerics() -> impl Parser<char, Value, Error = ParserError> + Clone {
    list_of(numeric_component()).map(Value::Numeric)
}

/// `a`, `a-c`, `a, c-d`
pub fn letters() -> impl Parser<char, Value, Error = ParserError> + Clone {
    list_of(letter_component()).map(Value::Letters)
}

/// Exactly two letters joined by a dash: `a-c`, `t-v`
pub fn letter_range() -> impl Parser<char, Item<char>, Error = ParserError> + Clone {
    letter_item()
        .then_ignore(range_sep())
        .then(letter_item())
        .map(|(start, end)| Item::Range { start, end })
}

/// `4a`, `4a-b`
pub(crate) fn numlet() -> impl Parser<char, Numlet, Error = ParserError> + Clone {
    digits()
        .then(letter_component())
        .map(|(number, letters)| Numlet { number, letters })
}

/// `4a-5b` as a range, otherwise a single numlet.
///
/// There is no list form: in `no. 5a, v.3` the `v` starts
/// a new volume label.
pub fn numlets() -> impl Parser<char, Item<Numlet>, Error = ParserError> + Clone {
    range_or_single(numlet(), range_sep())
}

fn ordinal_suffix() -> impl Parser<char, (), Error = ParserError> + Clone {
    choice((just("st"), just("nd"), just("rd"), just("th"))).ignored()
}

pub(crate) fn ordinal() -> impl Parser<char, String, Error = ParserError> + Clone {
    digits().then_ignore(ordinal_suffix())
}

/// `2nd`, `1st-3rd`, `1-3rd`. The end of a range always carries its suffix.
pub fn ordinals() -> impl Parser<char, Item<String>, Error = ParserError> + Clone {
    ordinal()
        .or(digits())
        .then_ignore(range_sep())
        .then(ordinal())
        .map(|(start, end)| Item::Range { start, end })
        .or(ordinal().map(Item::Single))
}

//! Label-value rules
//!
//! Each field is described by one [`FieldSpec`] row. A single generic builder
//! turns a row into a rule:
//!
//! ```text
//! <label-value> = (<plural> | <singular> | (<abbr1> | <abbr2> | ...) "."?)
//!                 ((":" " "* | " "*) <numerics> | (":" " "* | " "+) <letters>)
//! ```
//!
//! and the rows are folded, in declaration order, into one alternation.
//! Declaration order is the tie-break: the first field whose rule matches
//! wins, and no field is tried twice.

use chumsky::prelude::*;
use std::collections::HashMap;

use super::primitives::{dot0, is_safe_letter, letters, numerics, space, space0};
use super::{IntoShared, ParserError, SharedParser};
use crate::ast::{Field, Fragment, Value};
use crate::error::GrammarError;

/// One row of the field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub singular: &'static str,
    pub plural: &'static str,
    /// Tried in order, each optionally followed by a period
    pub abbreviations: &'static [&'static str],
}

/// The built-in field table.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        field: Field::Numbers,
        singular: "number",
        plural: "numbers",
        abbreviations: &["nos", "no", "n"],
    },
    FieldSpec {
        field: Field::Volumes,
        singular: "volume",
        plural: "volumes",
        abbreviations: &["vols", "vol", "vs", "v"],
    },
    FieldSpec {
        field: Field::Parts,
        singular: "part",
        plural: "parts",
        abbreviations: &["pts", "pt"],
    },
    FieldSpec {
        field: Field::Copies,
        singular: "copy",
        plural: "copies",
        abbreviations: &["cops", "cop", "cps", "cp", "c"],
    },
    FieldSpec {
        field: Field::Series,
        singular: "series",
        plural: "series",
        abbreviations: &["ser", "n.s", "ns"],
    },
    FieldSpec {
        field: Field::Reports,
        singular: "report",
        plural: "reports",
        abbreviations: &["repts", "rept", "rep", "r"],
    },
    FieldSpec {
        field: Field::Sections,
        singular: "section",
        plural: "sections",
        abbreviations: &["sects", "sect", "secs", "sec"],
    },
    FieldSpec {
        field: Field::Appendices,
        singular: "appendix",
        plural: "appendices",
        abbreviations: &["apps", "app"],
    },
    FieldSpec {
        field: Field::Titles,
        singular: "title",
        plural: "titles",
        abbreviations: &["ti", "t"],
    },
];

impl FieldSpec {
    /// Every spelling of this field's label, plural first.
    pub fn spellings(&self) -> impl Iterator<Item = &'static str> {
        let names = if self.plural == self.singular {
            vec![self.plural]
        } else {
            vec![self.plural, self.singular]
        };
        let abbreviations = self.abbreviations;
        names.into_iter().chain(abbreviations.iter().copied())
    }
}

/// A field table that has been checked for ambiguity.
#[derive(Debug, Clone, Copy)]
pub struct FieldTable {
    first: &'static FieldSpec,
    rest: &'static [FieldSpec],
}

impl FieldTable {
    /// Check a table before it is compiled.
    ///
    /// Shared prefixes are fine (declaration order settles them); an exact
    /// spelling claimed by two fields is not, and neither is a one-letter
    /// abbreviation that a bare letter list could swallow.
    pub fn new(fields: &'static [FieldSpec]) -> Result<Self, GrammarError> {
        let (first, rest) = fields.split_first().ok_or(GrammarError::EmptyFieldTable)?;

        let mut owners: HashMap<&'static str, Field> = HashMap::new();
        for spec in fields {
            for spelling in spec.spellings() {
                match owners.get(spelling) {
                    Some(owner) if *owner != spec.field => {
                        return Err(GrammarError::DuplicateSpelling {
                            spelling,
                            first: *owner,
                            second: spec.field,
                        });
                    }
                    Some(_) => {}
                    None => {
                        owners.insert(spelling, spec.field);
                    }
                }
            }
            for &abbreviation in spec.abbreviations {
                let mut chars = abbreviation.chars();
                if let (Some(c), None) = (chars.next(), chars.next()) {
                    if is_safe_letter(c) {
                        return Err(GrammarError::UnreservedInitial {
                            field: spec.field,
                            abbreviation,
                        });
                    }
                }
            }
        }

        Ok(Self { first, rest })
    }

    pub fn builtin() -> Result<Self, GrammarError> {
        Self::new(FIELDS)
    }

    pub fn len(&self) -> usize {
        self.rest.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static FieldSpec> {
        let (first, rest) = (self.first, self.rest);
        std::iter::once(first).chain(rest.iter())
    }
}

/// Separator then a numeric list: `:`, `: `, ` ` or nothing
pub fn numeric_value() -> impl Parser<char, Value, Error = ParserError> + Clone {
    just(':')
        .then_ignore(space0())
        .ignored()
        .or(space0())
        .ignore_then(numerics())
}

/// Separator then a letter list: `:`, `: ` or at least one space
pub fn letter_value() -> impl Parser<char, Value, Error = ParserError> + Clone {
    just(':')
        .then_ignore(space0())
        .ignored()
        .or(space())
        .ignore_then(letters())
}

/// The value part shared by labels, supplements and indexes.
pub fn label_value_tail() -> impl Parser<char, Value, Error = ParserError> + Clone {
    numeric_value().or(letter_value())
}

/// Any one spelling of a field label.
fn label(spec: &'static FieldSpec) -> SharedParser<()> {
    let names = if spec.plural == spec.singular {
        just(spec.plural).ignored().shared()
    } else {
        just(spec.plural)
            .or(just(spec.singular))
            .ignored()
            .shared()
    };
    let abbreviations = spec
        .abbreviations
        .iter()
        .map(|abbr| just(*abbr).ignored().shared())
        .reduce(|acc, next| acc.or(next).shared());

    match abbreviations {
        Some(abbreviations) => names.or(abbreviations.then_ignore(dot0())).shared(),
        None => names,
    }
}

/// The rule for one field.
pub fn label_value(spec: &'static FieldSpec) -> SharedParser<Fragment> {
    let field = spec.field;
    label(spec)
        .ignore_then(label_value_tail())
        .map(move |value| Fragment::Labeled { field, value })
        .labelled(field.canonical_name())
        .shared()
}

/// Fold the whole table into one ordered alternation.
pub fn label_values(table: &FieldTable) -> SharedParser<Fragment> {
    table
        .rest
        .iter()
        .fold(label_value(table.first), |acc, spec| {
            acc.or(label_value(spec)).shared()
        })
}

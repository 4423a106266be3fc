//! Error types

use crate::ast::Field;
use chumsky::error::Simple;
use thiserror::Error;

/// A caption that no alternative of the grammar consumed completely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no rule matched caption {normalized:?} at position {position}{}", expected_suffix(.expected))]
pub struct ParseFailure {
    /// The caption after normalization, which is what the grammar saw
    pub normalized: String,
    /// Character offset of the furthest point any alternative reached
    pub position: usize,
    /// Rule labels and characters still acceptable at `position`
    pub expected: Vec<String>,
}

fn expected_suffix(expected: &[String]) -> String {
    if expected.is_empty() {
        String::new()
    } else {
        format!(", expected one of: {}", expected.join(", "))
    }
}

impl ParseFailure {
    /// Collapse chumsky's error list into the furthest failure.
    pub(crate) fn from_errors(normalized: &str, errors: Vec<Simple<char>>) -> Self {
        let position = errors
            .iter()
            .map(|err| err.span().start)
            .max()
            .unwrap_or(0);

        let mut expected: Vec<String> = errors
            .iter()
            .filter(|err| err.span().start == position)
            .flat_map(|err| {
                let label = err.label().map(str::to_string);
                let tokens = err.expected().map(|token| match token {
                    Some(c) => format!("{c:?}"),
                    None => "end of input".to_string(),
                });
                label.into_iter().chain(tokens).collect::<Vec<_>>()
            })
            .collect();
        expected.sort();
        expected.dedup();

        Self {
            normalized: normalized.to_string(),
            position,
            expected,
        }
    }
}

/// A field table that cannot be compiled into an unambiguous grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("field table is empty")]
    EmptyFieldTable,
    #[error("spelling {spelling:?} is used by both {first} and {second}")]
    DuplicateSpelling {
        spelling: &'static str,
        first: Field,
        second: Field,
    },
    #[error("one-letter abbreviation {abbreviation:?} for {field} is not a reserved letter")]
    UnreservedInitial {
        field: Field,
        abbreviation: &'static str,
    },
}

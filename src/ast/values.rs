//! Primitive values
//!
//! Numbers are kept as the digit text that was read (leading zeros dropped),
//! letters as single `char`s. Nothing here is interpreted beyond its shape.

use serde::Serialize;

/// A single value or an inclusive range of two values of the same kind.
///
/// Both ends of a range always share the type parameter, so a range can never
/// mix, say, a number with a letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Item<T> {
    Single(T),
    Range { start: T, end: T },
}

impl<T> Item<T> {
    pub fn single(value: impl Into<T>) -> Self {
        Item::Single(value.into())
    }

    pub fn range(start: impl Into<T>, end: impl Into<T>) -> Self {
        Item::Range {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Item::Range { .. })
    }
}

/// The value attached to a label, a supplement or an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// `12`, `1-3`, `4, 6-8`
    Numeric(Vec<Item<String>>),
    /// `a`, `a-c`, `a, d`
    Letters(Vec<Item<char>>),
}

impl Value {
    /// Convenience for a numeric value holding a single number.
    pub fn number(digits: &str) -> Self {
        Value::Numeric(vec![Item::single(digits)])
    }

    /// Number of list entries, counting a range as one entry.
    pub fn len(&self) -> usize {
        match self {
            Value::Numeric(items) => items.len(),
            Value::Letters(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Digits immediately followed by a letter or letter range: `4a`, `4a-b`.
///
/// In `4a-b` the `b` reuses the `4`, so it is stored as a letter range on a
/// single numlet rather than as a numlet range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Numlet {
    pub number: String,
    pub letters: Item<char>,
}

impl Numlet {
    pub fn new(number: impl Into<String>, letters: Item<char>) -> Self {
        Self {
            number: number.into(),
            letters,
        }
    }
}

//! Chronology values: years, months and seasons

use serde::Serialize;
use std::fmt;

/// One entry of a year list.
///
/// Years are kept as written. The end of a dual or a range may be an
/// abbreviated two-digit year (`1990/91`, `1985-86`); it is never expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YearItem {
    /// `1990`
    Single(String),
    /// `1990/91`
    Dual { start: String, end: String },
    /// `1985-86`, `1990/91-1992/93`
    Range { start: YearSpan, end: YearSpan },
}

impl YearItem {
    pub fn single(year: &str) -> Self {
        YearItem::Single(year.to_string())
    }

    pub fn dual(start: &str, end: &str) -> Self {
        YearItem::Dual {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    pub fn range(start: YearSpan, end: YearSpan) -> Self {
        YearItem::Range { start, end }
    }
}

/// An endpoint of a year range: a plain year or a dual year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YearSpan {
    Year(String),
    Dual { start: String, end: String },
}

impl YearSpan {
    pub fn year(year: &str) -> Self {
        YearSpan::Year(year.to_string())
    }

    pub fn dual(start: &str, end: &str) -> Self {
        YearSpan::Dual {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Full lowercase spelling, as accepted by the grammar.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
            Month::July => "july",
            Month::August => "august",
            Month::September => "september",
            Month::October => "october",
            Month::November => "november",
            Month::December => "december",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    pub fn name(self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Fragments: the semantically tagged units a caption is made of
//!
//! Examples:
//! - `v.12` -> [`Fragment::Labeled`] with [`Field::Volumes`]
//! - `1990/91` -> [`Fragment::ImplicitYears`]
//! - `jan./feb. 1999` -> [`Fragment::YearMonth`]
//! - `suppl.` -> [`Fragment::Supplement`] without a value

use super::temporal::{Month, Season, YearItem};
use super::values::{Item, Numlet, Value};
use serde::Serialize;
use std::fmt;

/// Canonical field names for label-value pairs.
///
/// Every spelling of a label ("v", "vol.", "volume", ...) collapses onto one
/// of these. The canonical name is the plural form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    #[serde(rename = "numbers")]
    Numbers,
    #[serde(rename = "volumes")]
    Volumes,
    #[serde(rename = "parts")]
    Parts,
    #[serde(rename = "copies")]
    Copies,
    #[serde(rename = "series")]
    Series,
    #[serde(rename = "reports")]
    Reports,
    #[serde(rename = "sections")]
    Sections,
    #[serde(rename = "appendices")]
    Appendices,
    #[serde(rename = "titles")]
    Titles,
}

impl Field {
    pub fn canonical_name(self) -> &'static str {
        match self {
            Field::Numbers => "numbers",
            Field::Volumes => "volumes",
            Field::Parts => "parts",
            Field::Copies => "copies",
            Field::Series => "series",
            Field::Reports => "reports",
            Field::Sections => "sections",
            Field::Appendices => "appendices",
            Field::Titles => "titles",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// One recognized unit of a caption. Exactly one tag per fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Fragment {
    /// `v.12`, `no. 3-4`, `pt a`
    Labeled { field: Field, value: Value },
    /// `yr. 1990`
    ExplicitYears(Vec<YearItem>),
    /// `1990`, `1985-86` with no leading label
    ImplicitYears(Vec<YearItem>),
    /// `1999 jan.` or `jan. 1999`; the written order is not kept
    YearMonth {
        years: Vec<YearItem>,
        months: Vec<Item<Month>>,
    },
    Months(Vec<Item<Month>>),
    Seasons(Vec<Item<Season>>),
    NewSeries,
    Incomplete,
    Supplement(Option<Value>),
    Index(Option<Value>),
    /// `2nd`, `1st-3rd`, `1-3rd`
    Ordinals(Item<String>),
    AnnualSummary,
    Revision,
    /// `4a`, `4a-b`, `4a-5b`
    Numlets(Item<Numlet>),
    /// A bare list with no label to say what it counts
    Unknown(Value),
}

impl Fragment {
    pub fn labeled(field: Field, value: Value) -> Self {
        Fragment::Labeled { field, value }
    }

    /// Short tag naming the fragment kind, used by the tag serializer and in
    /// log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Fragment::Labeled { field, .. } => field.canonical_name(),
            Fragment::ExplicitYears(_) => "explicit-years",
            Fragment::ImplicitYears(_) => "implicit-years",
            Fragment::YearMonth { .. } => "year-month",
            Fragment::Months(_) => "months",
            Fragment::Seasons(_) => "seasons",
            Fragment::NewSeries => "new-series",
            Fragment::Incomplete => "incomplete",
            Fragment::Supplement(_) => "supplement",
            Fragment::Index(_) => "index",
            Fragment::Ordinals(_) => "ordinals",
            Fragment::AnnualSummary => "annual-summary",
            Fragment::Revision => "revision",
            Fragment::Numlets(_) => "numlets",
            Fragment::Unknown(_) => "unknown-list",
        }
    }
}

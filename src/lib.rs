//! # enumchron
//!
//! A parser for the enumeration/chronology captions found on serial
//! holdings: `v.12 no.3`, `1990/91`, `jan./feb. 1999`, `v.1(1990)v.2(1991)`.
//!
//! Captions are normalized (see [`normalize`]) and then matched by an
//! ordered-choice grammar built with chumsky (see [`grammar`]). The result
//! is a [`CaptionTree`] of typed fragments.
//!
//! ```text
//! "V.12 no.3"  ->  Sequence[ volumes: 12, numbers: 3 ]
//! "(1985-86)"  ->  Group( Fragment(implicit-years: 1985-86) )
//! ```
//!
//! Most callers want [`parse`]. Build a [`CaptionParser`] directly to reuse a
//! grammar explicitly or to supply a different field table.

pub mod ast;
pub mod error;
pub mod formats;
pub mod grammar;
pub mod normalize;
pub mod parser;
pub mod settings;

pub use ast::{
    CaptionTree, Field, Fragment, Item, Month, Numlet, Season, Value, YearItem, YearSpan,
};
pub use error::{GrammarError, ParseFailure};
pub use formats::{CaptionRecord, FormatError, OutputFormat};
pub use normalize::normalize;
pub use parser::{parse, CaptionParser};

//! Parse tree for enumeration/chronology captions
//!
//! Every node is an immutable value produced by the grammar. Children are kept
//! in reading order; nothing is sorted or canonicalised beyond mapping label
//! spellings onto a [`Field`].
//!
//! The tree is layered, leaves first:
//! - [`values`]: numbers, letters, ranges and lists of them, numlets
//! - [`temporal`]: years, months, seasons
//! - [`fragment`]: one tagged unit ("volume 12", "1990/91", "supplement")
//! - [`caption`]: sequences, parenthesized groups and sets of fragments

pub mod caption;
pub mod fragment;
pub mod temporal;
pub mod values;

pub use caption::CaptionTree;
pub use fragment::{Field, Fragment};
pub use temporal::{Month, Season, YearItem, YearSpan};
pub use values::{Item, Numlet, Value};

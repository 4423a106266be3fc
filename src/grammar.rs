//! The caption grammar
//!
//! Built from chumsky combinators over `char`. Alternation is strictly
//! ordered: `a.or(b)` commits to `a` as soon as it matches, and a repetition
//! never gives back what it consumed. All precedence between fragment kinds
//! comes from the order alternatives are listed in, never from longest-match.
//!
//! Modules, leaves first:
//! - [`primitives`]: separators, digits, letters, ranges, lists, numlets, ordinals
//! - [`temporal`]: years, months, seasons and year/month pairings
//! - [`labels`]: the field table and the label-value rule built from it
//! - [`auxiliary`]: supplement, index and marker phrases, SuDoc numbers
//! - [`assembler`]: fragments, sequences, groups and the entry rule

use std::sync::Arc;

use chumsky::error::Simple;
use chumsky::Parser;

pub mod assembler;
pub mod auxiliary;
pub mod labels;
pub mod primitives;
pub mod temporal;

/// Type alias for parser error
pub type ParserError = Simple<char>;

/// A type-erased parser that can be shared between threads.
///
/// Used wherever a rule is folded from a table at construction time. Unlike
/// chumsky's `Rc`-based `BoxedParser` it is `Send + Sync`.
pub type SharedParser<O> = Arc<dyn Parser<char, O, Error = ParserError> + Send + Sync>;

/// Erase a parser's type into a [`SharedParser`].
pub trait IntoShared<O>: Parser<char, O, Error = ParserError> + Sized + Send + Sync + 'static {
    fn shared(self) -> SharedParser<O> {
        Arc::new(self)
    }
}

impl<O, P> IntoShared<O> for P where
    P: Parser<char, O, Error = ParserError> + Send + Sync + 'static
{
}

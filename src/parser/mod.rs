//! Reading formulas from strings.
//!
//! Parsing is two passes: the [tokenizer] classifies characters into tokens, and the
//! [parser](syntax::Parser) builds a [Formula](crate::structures::formula::Formula) from the
//! token sequence by recursive descent.
//!
//! ```rust
//! # use wff::parser::parse;
//! let formula = parse("(a+b)&~c").unwrap();
//!
//! assert_eq!(formula.variables(), vec!["a", "b", "c"]);
//! assert_eq!(formula.to_string(), "(a+b)&~c");
//! ```
//!
//! Precedence, tightest first: `~`, `&`, `+`, `>`, `=`.
//! So `a+b&c` is `a+(b&c)` and `a&b+c` is `(a&b)+c`.
//!
//! Failures are [LexError](crate::types::err::LexError)s (an unrecognized character) or
//! [ParseError](crate::types::err::ParseError)s (a malformed token sequence), surfaced to the
//! caller with nothing retried.

pub mod syntax;
pub mod tokenizer;

use crate::{
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self},
};

/// Parses a formula from its string form.
pub fn parse(text: &str) -> Result<Formula, err::ErrorKind> {
    log::trace!(target: targets::PARSER, "Parsing {text:?}");
    let tokens = tokenizer::tokenize(text)?;
    syntax::Parser::new(tokens).parse()
}

impl std::str::FromStr for Formula {
    type Err = err::ErrorKind;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse(text)
    }
}

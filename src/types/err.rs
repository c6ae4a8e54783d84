//! Error types used in the library.
//!
//! - Every error is a caller-input problem, reported at the call which detected it.
//!   The library is pure, so there are no transient failure modes and nothing is retried.
//! - Names of the error enums overlap with the corresponding stage of the library.
//!   As such, throughout the library `err::{self}` is often used to prefix use of the types with `err::`.

/// The general error enum, wrapping stage-specific errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Lex(LexError),
    Parse(ParseError),
    Evaluation(EvaluationError),
    Proof(ProofError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "lex error: {e:?}"),
            Self::Parse(e) => write!(f, "parse error: {e:?}"),
            Self::Evaluation(e) => write!(f, "evaluation error: {e:?}"),
            Self::Proof(e) => write!(f, "proof error: {e:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors noted while scanning a formula string into tokens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LexError {
    /// A character which is not part of the formula language.
    ///
    /// `position` is the byte offset of the character in the source string.
    UnrecognizedCharacter { character: char, position: usize },
}

impl From<LexError> for ErrorKind {
    fn from(e: LexError) -> Self {
        ErrorKind::Lex(e)
    }
}

/// Errors noted while building a formula from a token sequence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty formula was required.
    Empty,

    /// The token sequence ended where an operand was required.
    UnexpectedEnd,

    /// A right parenthesis was required but not found, at the given token index.
    UnmatchedParenthesis(usize),

    /// A token which cannot begin a (sub)formula, at the given token index.
    UnexpectedToken(usize),

    /// Tokens remain after a complete formula, starting at the given token index.
    TrailingTokens(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors noted while evaluating a formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// A variable without a value on an assignment promised to be total.
    ///
    /// Only the total-assignment contract ([value_on](crate::structures::formula::Formula::value_on)) produces this.
    /// Partial evaluation never fails on a missing variable, and instead returns a sub-table.
    UnboundVariable(String),
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

/// Errors noted during proof search.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProofError {
    /// The search exhausted its step limit without deriving the conclusion.
    ///
    /// The rule set is incomplete, so this does not establish that the conclusion fails to follow.
    /// For a semantic verdict, see [infer](crate::procedures::infer::infer).
    Underivable,
}

impl From<ProofError> for ErrorKind {
    fn from(e: ProofError) -> Self {
        ErrorKind::Proof(e)
    }
}

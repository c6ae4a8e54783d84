//! The parser: a token sequence to a formula tree.
//!
//! A recursive-descent walk over the token sequence, one method per precedence level:
//!
//! ```text
//! formula       := biconditional
//! biconditional := implication ('=' implication)*
//! implication   := disjunction ('>' disjunction)*
//! disjunction   := conjunction ('+' conjunction)*
//! conjunction   := negation (('&'|'*') negation)*
//! negation      := '~' negation | primary
//! primary       := VARIABLE | CONSTANT | '(' formula ')'
//! ```
//!
//! Every binary level chains to the left, so `a>b>c` is `(a>b)>c` --- note this differs from the
//! right-associative convention common for implication, and is pinned by a dedicated test.

use crate::{
    parser::tokenizer::{OpKind, Token},
    structures::formula::Formula,
    types::err::{self},
};

/// A cursor over a token sequence, consumed left-to-right.
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, index: 0 }
    }

    /// Parses the full token sequence as a single formula.
    ///
    /// Trailing tokens after a complete formula are an error, as is an empty sequence.
    pub fn parse(mut self) -> Result<Formula, err::ErrorKind> {
        if self.tokens.is_empty() {
            return Err(err::ErrorKind::from(err::ParseError::Empty));
        }

        let formula = self.formula()?;

        match self.peek() {
            None => Ok(formula),
            Some(_) => Err(err::ErrorKind::from(err::ParseError::TrailingTokens(
                self.index,
            ))),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    /// Consumes the operator and returns true when the next token is the given operator.
    fn eat_op(&mut self, kind: OpKind) -> bool {
        match self.peek() {
            Some(Token::Op(found)) if *found == kind => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    fn formula(&mut self) -> Result<Formula, err::ErrorKind> {
        self.biconditional()
    }

    fn biconditional(&mut self) -> Result<Formula, err::ErrorKind> {
        let mut formula = self.implication()?;
        while self.eat_op(OpKind::Iff) {
            let right = self.implication()?;
            formula = Formula::iff(formula, right);
        }
        Ok(formula)
    }

    fn implication(&mut self) -> Result<Formula, err::ErrorKind> {
        let mut formula = self.disjunction()?;
        while self.eat_op(OpKind::Implies) {
            let right = self.disjunction()?;
            formula = Formula::implies(formula, right);
        }
        Ok(formula)
    }

    fn disjunction(&mut self) -> Result<Formula, err::ErrorKind> {
        let mut formula = self.conjunction()?;
        while self.eat_op(OpKind::Or) {
            let right = self.conjunction()?;
            formula = Formula::or(formula, right);
        }
        Ok(formula)
    }

    fn conjunction(&mut self) -> Result<Formula, err::ErrorKind> {
        let mut formula = self.negation()?;
        while self.eat_op(OpKind::And) {
            let right = self.negation()?;
            formula = Formula::and(formula, right);
        }
        Ok(formula)
    }

    fn negation(&mut self) -> Result<Formula, err::ErrorKind> {
        match self.eat_op(OpKind::Not) {
            true => Ok(Formula::not(self.negation()?)),
            false => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Formula, err::ErrorKind> {
        match self.peek() {
            None => Err(err::ErrorKind::from(err::ParseError::UnexpectedEnd)),

            Some(Token::Variable(name)) => {
                let formula = Formula::variable(name.clone());
                self.advance();
                Ok(formula)
            }

            Some(Token::Constant(value)) => {
                let formula = Formula::constant(*value);
                self.advance();
                Ok(formula)
            }

            Some(Token::LeftParen) => {
                self.advance();
                let formula = self.formula()?;
                match self.peek() {
                    Some(Token::RightParen) => {
                        self.advance();
                        Ok(formula)
                    }
                    _ => Err(err::ErrorKind::from(err::ParseError::UnmatchedParenthesis(
                        self.index,
                    ))),
                }
            }

            Some(_) => Err(err::ErrorKind::from(err::ParseError::UnexpectedToken(
                self.index,
            ))),
        }
    }
}

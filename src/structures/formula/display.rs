//! Implementation of [Display](std::fmt::Display) for formulas.
//!
//! The rendering is the wire format read by the [parser](crate::parser): operators `~ & + > =`,
//! parentheses, and identifier variable names.
//! Parentheses are written only where precedence or associativity requires them, so a formula
//! parsed and re-rendered may be shorter than its source, though always parses to an equal tree.

use std::fmt;

use super::Formula;

/// Binding strength, tighter binds are greater.
/// Binary connectives are left-associative, so a right child at equal strength needs parentheses.
fn strength(formula: &Formula) -> u8 {
    match formula {
        Formula::Iff(_, _) => 1,
        Formula::Implies(_, _) => 2,
        Formula::Or(_, _) => 3,
        Formula::And(_, _) => 4,
        Formula::Not(_) => 5,
        Formula::Constant(_) | Formula::Variable(_) => 6,
    }
}

fn write_child(f: &mut fmt::Formatter<'_>, child: &Formula, parens: bool) -> fmt::Result {
    match parens {
        true => write!(f, "({child})"),
        false => write!(f, "{child}"),
    }
}

fn write_binary(
    f: &mut fmt::Formatter<'_>,
    parent: &Formula,
    left: &Formula,
    symbol: char,
    right: &Formula,
) -> fmt::Result {
    write_child(f, left, strength(left) < strength(parent))?;
    write!(f, "{symbol}")?;
    write_child(f, right, strength(right) <= strength(parent))
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Constant(true) => write!(f, "True"),
            Formula::Constant(false) => write!(f, "False"),

            Formula::Variable(name) => write!(f, "{name}"),

            Formula::Not(child) => {
                write!(f, "~")?;
                write_child(f, child, strength(child.as_ref()) < strength(self))
            }

            Formula::And(left, right) => write_binary(f, self, left, '&', right),
            Formula::Or(left, right) => write_binary(f, self, left, '+', right),
            Formula::Implies(left, right) => write_binary(f, self, left, '>', right),
            Formula::Iff(left, right) => write_binary(f, self, left, '=', right),
        }
    }
}

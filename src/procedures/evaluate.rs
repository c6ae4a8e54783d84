//! Evaluation of a formula on an assignment, total or partial.
//!
//! Two contracts are available:
//!
//! - [value_on](Formula::value_on) promises the assignment is total for the formula, and fails
//!   with [UnboundVariable](crate::types::err::EvaluationError::UnboundVariable) otherwise.
//! - [evaluate](Formula::evaluate) accepts any assignment: names with a binding are fixed, and
//!   the unbound remainder is enumerated into a sub-table, one row per combination.
//!   A total assignment collapses the sub-table to a single boolean, so the result is the tagged
//!   [Evaluation] over the two shapes.
//!
//! ```rust
//! # use wff::parser::parse;
//! # use wff::procedures::evaluate::Evaluation;
//! # use wff::structures::assignment::CAssignment;
//! let formula = parse("a&b").unwrap();
//! let partial = CAssignment::from([("a".to_string(), true)]);
//!
//! match formula.evaluate(&partial) {
//!     Evaluation::Value(_) => unreachable!("b is unbound"),
//!     Evaluation::Table(table) => {
//!         assert_eq!(table.variables(), ["b".to_string()]);
//!         assert_eq!(table.len(), 2);
//!     }
//! }
//! ```
//!
//! [reduce](Formula::reduce) is the syntactic counterpart: bound variables are substituted and
//! constants folded, leaving the residual formula over the unbound names.

use crate::{
    misc::log::targets::{self},
    structures::{
        assignment::{Assignment, CAssignment},
        formula::Formula,
        table::{Row, TruthTable},
    },
    types::err::{self},
};

/// The result of evaluating a formula on an assignment which may be partial.
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluation {
    /// The value of the formula, when the assignment was total.
    Value(bool),

    /// The sub-table over the unbound variables, when the assignment was partial.
    Table(TruthTable),
}

/// A row assignment layered over the bound variables of an outer assignment.
struct Merged<'a, A: Assignment> {
    row: &'a CAssignment,
    bound: &'a A,
}

impl<A: Assignment> Assignment for Merged<'_, A> {
    fn value_of(&self, name: &str) -> Option<bool> {
        match self.row.value_of(name) {
            Some(value) => Some(value),
            None => self.bound.value_of(name),
        }
    }

    fn bound_names(&self) -> impl Iterator<Item = &str> {
        self.row.bound_names().chain(self.bound.bound_names())
    }

    fn bound_count(&self) -> usize {
        self.row.bound_count() + self.bound.bound_count()
    }
}

impl Formula {
    /// The value of the formula on a total assignment.
    ///
    /// Every variable of the formula must be bound, including variables a lazy evaluation could
    /// skip --- a partial assignment is an
    /// [UnboundVariable](crate::types::err::EvaluationError::UnboundVariable) error, never a
    /// silent default.
    pub fn value_on(&self, assignment: &impl Assignment) -> Result<bool, err::ErrorKind> {
        for name in self.variables() {
            if assignment.value_of(&name).is_none() {
                return Err(err::ErrorKind::from(
                    err::EvaluationError::UnboundVariable(name),
                ));
            }
        }
        self.value_rec(assignment)
    }

    // Recursive reduction to a boolean, with the usual short-circuits.
    // The caller has checked the assignment is total, so the variable arm cannot fail here,
    // though the error is propagated rather than assumed away.
    fn value_rec(&self, assignment: &impl Assignment) -> Result<bool, err::ErrorKind> {
        match self {
            Formula::Constant(value) => Ok(*value),

            Formula::Variable(name) => match assignment.value_of(name) {
                Some(value) => Ok(value),
                None => Err(err::ErrorKind::from(
                    err::EvaluationError::UnboundVariable(name.clone()),
                )),
            },

            Formula::Not(child) => Ok(!child.value_rec(assignment)?),

            Formula::And(left, right) => match left.value_rec(assignment)? {
                false => Ok(false),
                true => right.value_rec(assignment),
            },

            Formula::Or(left, right) => match left.value_rec(assignment)? {
                true => Ok(true),
                false => right.value_rec(assignment),
            },

            Formula::Implies(antecedent, consequent) => match antecedent.value_rec(assignment)? {
                false => Ok(true),
                true => consequent.value_rec(assignment),
            },

            Formula::Iff(left, right) => {
                Ok(left.value_rec(assignment)? == right.value_rec(assignment)?)
            }
        }
    }

    /// Evaluates the formula on an assignment which may be partial.
    ///
    /// The variables without a binding are enumerated in first-occurrence order, so the returned
    /// sub-table lists every combination of values for the unbound remainder together with the
    /// outcome on each.
    /// Rows are keyed by the unbound variables alone; the bound values are fixed, not repeated.
    pub fn evaluate(&self, assignment: &impl Assignment) -> Evaluation {
        let unbound = self
            .variables()
            .into_iter()
            .filter(|name| assignment.value_of(name).is_none())
            .collect::<Vec<_>>();

        log::trace!(target: targets::EVALUATION, "Evaluating {self} with {} unbound", unbound.len());

        let mut rows = self.enumerate_rows(&unbound, assignment);

        match unbound.is_empty() {
            true => match rows.pop() {
                Some((_, value)) => Evaluation::Value(value),
                // A table over no variables has exactly one row.
                None => unreachable!(),
            },

            false => Evaluation::Table(TruthTable::new(unbound, rows)),
        }
    }

    /// The truth table of the formula over its free variables.
    ///
    /// 2ᵏ rows for *k* distinct variables, in the canonical all-`true`-first order, with the last
    /// variable the fastest-changing.
    pub fn truth_table(&self) -> TruthTable {
        let variables = self.variables();
        log::trace!(target: targets::TABLE, "Enumerating 2^{} rows for {self}", variables.len());
        let rows = self.enumerate_rows(&variables, &CAssignment::default());
        TruthTable::new(variables, rows)
    }

    // One row per combination of values for `variables`, layered over `bound`.
    // The counter runs from all-true to all-false, with the last variable the fastest-changing
    // bit, fixing the canonical row order.
    fn enumerate_rows(&self, variables: &[String], bound: &impl Assignment) -> Vec<Row> {
        let row_count = 1_usize << variables.len();
        let mut rows = Vec::with_capacity(row_count);

        for row_index in 0..row_count {
            let mut row_assignment = CAssignment::default();
            for (position, name) in variables.iter().enumerate() {
                let bit = (row_index >> (variables.len() - 1 - position)) & 1;
                row_assignment.insert(name.clone(), bit == 0);
            }

            let merged = Merged {
                row: &row_assignment,
                bound,
            };

            let value = match self.value_rec(&merged) {
                Ok(value) => value,
                // The merged assignment binds every variable of the formula.
                Err(_) => unreachable!(),
            };

            rows.push((row_assignment, value));
        }

        rows
    }

    /// The residual formula after substituting the bound variables and folding constants.
    ///
    /// On a total assignment the residual is a constant; on a partial assignment the residual
    /// mentions exactly the unbound variables which still matter.
    /// Conjunction and disjunction absorb a constant child (`True&x` is `x`, `True+x` is `True`),
    /// an implication with a false antecedent or true consequent folds to `True`, and a
    /// biconditional with a constant child folds to the other child or its negation.
    pub fn reduce(&self, assignment: &impl Assignment) -> Formula {
        match self {
            Formula::Constant(value) => Formula::Constant(*value),

            Formula::Variable(name) => match assignment.value_of(name) {
                Some(value) => Formula::Constant(value),
                None => Formula::Variable(name.clone()),
            },

            Formula::Not(child) => match child.reduce(assignment) {
                Formula::Constant(value) => Formula::Constant(!value),
                residual => Formula::not(residual),
            },

            Formula::And(left, right) => {
                match (left.reduce(assignment), right.reduce(assignment)) {
                    (Formula::Constant(false), _) | (_, Formula::Constant(false)) => {
                        Formula::Constant(false)
                    }
                    (Formula::Constant(true), residual) | (residual, Formula::Constant(true)) => {
                        residual
                    }
                    (left, right) => Formula::and(left, right),
                }
            }

            Formula::Or(left, right) => {
                match (left.reduce(assignment), right.reduce(assignment)) {
                    (Formula::Constant(true), _) | (_, Formula::Constant(true)) => {
                        Formula::Constant(true)
                    }
                    (Formula::Constant(false), residual) | (residual, Formula::Constant(false)) => {
                        residual
                    }
                    (left, right) => Formula::or(left, right),
                }
            }

            Formula::Implies(antecedent, consequent) => {
                match (antecedent.reduce(assignment), consequent.reduce(assignment)) {
                    (Formula::Constant(false), _) | (_, Formula::Constant(true)) => {
                        Formula::Constant(true)
                    }
                    (Formula::Constant(true), residual) => residual,
                    (residual, Formula::Constant(false)) => Formula::not(residual),
                    (antecedent, consequent) => Formula::implies(antecedent, consequent),
                }
            }

            Formula::Iff(left, right) => {
                match (left.reduce(assignment), right.reduce(assignment)) {
                    (Formula::Constant(left), Formula::Constant(right)) => {
                        Formula::Constant(left == right)
                    }
                    (Formula::Constant(true), residual) | (residual, Formula::Constant(true)) => {
                        residual
                    }
                    (Formula::Constant(false), residual) | (residual, Formula::Constant(false)) => {
                        Formula::not(residual)
                    }
                    (left, right) => Formula::iff(left, right),
                }
            }
        }
    }
}

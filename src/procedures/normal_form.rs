//! Synthesis of disjunctive and conjunctive normal forms from the truth table.
//!
//! The DNF is the sum of minterms: one conjunction per true row, each literal matching the row's
//! value for its variable.
//! The CNF is the product of maxterms: one disjunction per false row, each literal the one which
//! would avoid that row --- so polarities are swapped relative to the row.
//! Literals within a clause follow the table's variable order.
//!
//! ```rust
//! # use wff::parser::parse;
//! # use wff::procedures::normal_form::Form;
//! let formula = parse("a=b").unwrap();
//!
//! assert_eq!(formula.normal_form(Form::DNF).to_string(), "a&b+~a&~b");
//! assert_eq!(formula.normal_form(Form::CNF).to_string(), "(~a+b)&(a+~b)");
//! ```
//!
//! A formula with no row on the relevant side collapses to a constant: the DNF of a contradiction
//! is `False` and the CNF of a tautology is `True`.
//!
//! The result is derived fresh on each call and is correct but not minimal --- no
//! Quine–McCluskey-style reduction is applied.

use crate::{
    misc::log::targets::{self},
    structures::{assignment::Assignment, formula::Formula},
};

/// A normal form: OR-of-ANDs or AND-of-ORs.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Form {
    /// Disjunctive normal form.
    DNF,

    /// Conjunctive normal form.
    CNF,
}

impl std::fmt::Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DNF => write!(f, "DNF"),
            Self::CNF => write!(f, "CNF"),
        }
    }
}

impl Formula {
    /// A semantically equivalent formula in the given normal form.
    ///
    /// The source formula is unchanged; equivalence is truth-table identity, covered by the
    /// round-trip tests.
    pub fn normal_form(&self, form: Form) -> Formula {
        let table = self.truth_table();
        let keep = matches!(form, Form::DNF);

        log::trace!(target: targets::NORMAL_FORM, "{form} from {} rows of {self}", table.len());

        let mut clauses = Vec::default();

        for (row_assignment, value) in table.rows() {
            if *value != keep {
                continue;
            }

            let literals = table.variables().iter().map(|name| {
                let variable = Formula::variable(name.clone());
                // Some for every table variable, by construction of the rows.
                let row_value = row_assignment.value_of(name).unwrap_or_default();
                match row_value == keep {
                    true => variable,
                    false => Formula::not(variable),
                }
            });

            let clause = match form {
                Form::DNF => Formula::conjoin(literals),
                Form::CNF => Formula::disjoin(literals),
            };

            clauses.push(clause);
        }

        match form {
            Form::DNF => Formula::disjoin(clauses),
            Form::CNF => Formula::conjoin(clauses),
        }
    }
}

//! Formulas, aka. well-formed propositional expressions over variables and connectives.
//!
//! The representation is a tree: each composite node exclusively owns its children, there is no
//! sharing and there are no cycles.
//! A formula is built once --- by [parse](crate::parser::parse) or through the constructors here
//! --- and never mutated afterwards.
//!
//! ```rust
//! # use wff::structures::formula::Formula;
//! let formula = Formula::implies(
//!     Formula::variable("p"),
//!     Formula::or(Formula::variable("q"), Formula::constant(false)),
//! );
//!
//! assert_eq!(formula.to_string(), "p>q+False");
//! assert_eq!(formula.variables(), vec!["p".to_string(), "q".to_string()]);
//! ```
//!
//! Equality and hashing are structural.
//! In particular, structural equality is used to index derived lines during
//! [proof](crate::proof) search, while semantic comparisons go through truth tables.

mod display;

/// A well-formed propositional formula.
///
/// Variable names are non-empty identifiers matching `[A-Za-z][A-Za-z0-9]*`, with the two
/// identifiers `True` and `False` reserved for the constants.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Formula {
    /// A boolean constant.
    Constant(bool),

    /// A propositional variable, aka. an 'atom'.
    Variable(String),

    /// Negation of the child.
    Not(Box<Formula>),

    /// Conjunction, true when both children are true.
    And(Box<Formula>, Box<Formula>),

    /// Disjunction, true when either child is true.
    Or(Box<Formula>, Box<Formula>),

    /// Material implication of the consequent (right) by the antecedent (left).
    Implies(Box<Formula>, Box<Formula>),

    /// Biconditional, true when the children agree.
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// A constant formula.
    pub fn constant(value: bool) -> Self {
        Formula::Constant(value)
    }

    /// A variable with the given name.
    pub fn variable(name: impl Into<String>) -> Self {
        Formula::Variable(name.into())
    }

    /// The negation of a formula.
    pub fn not(formula: Formula) -> Self {
        Formula::Not(Box::new(formula))
    }

    /// The conjunction of two formulas.
    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    /// The disjunction of two formulas.
    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    /// The implication of `consequent` by `antecedent`.
    pub fn implies(antecedent: Formula, consequent: Formula) -> Self {
        Formula::Implies(Box::new(antecedent), Box::new(consequent))
    }

    /// The biconditional of two formulas.
    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    /// The conjunction of a sequence of formulas, left-chained.
    ///
    /// The empty conjunction is the constant `True` --- so, e.g., entailment from no hypotheses
    /// is truth on every assignment.
    pub fn conjoin(formulas: impl IntoIterator<Item = Formula>) -> Self {
        let mut formulas = formulas.into_iter();
        match formulas.next() {
            None => Formula::Constant(true),
            Some(first) => formulas.fold(first, Formula::and),
        }
    }

    /// The disjunction of a sequence of formulas, left-chained.
    ///
    /// The empty disjunction is the constant `False`, dual to [conjoin](Formula::conjoin).
    pub fn disjoin(formulas: impl IntoIterator<Item = Formula>) -> Self {
        let mut formulas = formulas.into_iter();
        match formulas.next() {
            None => Formula::Constant(false),
            Some(first) => formulas.fold(first, Formula::or),
        }
    }

    /// The distinct variable names of the formula, in first-occurrence order under a depth-first,
    /// left-to-right traversal.
    ///
    /// This order fixes the columns of the formula's [truth table](crate::structures::table).
    pub fn variables(&self) -> Vec<String> {
        let mut names = Vec::default();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut Vec<String>) {
        match self {
            Formula::Constant(_) => {}

            Formula::Variable(name) => {
                if !names.iter().any(|seen| seen == name) {
                    names.push(name.clone());
                }
            }

            Formula::Not(child) => child.collect_variables(names),

            Formula::And(left, right)
            | Formula::Or(left, right)
            | Formula::Implies(left, right)
            | Formula::Iff(left, right) => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
        }
    }
}

//! Forward-chaining natural-deduction proof search.
//!
//! Starting from a set of premises, classical argument rules are applied until the conclusion is
//! derived or no further progress can be made.
//! Each derived line records the [rule](Rule) applied and 1-based references to the lines it was
//! derived from, so the step list reads as a (somewhat verbose) classical proof.
//!
//! If forward chaining stalls, the negated conclusion is assumed and the search re-run; a direct
//! contradiction among the derived lines then closes the proof by reductio ad absurdum.
//!
//! ```rust
//! # use wff::parser::parse;
//! # use wff::proof::{Proof, Rule};
//! let mut proof = Proof::new(
//!     vec![parse("p>q").unwrap(), parse("~q").unwrap()],
//!     parse("~p").unwrap(),
//! );
//!
//! let steps = proof.derive().unwrap();
//! assert!(steps
//!     .iter()
//!     .any(|step| step.rule == Rule::ModusTollens && step.formula == parse("~p").unwrap()));
//! ```
//!
//! The search is bounded --- at most [STEP_LIMIT] lines are derived --- so derivation always
//! terminates.
//! The rule set is incomplete, and exhaustion is reported as
//! [Underivable](crate::types::err::ProofError::Underivable) rather than a verdict: for a
//! semantic verdict use [infer](crate::procedures::infer::infer), which decides entailment by
//! truth table.

mod rule;
pub use rule::Rule;

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self},
};

/// The bound on derived lines.
///
/// Introduction rules fire on every pair of lines, so an unbounded search rarely terminates; the
/// bound trades completeness for a proof search which always halts.
pub const STEP_LIMIT: usize = 100;

/// A single proof line: the derived formula, the rule which justified it, and the 1-based lines
/// it was derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofStep {
    pub formula: Formula,
    pub rule: Rule,
    pub refs: Vec<usize>,
}

/// A proof attempt from premises to a conclusion.
#[derive(Clone, Debug)]
pub struct Proof {
    premises: Vec<Formula>,
    conclusion: Formula,
    steps: Vec<ProofStep>,

    /// First line of each derived formula, for deduplication and contradiction lookup.
    known: HashMap<Formula, usize>,
}

impl Proof {
    pub fn new(premises: Vec<Formula>, conclusion: Formula) -> Self {
        Proof {
            premises,
            conclusion,
            steps: Vec::default(),
            known: HashMap::default(),
        }
    }

    /// The conclusion the proof attempts to derive.
    pub fn conclusion(&self) -> &Formula {
        &self.conclusion
    }

    /// The derived lines, so far.
    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// Runs the search and returns the derived lines when the conclusion was reached.
    ///
    /// The search restarts from the premises on each call.
    pub fn derive(&mut self) -> Result<&[ProofStep], err::ErrorKind> {
        self.steps.clear();
        self.known.clear();

        for premise in self.premises.clone() {
            self.add_step(premise, Rule::Assumption, vec![]);
        }
        self.search();
        if self.derived() {
            return Ok(&self.steps);
        }

        // Fall back to refutation: assume the negated conclusion and search again.
        let negated = Formula::not(self.conclusion.clone());
        if self.add_step(negated, Rule::Assumption, vec![]).is_some() {
            self.search();
        }
        if self.derived() {
            return Ok(&self.steps);
        }

        // A line and its negation close the proof, whichever was derived first.
        let mut contradiction = None;
        for (index, step) in self.steps.iter().enumerate() {
            if let Formula::Not(inner) = &step.formula {
                if let Some(positive) = self.known.get(inner.as_ref()) {
                    contradiction = Some((*positive, index + 1));
                    break;
                }
            }
        }

        match contradiction {
            Some((positive, negative)) => {
                log::trace!(target: targets::PROOF, "Contradiction between lines {positive} and {negative}");
                self.steps.push(ProofStep {
                    formula: self.conclusion.clone(),
                    rule: Rule::ReductioAdAbsurdum,
                    refs: vec![positive, negative],
                });
                self.known
                    .insert(self.conclusion.clone(), self.steps.len());
                Ok(&self.steps)
            }

            None => Err(err::ErrorKind::from(err::ProofError::Underivable)),
        }
    }

    fn derived(&self) -> bool {
        self.known.contains_key(&self.conclusion)
    }

    /// Registers a new line, unless the formula is already known or the limit is reached.
    /// Returns the (existing or fresh) line of the formula when registered.
    fn add_step(&mut self, formula: Formula, rule: Rule, refs: Vec<usize>) -> Option<usize> {
        if let Some(line) = self.known.get(&formula) {
            return Some(*line);
        }

        if self.steps.len() >= STEP_LIMIT {
            return None;
        }

        log::trace!(target: targets::PROOF, "{}. {formula} [{rule}]", self.steps.len() + 1);

        self.steps.push(ProofStep {
            formula: formula.clone(),
            rule,
            refs,
        });
        let line = self.steps.len();
        self.known.insert(formula, line);
        Some(line)
    }

    /// Processes each line in turn, applying every rule against the lines derived so far.
    /// New lines join the end of the queue and take their own turn.
    fn search(&mut self) {
        let mut index = 0;
        while index < self.steps.len() {
            let line = index + 1;

            self.apply_unary(line);
            self.apply_binary(line);
            self.apply_ternary(line);

            if self.derived() {
                return;
            }

            index += 1;
        }
    }

    /// Rules over a single line.
    fn apply_unary(&mut self, line: usize) {
        let formula = self.steps[line - 1].formula.clone();

        match &formula {
            Formula::And(left, right) => {
                self.add_step(*left.clone(), Rule::ConjunctionElimination, vec![line]);
                self.add_step(*right.clone(), Rule::ConjunctionElimination, vec![line]);
            }

            Formula::Not(child) => {
                if let Formula::Not(inner) = child.as_ref() {
                    self.add_step(*inner.clone(), Rule::DoubleNegation, vec![line]);
                }
            }

            _ => {}
        }
    }

    /// Rules over a pair of lines.
    /// The partner ranges over the lines which existed when the call began; pairs with later
    /// lines are covered when those lines take their turn.
    fn apply_binary(&mut self, line: usize) {
        let count = self.steps.len();
        let a = self.steps[line - 1].formula.clone();

        for other in 1..=count {
            if other == line {
                continue;
            }
            let o = self.steps[other - 1].formula.clone();

            // Modus ponens.
            if let Formula::Implies(antecedent, consequent) = &a {
                if **antecedent == o {
                    self.add_step(*consequent.clone(), Rule::ModusPonens, vec![line, other]);
                }
            }
            if let Formula::Implies(antecedent, consequent) = &o {
                if **antecedent == a {
                    self.add_step(*consequent.clone(), Rule::ModusPonens, vec![other, line]);
                }
            }

            // Modus tollens.
            if let (Formula::Implies(antecedent, consequent), Formula::Not(negated)) = (&a, &o) {
                if negated == consequent {
                    let inferred = Formula::not(*antecedent.clone());
                    self.add_step(inferred, Rule::ModusTollens, vec![line, other]);
                }
            }
            if let (Formula::Implies(antecedent, consequent), Formula::Not(negated)) = (&o, &a) {
                if negated == consequent {
                    let inferred = Formula::not(*antecedent.clone());
                    self.add_step(inferred, Rule::ModusTollens, vec![other, line]);
                }
            }

            // Disjunctive syllogism.
            if let (Formula::Or(left, right), Formula::Not(negated)) = (&a, &o) {
                if negated == left {
                    self.add_step(*right.clone(), Rule::DisjunctiveSyllogism, vec![line, other]);
                } else if negated == right {
                    self.add_step(*left.clone(), Rule::DisjunctiveSyllogism, vec![line, other]);
                }
            }
            if let (Formula::Or(left, right), Formula::Not(negated)) = (&o, &a) {
                if negated == left {
                    self.add_step(*right.clone(), Rule::DisjunctiveSyllogism, vec![other, line]);
                } else if negated == right {
                    self.add_step(*left.clone(), Rule::DisjunctiveSyllogism, vec![other, line]);
                }
            }

            // Conjunction introduction, skipped when either side is already a conjunction.
            if !matches!(a, Formula::And(_, _)) && !matches!(o, Formula::And(_, _)) {
                let conjunction = Formula::and(a.clone(), o.clone());
                self.add_step(conjunction, Rule::ConjunctionIntroduction, vec![line, other]);
            }

            // Disjunction introduction, in both orders.
            let disjunction = Formula::or(a.clone(), o.clone());
            self.add_step(disjunction, Rule::DisjunctionIntroduction, vec![line]);
            let disjunction = Formula::or(o.clone(), a.clone());
            self.add_step(disjunction, Rule::DisjunctionIntroduction, vec![other]);

            // Biconditional introduction.
            if let (Formula::Implies(a1, c1), Formula::Implies(a2, c2)) = (&a, &o) {
                if a1 == c2 && c1 == a2 {
                    let biconditional = Formula::iff(*a1.clone(), *c1.clone());
                    self.add_step(
                        biconditional,
                        Rule::BiconditionalIntroduction,
                        vec![line, other],
                    );
                }
            }

            // Conditional introduction, heuristic: a line implies a line derived from it.
            if self.steps[other - 1].refs.contains(&line) {
                let implication = Formula::implies(a.clone(), o.clone());
                self.add_step(
                    implication,
                    Rule::ConditionalIntroduction,
                    vec![line, other],
                );
            }
            if self.steps[line - 1].refs.contains(&other) {
                let implication = Formula::implies(o.clone(), a.clone());
                self.add_step(
                    implication,
                    Rule::ConditionalIntroduction,
                    vec![other, line],
                );
            }
        }
    }

    /// Disjunctive elimination, the one rule over three lines.
    fn apply_ternary(&mut self, line: usize) {
        let Formula::Or(left, right) = self.steps[line - 1].formula.clone() else {
            return;
        };

        let count = self.steps.len();
        for first in 1..=count {
            if first == line {
                continue;
            }
            let Formula::Implies(antecedent, consequent) = self.steps[first - 1].formula.clone()
            else {
                continue;
            };
            if antecedent != left {
                continue;
            }

            for second in 1..=count {
                if second == line || second == first {
                    continue;
                }
                let Formula::Implies(other_antecedent, other_consequent) =
                    &self.steps[second - 1].formula
                else {
                    continue;
                };

                if **other_antecedent == *right && other_consequent == &consequent {
                    self.add_step(
                        *consequent,
                        Rule::DisjunctiveElimination,
                        vec![line, first, second],
                    );
                    return;
                }
            }
        }
    }
}

//! The rules of inference applied during proof search.

use std::fmt;

/// A classical natural-deduction rule, recorded on the [step](crate::proof::ProofStep) it
/// justifies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rule {
    /// A premise, or the negated conclusion when the search falls back to refutation.
    Assumption,

    /// From `p&q`, infer `p` and infer `q`.
    ConjunctionElimination,

    /// From `p` and `q`, infer `p&q`.
    ConjunctionIntroduction,

    /// From `p`, infer `p+q` for a `q` already derived.
    DisjunctionIntroduction,

    /// From `p+q` and `~p`, infer `q` (or symmetrically `p`).
    DisjunctiveSyllogism,

    /// From `p+q`, `p>r`, and `q>r`, infer `r`.
    DisjunctiveElimination,

    /// From `p>q` and `p`, infer `q`.
    ModusPonens,

    /// From `p>q` and `~q`, infer `~p`.
    ModusTollens,

    /// From `~~p`, infer `p`.
    DoubleNegation,

    /// From `p>q` and `q>p`, infer `p=q`.
    BiconditionalIntroduction,

    /// From a line and a line derived from it, infer the implication between them.
    ConditionalIntroduction,

    /// A contradiction among derived lines closes a proof by refutation.
    ReductioAdAbsurdum,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Assumption => "Assumption",
            Self::ConjunctionElimination => "Conjunction Elimination",
            Self::ConjunctionIntroduction => "Conjunction Introduction",
            Self::DisjunctionIntroduction => "Disjunction Introduction",
            Self::DisjunctiveSyllogism => "Disjunctive Syllogism",
            Self::DisjunctiveElimination => "Disjunctive Elimination",
            Self::ModusPonens => "Modus Ponens",
            Self::ModusTollens => "Modus Tollens",
            Self::DoubleNegation => "Double Negation",
            Self::BiconditionalIntroduction => "Biconditional Introduction",
            Self::ConditionalIntroduction => "Conditional Introduction",
            Self::ReductioAdAbsurdum => "Reductio ad Absurdum",
        };
        write!(f, "{name}")
    }
}

//! Semantic entailment, decided by brute-force truth-table scan.
//!
//! A sequence of hypotheses entails a conclusion exactly when every assignment satisfying all
//! the hypotheses also satisfies the conclusion --- equivalently, when the implication from the
//! conjunction of the hypotheses to the conclusion is a tautology.
//! The scan is over the union of the free variables, so the cost is 2ⁿ in that union.
//!
//! ```rust
//! # use wff::parser::parse;
//! # use wff::procedures::infer::infer;
//! let modus_ponens = infer(
//!     &[parse("a>b").unwrap(), parse("a").unwrap()],
//!     &parse("b").unwrap(),
//! );
//! assert!(modus_ponens);
//!
//! assert!(!infer(&[parse("a").unwrap()], &parse("b").unwrap()));
//! ```

use crate::{
    misc::log::targets::{self},
    structures::formula::Formula,
};

/// Whether the hypotheses logically entail the conclusion.
///
/// An empty hypothesis list entails exactly the tautologies, as the empty conjunction is `True`.
pub fn infer(hypotheses: &[Formula], conclusion: &Formula) -> bool {
    let antecedent = Formula::conjoin(hypotheses.iter().cloned());
    let entailment = Formula::implies(antecedent, conclusion.clone());

    log::trace!(target: targets::INFERENCE, "Checking {entailment}");

    entailment.is_tautology()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn empty_hypotheses_entail_tautologies() {
        assert!(infer(&[], &parse("a+~a").unwrap()));
        assert!(!infer(&[], &parse("a").unwrap()));
    }

    #[test]
    fn hypotheses_over_disjoint_variables() {
        let hypotheses = [parse("p>q").unwrap(), parse("r>s").unwrap()];
        assert!(infer(&hypotheses, &parse("p&r>q&s").unwrap()));
        assert!(!infer(&hypotheses, &parse("q").unwrap()));
    }
}

use wff::{
    parser::parse,
    proof::{Proof, Rule},
    structures::formula::Formula,
    types::err::{ErrorKind, ProofError},
};

fn derive(premises: &[&str], conclusion: &str) -> Proof {
    let premises = premises.iter().map(|text| parse(text).unwrap()).collect();
    let mut proof = Proof::new(premises, parse(conclusion).unwrap());
    assert!(proof.derive().is_ok(), "no proof of {conclusion}");
    proof
}

fn concluding_rule(proof: &Proof) -> Rule {
    let conclusion = proof.conclusion().clone();
    proof
        .steps()
        .iter()
        .find(|step| step.formula == conclusion)
        .map(|step| step.rule)
        .expect("conclusion missing from a successful proof")
}

mod derivations {
    use super::*;

    #[test]
    fn modus_tollens() {
        let proof = derive(&["p>q", "~q"], "~p");
        assert_eq!(concluding_rule(&proof), Rule::ModusTollens);
    }

    #[test]
    fn modus_ponens() {
        let proof = derive(&["p>q", "p"], "q");
        assert_eq!(concluding_rule(&proof), Rule::ModusPonens);
    }

    #[test]
    fn conjunction_introduction() {
        let proof = derive(&["p", "q"], "p*q");
        assert_eq!(concluding_rule(&proof), Rule::ConjunctionIntroduction);
    }

    #[test]
    fn conjunction_elimination() {
        let proof = derive(&["p&q"], "q");
        assert_eq!(concluding_rule(&proof), Rule::ConjunctionElimination);
    }

    #[test]
    fn disjunction_introduction() {
        let proof = derive(&["p", "q"], "p+q");
        assert_eq!(concluding_rule(&proof), Rule::DisjunctionIntroduction);
    }

    #[test]
    fn disjunctive_syllogism() {
        let proof = derive(&["p+q", "~p"], "q");
        assert_eq!(concluding_rule(&proof), Rule::DisjunctiveSyllogism);
    }

    #[test]
    fn biconditional_introduction() {
        let proof = derive(&["p>q", "q>p"], "p=q");
        assert_eq!(concluding_rule(&proof), Rule::BiconditionalIntroduction);
    }

    #[test]
    fn disjunctive_elimination() {
        let proof = derive(&["p+q", "p>r", "q>r"], "r");
        assert_eq!(concluding_rule(&proof), Rule::DisjunctiveElimination);
    }

    #[test]
    fn double_negation() {
        let proof = derive(&["~~p"], "p");
        assert_eq!(concluding_rule(&proof), Rule::DoubleNegation);
    }

    #[test]
    fn contradictory_premises_close_by_reductio() {
        // r appears in no premise, so only the refutation fallback can reach it.
        let proof = derive(&["p>q", "p", "~q"], "r");
        assert_eq!(concluding_rule(&proof), Rule::ReductioAdAbsurdum);
    }
}

mod structure {
    use super::*;

    #[test]
    fn premises_are_assumptions_with_no_references() {
        let proof = derive(&["p>q", "p"], "q");

        for (index, premise) in ["p>q", "p"].iter().enumerate() {
            let step = &proof.steps()[index];
            assert_eq!(step.formula, parse(premise).unwrap());
            assert_eq!(step.rule, Rule::Assumption);
            assert!(step.refs.is_empty());
        }
    }

    #[test]
    fn references_point_at_earlier_lines() {
        let proof = derive(&["p+q", "p>r", "q>r"], "r");

        for (index, step) in proof.steps().iter().enumerate() {
            for reference in &step.refs {
                assert!(*reference >= 1);
                assert!(*reference <= index + 1, "forward reference on line {}", index + 1);
            }
        }
    }

    #[test]
    fn every_derived_line_is_entailed_by_the_premises() {
        let premises = [parse("p+q").unwrap(), parse("~p").unwrap()];
        let mut proof = Proof::new(premises.to_vec(), parse("q").unwrap());
        proof.derive().unwrap();

        for step in proof.steps() {
            if step.rule == Rule::Assumption {
                continue;
            }
            assert!(
                wff::procedures::infer::infer(&premises, &step.formula),
                "line {} does not follow",
                step.formula
            );
        }
    }

    #[test]
    fn underivable_conclusions_are_reported() {
        let mut proof = Proof::new(vec![parse("p").unwrap()], parse("q").unwrap());
        assert_eq!(
            proof.derive(),
            Err(ErrorKind::Proof(ProofError::Underivable))
        );
    }

    #[test]
    fn rules_display_their_classical_names() {
        assert_eq!(Rule::ModusPonens.to_string(), "Modus Ponens");
        assert_eq!(Rule::ReductioAdAbsurdum.to_string(), "Reductio ad Absurdum");
    }
}

mod search_bounds {
    use super::*;

    #[test]
    fn search_terminates_within_the_step_limit() {
        // Underivable goal over premises which feed the introduction rules indefinitely.
        let mut proof = Proof::new(
            vec![parse("a").unwrap(), parse("b").unwrap(), parse("c").unwrap()],
            parse("z").unwrap(),
        );

        let result = proof.derive();
        assert_eq!(result, Err(ErrorKind::Proof(ProofError::Underivable)));
        assert!(proof.steps().len() <= wff::proof::STEP_LIMIT);
    }

    #[test]
    fn derive_restarts_cleanly() {
        let mut proof = Proof::new(vec![parse("p>q").unwrap(), parse("p").unwrap()], parse("q").unwrap());

        let first = proof.derive().map(<[_]>::to_vec);
        let second = proof.derive().map(<[_]>::to_vec);
        assert_eq!(first, second);
    }

    #[test]
    fn a_premise_matching_the_conclusion_is_a_one_line_proof() {
        let conjunction = Formula::and(Formula::variable("p"), Formula::variable("q"));
        let mut proof = Proof::new(vec![conjunction.clone()], conjunction);

        let steps = proof.derive().unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].rule, Rule::Assumption);
    }
}

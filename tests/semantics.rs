use wff::{
    parser::parse,
    procedures::evaluate::Evaluation,
    structures::assignment::CAssignment,
    types::err::{ErrorKind, EvaluationError},
};

fn assignment(pairs: &[(&str, bool)]) -> CAssignment {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

mod evaluation {
    use super::*;

    #[test]
    fn connectives() {
        let cases = [
            ("~a", vec![("a", false)], true),
            ("a&b", vec![("a", true), ("b", false)], false),
            ("a+b", vec![("a", false), ("b", true)], true),
            ("a>b", vec![("a", true), ("b", false)], false),
            ("a>b", vec![("a", false), ("b", false)], true),
            ("a=b", vec![("a", true), ("b", true)], true),
            ("a=b", vec![("a", true), ("b", false)], false),
        ];

        for (text, pairs, expected) in cases {
            let formula = parse(text).unwrap();
            assert_eq!(
                formula.value_on(&assignment(&pairs)),
                Ok(expected),
                "{text} on {pairs:?}"
            );
        }
    }

    #[test]
    fn unbound_variable_under_the_total_contract() {
        let formula = parse("a&b").unwrap();
        assert_eq!(
            formula.value_on(&assignment(&[("a", true)])),
            Err(ErrorKind::Evaluation(EvaluationError::UnboundVariable(
                "b".to_string()
            )))
        );
    }

    #[test]
    fn bindings_outside_the_formula_are_ignored() {
        let formula = parse("a").unwrap();
        let result = formula.value_on(&assignment(&[("a", true), ("z", false)]));
        assert_eq!(result, Ok(true));
    }
}

mod tables {
    use super::*;

    #[test]
    fn size_is_two_to_the_variable_count() {
        for (text, variables) in [("a", 1), ("a&b", 2), ("(a+b)&(a+~b)+~b&c", 3), ("True", 0)] {
            let table = parse(text).unwrap().truth_table();
            assert_eq!(table.len(), 1 << variables, "{text}");
            assert_eq!(table.variables().len(), variables);
        }
    }

    #[test]
    fn canonical_row_order_runs_true_first() {
        let table = parse("a&b").unwrap().truth_table();
        let rows = table.rows();

        assert_eq!(rows[0].0, assignment(&[("a", true), ("b", true)]));
        assert_eq!(rows[1].0, assignment(&[("a", true), ("b", false)]));
        assert_eq!(rows[2].0, assignment(&[("a", false), ("b", true)]));
        assert_eq!(rows[3].0, assignment(&[("a", false), ("b", false)]));

        assert_eq!(
            rows.iter().map(|(_, value)| *value).collect::<Vec<_>>(),
            vec![true, false, false, false]
        );
    }

    #[test]
    fn no_duplicate_assignments() {
        let table = parse("(a>b)=(c+a)").unwrap().truth_table();
        for (index, (row, _)) in table.rows().iter().enumerate() {
            for (other, _) in table.rows().iter().skip(index + 1) {
                assert_ne!(row, other);
            }
        }
    }
}

mod partial_evaluation {
    use super::*;

    #[test]
    fn sub_table_over_the_unbound_remainder() {
        let formula = parse("(a+b)&(a+~b)+~b&c").unwrap();
        let partial = assignment(&[("a", false), ("c", true)]);

        let Evaluation::Table(table) = formula.evaluate(&partial) else {
            panic!("b is unbound");
        };

        assert_eq!(table.variables(), ["b".to_string()]);
        assert_eq!(
            table.rows(),
            [
                (assignment(&[("b", true)]), false),
                (assignment(&[("b", false)]), true),
            ]
        );
    }

    #[test]
    fn total_assignment_collapses_to_a_value() {
        let formula = parse("a+b").unwrap();
        assert_eq!(
            formula.evaluate(&assignment(&[("a", true), ("b", false)])),
            Evaluation::Value(true)
        );
    }

    #[test]
    fn empty_assignment_yields_the_full_table() {
        let formula = parse("a&b").unwrap();
        let Evaluation::Table(table) = formula.evaluate(&CAssignment::default()) else {
            panic!("a and b are unbound");
        };
        assert_eq!(table, formula.truth_table());
    }
}

mod classification {
    use super::*;
    use wff::structures::formula::Formula;

    #[test]
    fn excluded_middle_and_contradiction() {
        for text in ["a", "a&b", "(a>b)=c", "~(a+b&c)"] {
            let formula = parse(text).unwrap();

            let excluded_middle = Formula::or(formula.clone(), Formula::not(formula.clone()));
            assert!(excluded_middle.is_tautology(), "{text}");

            let contradiction = Formula::and(formula.clone(), Formula::not(formula));
            assert!(contradiction.is_contradiction(), "{text}");
        }
    }

    #[test]
    fn density_brackets_classification() {
        for text in ["a+~a", "a&~a", "a>b", "a&b&c"] {
            let formula = parse(text).unwrap();
            let density = formula.density();

            assert!((0.0..=1.0).contains(&density));
            assert_eq!(formula.is_tautology(), density == 1.0);
            assert_eq!(formula.is_contradiction(), density == 0.0);
        }
    }

    #[test]
    fn reference_scenario() {
        let formula = parse("(a+b)&(a+~b)+~b&c").unwrap();

        assert_eq!(
            formula.value_on(&assignment(&[("a", true), ("b", false), ("c", false)])),
            Ok(true)
        );
        assert_eq!(
            formula.value_on(&assignment(&[("a", false), ("b", true), ("c", false)])),
            Ok(false)
        );

        assert_eq!(formula.density(), 0.625);
        assert!(!formula.is_tautology());
        assert!(!formula.is_contradiction());
    }
}

mod entailment {
    use super::*;
    use wff::procedures::infer::infer;

    #[test]
    fn modus_ponens() {
        let hypotheses = [parse("a>b").unwrap(), parse("a").unwrap()];
        assert!(infer(&hypotheses, &parse("b").unwrap()));
    }

    #[test]
    fn irrelevant_hypothesis_fails() {
        assert!(!infer(&[parse("a").unwrap()], &parse("b").unwrap()));
    }

    #[test]
    fn hypothetical_syllogism() {
        let hypotheses = [parse("p>q").unwrap(), parse("q>r").unwrap()];
        assert!(infer(&hypotheses, &parse("p>r").unwrap()));
        assert!(!infer(&hypotheses, &parse("r>p").unwrap()));
    }

    #[test]
    fn contradictory_hypotheses_entail_anything() {
        let hypotheses = [parse("p").unwrap(), parse("~p").unwrap()];
        assert!(infer(&hypotheses, &parse("q").unwrap()));
    }
}

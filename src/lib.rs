//! A library for parsing, evaluating, and reasoning about propositional-logic formulas.
//!
//! wff reads formulas written with the operators NOT (`~`), AND (`&`, or `*`), OR (`+`),
//! IMPLIES (`>`), and IFF (`=`) over named boolean variables, and answers questions about them:
//! the value on an assignment, the full truth table, equivalent disjunctive/conjunctive normal
//! forms, whether the formula is a tautology or a contradiction, how dense its true rows are,
//! whether some hypotheses entail a conclusion, and (when the rules suffice) a natural-deduction
//! proof of that conclusion.
//!
//! Despite the historical name --- 'wff', for well-formed formula, often read as first-order ---
//! the language is purely propositional: there are no quantifiers.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [Formula](structures::formula::Formula).
//!
//! Formulas are built by [parsing](parser::parse) a string, or programmatically through the
//! constructors on the type.
//! A formula is immutable once built: everything else --- tables, normal forms, classifications,
//! entailments --- is a pure function of the formula and the supplied assignment, recomputed on
//! demand.
//!
//! Useful starting points:
//! - The [parser] for the wire format and its precedence rules.
//! - The [structures] to familiarise yourself with formulas, assignments, and truth tables.
//! - The [procedures] for evaluation, normal forms, classification, and entailment.
//! - The [proof] module for rule-based proof search, when a checkable argument is wanted rather
//!   than a truth-table verdict.
//!
//! # Examples
//!
//! + Evaluate a formula, totally and partially.
//!
//! ```rust
//! use wff::parser::parse;
//! use wff::procedures::evaluate::Evaluation;
//! use wff::structures::assignment::CAssignment;
//!
//! let formula = parse("(a+b)&(a+~b)+~b&c").unwrap();
//!
//! let total = CAssignment::from([
//!     ("a".to_string(), true),
//!     ("b".to_string(), false),
//!     ("c".to_string(), false),
//! ]);
//! assert_eq!(formula.value_on(&total), Ok(true));
//!
//! // Binding a subset of the variables yields a sub-table over the remainder.
//! let partial = CAssignment::from([("a".to_string(), false), ("c".to_string(), true)]);
//! let Evaluation::Table(table) = formula.evaluate(&partial) else {
//!     panic!("b is unbound");
//! };
//! assert_eq!(table.variables(), ["b".to_string()]);
//! assert_eq!(table.len(), 2);
//! ```
//!
//! + Classify a formula and rewrite it in normal form.
//!
//! ```rust
//! use wff::parser::parse;
//! use wff::procedures::normal_form::Form;
//!
//! let formula = parse("a=b").unwrap();
//!
//! assert!(!formula.is_tautology());
//! assert_eq!(formula.density(), 0.5);
//!
//! let dnf = formula.normal_form(Form::DNF);
//! assert_eq!(dnf.to_string(), "a&b+~a&~b");
//! assert_eq!(dnf.truth_table(), formula.truth_table());
//! ```
//!
//! + Check an entailment.
//!
//! ```rust
//! use wff::parser::parse;
//! use wff::procedures::infer::infer;
//!
//! let hypotheses = [parse("a>b").unwrap(), parse("a").unwrap()];
//! assert!(infer(&hypotheses, &parse("b").unwrap()));
//! ```
//!
//! # Cost
//!
//! Truth tables are exponential in the number of distinct variables (2ⁿ rows), and every
//! table-driven operation inherits that cost.
//! No internal bound is applied; callers needing large variable counts accept the O(2ⁿ)
//! time/space or bound n themselves.
//! There is no other resource concern: the library performs no I/O and holds no shared mutable
//! state, so formulas may be used from multiple threads without coordination.
//!
//! # Logs
//!
//! To help diagnose issues, calls to [log!](log) are made throughout, and a variety of targets
//! are defined in order to help narrow output to relevant parts of the library.
//! No log implementation is provided; the targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/),
//! logs of proof search can be filtered with `RUST_LOG=proof …`.

pub mod misc;
pub mod parser;
pub mod procedures;
pub mod proof;
pub mod structures;
pub mod types;

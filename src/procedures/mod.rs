//! Operations over formulas.
//!
//! For the most part these are methods accessed via a [Formula](crate::structures::formula::Formula), and primarily placed here for documentation.
//!
//! Every procedure is a pure, terminating computation over immutable inputs: nothing is cached,
//! nothing is mutated, and repeated calls return equal results.

pub mod classify;
pub mod evaluate;
pub mod infer;
pub mod normal_form;

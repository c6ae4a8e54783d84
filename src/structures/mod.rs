//! Key structures, such as formulas, assignments, and truth tables.
//!
//! # Formulas
//!
//! A [formula](formula) 𝐅 is a tree of connectives over variables and boolean constants, interpreted classically.
//!
//! Formulas are immutable once built.
//! Every derived artifact --- a truth table, a normal form, a classification --- is a pure function of the formula and the supplied assignment, so a formula may be shared freely between callers without coordination.
//!
//! # Assignments
//!
//! An [assignment](assignment) is a (partial) function from variable names to truth values.
//!
//! If every variable of a formula is given a value the assignment is 'total' *for that formula*, otherwise the assignment is 'partial'.
//! Evaluation under a partial assignment does not fail, and instead enumerates the unbound remainder --- see [evaluate](crate::structures::formula::Formula::evaluate).
//!
//! # Truth tables
//!
//! A [truth table](table) pairs each assignment over some ordered list of variables with the value of a formula on that assignment.
//!
//! Tables are exponential in the number of variables (2ⁿ rows), and this is the only resource concern in the library.
//! There is no internal bound; callers needing large variable counts accept the O(2ⁿ) cost or bound n themselves.

pub mod assignment;
pub mod formula;
pub mod table;

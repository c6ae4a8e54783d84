//! Classification of a formula by a scan of its truth table.
//!
//! The table, never the tree, is the source of truth here: two formulas classify identically
//! exactly when their tables agree.
//!
//! ```rust
//! # use wff::parser::parse;
//! assert!(parse("a+~a").unwrap().is_tautology());
//! assert!(parse("a&~a").unwrap().is_contradiction());
//! assert_eq!(parse("a&b").unwrap().density(), 0.25);
//! ```

use crate::structures::formula::Formula;

impl Formula {
    /// Whether the formula is true on every assignment.
    pub fn is_tautology(&self) -> bool {
        self.truth_table().is_tautology()
    }

    /// Whether the formula is false on every assignment.
    pub fn is_contradiction(&self) -> bool {
        self.truth_table().is_contradiction()
    }

    /// The fraction of assignments on which the formula is true, in [0, 1].
    ///
    /// 1.0 exactly for a tautology, 0.0 exactly for a contradiction.
    pub fn density(&self) -> f64 {
        self.truth_table().density()
    }
}

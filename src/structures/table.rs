/*!
Truth tables, aka. the exhaustive listing of assignments over some variables and the value of a
formula on each.

The canonical representation of a table is an ordered sequence of rows, each pairing a (total)
assignment over the table's variables with a boolean result.

Row order is fixed by treating the variable list as a binary counter running from all-`true` to
all-`false`, with the last variable the fastest-changing:

```rust
# use wff::parser::parse;
let table = parse("p&q").unwrap().truth_table();

assert_eq!(table.variables(), ["p".to_string(), "q".to_string()]);
assert_eq!(
    table.rows().iter().map(|(_, value)| *value).collect::<Vec<_>>(),
    vec![true, false, false, false],
);
```

A table over *k* variables has exactly 2ᵏ rows and no duplicate assignments --- in particular a
table over no variables has a single row with an empty assignment.

Classification reads the table and nothing else: a formula is a tautology exactly when every row
is true, a contradiction exactly when every row is false, and its density is the fraction of true
rows.
*/

use crate::structures::assignment::CAssignment;

/// A truth-table row: a total assignment over the table's variables, paired with the value of the
/// formula on that assignment.
pub type Row = (CAssignment, bool);

/// An ordered sequence of rows, one per assignment over the table's variables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TruthTable {
    /// The enumerated variables, in first-occurrence order.
    variables: Vec<String>,

    /// The rows, in canonical (all-`true` first) order.
    rows: Vec<Row>,
}

impl TruthTable {
    pub(crate) fn new(variables: Vec<String>, rows: Vec<Row>) -> Self {
        TruthTable { variables, rows }
    }

    /// The enumerated variables, in first-occurrence order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// The rows of the table, in canonical order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The number of rows, always 2ᵏ for a table over *k* variables.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    ///
    /// False for every table built by the library, as a table over no variables has one row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether every row of the table is true.
    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|(_, value)| *value)
    }

    /// Whether every row of the table is false.
    pub fn is_contradiction(&self) -> bool {
        self.rows.iter().all(|(_, value)| !*value)
    }

    /// The fraction of rows which are true, in [0, 1].
    pub fn density(&self) -> f64 {
        let true_count = self.rows.iter().filter(|(_, value)| *value).count();
        true_count as f64 / self.rows.len() as f64
    }
}

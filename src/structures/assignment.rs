/*!
A (partial) function from variable names to truth values.

The canonical representation of an assignment is a [BTreeMap] from names to booleans:

```rust
# use wff::structures::assignment::{Assignment, CAssignment};
let assignment = CAssignment::from([("p".to_string(), true), ("q".to_string(), false)]);

assert_eq!(assignment.value_of("p"), Some(true));
assert_eq!(assignment.value_of("r"), None);
```

The trait is implemented for maps and for slices of (name, value) pairs, so evaluation may be
driven by whichever structure a caller already holds.
Keys are unique in every implementation; a slice with a repeated name answers with the first
binding, matching a left-to-right insert into a map.
*/

use std::collections::{BTreeMap, HashMap};

/// The canonical representation of an assignment.
pub type CAssignment = BTreeMap<String, bool>;

/// An assignment is something which may store a truth value for a variable name.
pub trait Assignment {
    /// Some value of a name under the assignment, or otherwise nothing.
    fn value_of(&self, name: &str) -> Option<bool>;

    /// An iterator over the names bound by the assignment.
    fn bound_names(&self) -> impl Iterator<Item = &str>;

    /// The number of names bound by the assignment.
    fn bound_count(&self) -> usize;
}

impl Assignment for BTreeMap<String, bool> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }

    fn bound_names(&self) -> impl Iterator<Item = &str> {
        self.keys().map(|name| name.as_str())
    }

    fn bound_count(&self) -> usize {
        self.len()
    }
}

impl Assignment for HashMap<String, bool> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }

    fn bound_names(&self) -> impl Iterator<Item = &str> {
        self.keys().map(|name| name.as_str())
    }

    fn bound_count(&self) -> usize {
        self.len()
    }
}

impl<'n> Assignment for [(&'n str, bool)] {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.iter()
            .find(|(bound, _)| *bound == name)
            .map(|(_, value)| *value)
    }

    fn bound_names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(name, _)| *name)
    }

    fn bound_count(&self) -> usize {
        self.len()
    }
}

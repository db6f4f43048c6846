//! The iteration state tuple threaded between transition steps.
//!
//! Every algorithm carries its entire iteration state in a [`StateTuple`]:
//! an ordered sequence of machine integers. Tuples are values, not places.
//! Transition functions never mutate their argument; they return a fresh
//! tuple, which is what makes whole-state snapshots and exact undo cheap to
//! reason about.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered sequence of integers carried between iterations.
///
/// Anything a transition depends on rides inside the tuple itself, so two
/// tuples that compare equal describe the same point of the computation.
/// A scalar normalizes to a one-component tuple via `From<i64>`.
///
/// # Example
///
/// ```rust
/// use primtrace::algorithm::StateTuple;
///
/// let state = StateTuple::new(vec![5, 1]);
/// assert_eq!(state.len(), 2);
/// assert_eq!(state.get(0), Some(5));
/// assert_eq!(state.to_string(), "(5,1)");
///
/// let scalar = StateTuple::from(7);
/// assert_eq!(scalar.values(), &[7]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateTuple(Vec<i64>);

impl StateTuple {
    /// Create a tuple from its components, in order.
    pub fn new(values: Vec<i64>) -> Self {
        StateTuple(values)
    }

    /// All components in order.
    pub fn values(&self) -> &[i64] {
        &self.0
    }

    /// Component at `index`, if present.
    pub fn get(&self, index: usize) -> Option<i64> {
        self.0.get(index).copied()
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the zero-component tuple.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<i64>> for StateTuple {
    fn from(values: Vec<i64>) -> Self {
        StateTuple(values)
    }
}

impl From<i64> for StateTuple {
    fn from(value: i64) -> Self {
        StateTuple(vec![value])
    }
}

impl<const N: usize> From<[i64; N]> for StateTuple {
    fn from(values: [i64; N]) -> Self {
        StateTuple(values.to_vec())
    }
}

impl FromIterator<i64> for StateTuple {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        StateTuple(iter.into_iter().collect())
    }
}

impl fmt::Display for StateTuple {
    /// Renders as `(5,1)`, the shape the computation labels embed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_components_in_parentheses() {
        assert_eq!(StateTuple::new(vec![5, 1]).to_string(), "(5,1)");
        assert_eq!(StateTuple::new(vec![4, 3, 1]).to_string(), "(4,3,1)");
        assert_eq!(StateTuple::new(vec![]).to_string(), "()");
    }

    #[test]
    fn scalar_normalizes_to_one_component() {
        let tuple = StateTuple::from(7);
        assert_eq!(tuple.values(), &[7]);
        assert_eq!(tuple.len(), 1);
    }

    #[test]
    fn builds_from_array_and_iterator() {
        assert_eq!(StateTuple::from([2, 3]), StateTuple::new(vec![2, 3]));
        let collected: StateTuple = (0..3).collect();
        assert_eq!(collected.values(), &[0, 1, 2]);
    }

    #[test]
    fn get_is_bounds_checked() {
        let tuple = StateTuple::new(vec![9]);
        assert_eq!(tuple.get(0), Some(9));
        assert_eq!(tuple.get(1), None);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(StateTuple::new(vec![0, 120]), StateTuple::from([0, 120]));
        assert_ne!(StateTuple::new(vec![0, 120]), StateTuple::new(vec![1, 120]));
    }

    #[test]
    fn serializes_as_plain_sequence() {
        let tuple = StateTuple::new(vec![5, 1]);
        let json = serde_json::to_string(&tuple).unwrap();
        assert_eq!(json, "[5,1]");

        let back: StateTuple = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tuple);
    }
}

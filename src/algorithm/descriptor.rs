//! The algorithm descriptor contract.
//!
//! An [`Algorithm`] is a pure, stateless description of one computable
//! function in the classical primitive-recursive decomposition: ρ builds
//! the initial iteration state from the raw inputs, F advances that state
//! one step at a time, a termination test recognizes the fixed point, and
//! π extracts the final result from the terminal state.

use super::tuple::StateTuple;
use std::fmt;

/// A pure description of one primitive-recursive function.
///
/// Implementations must be pure: given equal arguments, `rho`,
/// `next_state`, `pi` and `is_terminal` return equal values and read
/// nothing else. Every constant a transition depends on is baked into the
/// tuple at ρ-time rather than captured on the descriptor, so a trace can
/// be replayed from any snapshot without hidden context. Exponentiation is
/// the instructive case: its base rides in the middle of the tuple.
///
/// Descriptors are shared behind `Arc<dyn Algorithm>` by the registry, so
/// implementations must be `Send + Sync`.
///
/// # Example
///
/// ```rust
/// use primtrace::algorithm::{Algorithm, StateTuple};
///
/// /// Doubles n by countdown: (i, acc) -> (i-1, acc+2).
/// struct Double;
///
/// impl Algorithm for Double {
///     fn name(&self) -> &str {
///         "Double"
///     }
///
///     fn arity(&self) -> usize {
///         1
///     }
///
///     fn input_labels(&self) -> Vec<String> {
///         vec!["Enter n".to_string()]
///     }
///
///     fn rho(&self, inputs: &[i64]) -> StateTuple {
///         StateTuple::new(vec![inputs[0], 0])
///     }
///
///     fn next_state(&self, state: &StateTuple) -> StateTuple {
///         let (i, acc) = (state.values()[0], state.values()[1]);
///         if i == 0 {
///             state.clone()
///         } else {
///             StateTuple::new(vec![i - 1, acc + 2])
///         }
///     }
///
///     fn pi(&self, state: &StateTuple) -> i64 {
///         state.values()[1]
///     }
///
///     fn is_terminal(&self, next: &StateTuple, _previous: &StateTuple) -> bool {
///         next.get(0) == Some(0)
///     }
/// }
///
/// let double = Double;
/// let mut state = double.rho(&[3]);
/// loop {
///     let next = double.next_state(&state);
///     let done = double.is_terminal(&next, &state);
///     state = next;
///     if done {
///         break;
///     }
/// }
/// assert_eq!(double.pi(&state), 6);
/// ```
pub trait Algorithm: Send + Sync {
    /// Display name of the function.
    fn name(&self) -> &str;

    /// Number of scalar inputs ρ expects.
    fn arity(&self) -> usize;

    /// Ordered display labels, one per input.
    ///
    /// Checked against `arity` when the descriptor is registered.
    fn input_labels(&self) -> Vec<String>;

    /// ρ: build the initial iteration state from the raw inputs.
    ///
    /// The engine only calls this with exactly `arity` validated
    /// non-negative values.
    fn rho(&self, inputs: &[i64]) -> StateTuple;

    /// F: advance the iteration state by one step.
    ///
    /// Must return a new tuple computed from `state` alone. On a terminal
    /// state F returns the state unchanged, which makes the terminal state
    /// a fixed point.
    fn next_state(&self, state: &StateTuple) -> StateTuple;

    /// π: extract the final result from a terminal state.
    fn pi(&self, state: &StateTuple) -> i64;

    /// Termination test for a freshly computed tuple.
    ///
    /// `previous` is the tuple `next` was derived from. The default treats
    /// structural equality with the predecessor as termination, which is
    /// correct for any iteration that converges onto a fixed point but
    /// records one duplicate tuple before it notices. Descriptors with an
    /// explicit counter should override this with the counter test, as
    /// every shipped algorithm does.
    fn is_terminal(&self, next: &StateTuple, previous: &StateTuple) -> bool {
        next == previous
    }
}

impl fmt::Debug for dyn Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algorithm")
            .field("name", &self.name())
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts i down to zero while summing the step count into acc.
    struct CountDown;

    impl Algorithm for CountDown {
        fn name(&self) -> &str {
            "CountDown"
        }

        fn arity(&self) -> usize {
            1
        }

        fn input_labels(&self) -> Vec<String> {
            vec!["Enter n".to_string()]
        }

        fn rho(&self, inputs: &[i64]) -> StateTuple {
            StateTuple::new(vec![inputs[0], 0])
        }

        fn next_state(&self, state: &StateTuple) -> StateTuple {
            let (i, acc) = (state.values()[0], state.values()[1]);
            if i == 0 {
                state.clone()
            } else {
                StateTuple::new(vec![i - 1, acc + 1])
            }
        }

        fn pi(&self, state: &StateTuple) -> i64 {
            state.values()[1]
        }
    }

    #[test]
    fn default_termination_is_fixed_point_detection() {
        let algo = CountDown;
        let at_zero = StateTuple::new(vec![0, 3]);
        let repeated = algo.next_state(&at_zero);

        assert_eq!(repeated, at_zero);
        assert!(algo.is_terminal(&repeated, &at_zero));

        let moving = StateTuple::new(vec![2, 1]);
        let advanced = algo.next_state(&moving);
        assert!(!algo.is_terminal(&advanced, &moving));
    }

    #[test]
    fn transitions_are_deterministic() {
        let algo = CountDown;
        let state = StateTuple::new(vec![4, 0]);
        assert_eq!(algo.next_state(&state), algo.next_state(&state));
        assert_eq!(algo.rho(&[4]), algo.rho(&[4]));
    }

    #[test]
    fn transition_does_not_mutate_its_argument() {
        let algo = CountDown;
        let state = StateTuple::new(vec![4, 0]);
        let _ = algo.next_state(&state);
        assert_eq!(state, StateTuple::new(vec![4, 0]));
    }

    #[test]
    fn descriptors_are_object_safe() {
        let algo: Box<dyn Algorithm> = Box::new(CountDown);
        assert_eq!(algo.name(), "CountDown");
        assert_eq!(algo.rho(&[2]).values(), &[2, 0]);
    }
}

//! The shipped algorithm descriptors.
//!
//! Each builtin keeps everything its transition needs inside the state
//! tuple. Exponentiation is the instructive case: the base occupies the
//! middle component, so F stays a pure function of its argument instead of
//! reading a constant off the descriptor. All four override the default
//! termination test with the explicit counter check, so the terminal tuple
//! is recorded exactly once.

use super::descriptor::Algorithm;
use super::registry::AlgorithmRegistry;
use super::tuple::StateTuple;

/// n! by countdown.
///
/// ρ(n) = (n, 1), F(i, a) = (i-1, a·i), terminal at i = 0, π = a.
pub struct Factorial;

impl Algorithm for Factorial {
    fn name(&self) -> &str {
        "Factorial"
    }

    fn arity(&self) -> usize {
        1
    }

    fn input_labels(&self) -> Vec<String> {
        vec!["Enter n".to_string()]
    }

    fn rho(&self, inputs: &[i64]) -> StateTuple {
        StateTuple::new(vec![inputs[0], 1])
    }

    fn next_state(&self, state: &StateTuple) -> StateTuple {
        let (i, a) = (state.values()[0], state.values()[1]);
        if i == 0 {
            state.clone()
        } else {
            StateTuple::new(vec![i - 1, a * i])
        }
    }

    fn pi(&self, state: &StateTuple) -> i64 {
        state.values()[1]
    }

    fn is_terminal(&self, next: &StateTuple, _previous: &StateTuple) -> bool {
        next.get(0) == Some(0)
    }
}

/// base^exponent with the base carried in the tuple.
///
/// ρ(b, e) = (e, b, 1), F(i, b, a) = (i-1, b, a·b), terminal at i = 0,
/// π = a. Inputs arrive as (base, exponent); the counter leads the tuple
/// like every other builtin.
pub struct Exponentiation;

impl Algorithm for Exponentiation {
    fn name(&self) -> &str {
        "Exponentiation"
    }

    fn arity(&self) -> usize {
        2
    }

    fn input_labels(&self) -> Vec<String> {
        vec!["Enter base".to_string(), "Enter exponent".to_string()]
    }

    fn rho(&self, inputs: &[i64]) -> StateTuple {
        StateTuple::new(vec![inputs[1], inputs[0], 1])
    }

    fn next_state(&self, state: &StateTuple) -> StateTuple {
        let (i, b, a) = (state.values()[0], state.values()[1], state.values()[2]);
        if i == 0 {
            state.clone()
        } else {
            StateTuple::new(vec![i - 1, b, a * b])
        }
    }

    fn pi(&self, state: &StateTuple) -> i64 {
        state.values()[2]
    }

    fn is_terminal(&self, next: &StateTuple, _previous: &StateTuple) -> bool {
        next.get(0) == Some(0)
    }
}

/// The n-th Fibonacci number via the sliding pair.
///
/// ρ(n) = (n, 0, 1), F(i, a, b) = (i-1, b, a+b), terminal at i = 0, π = a.
pub struct Fibonacci;

impl Algorithm for Fibonacci {
    fn name(&self) -> &str {
        "Fibonacci"
    }

    fn arity(&self) -> usize {
        1
    }

    fn input_labels(&self) -> Vec<String> {
        vec!["Enter n".to_string()]
    }

    fn rho(&self, inputs: &[i64]) -> StateTuple {
        StateTuple::new(vec![inputs[0], 0, 1])
    }

    fn next_state(&self, state: &StateTuple) -> StateTuple {
        let (i, a, b) = (state.values()[0], state.values()[1], state.values()[2]);
        if i == 0 {
            state.clone()
        } else {
            StateTuple::new(vec![i - 1, b, a + b])
        }
    }

    fn pi(&self, state: &StateTuple) -> i64 {
        state.values()[1]
    }

    fn is_terminal(&self, next: &StateTuple, _previous: &StateTuple) -> bool {
        next.get(0) == Some(0)
    }
}

/// 1 + 2 + … + n by countdown.
///
/// ρ(n) = (n, 0), F(i, a) = (i-1, a+i), terminal at i = 0, π = a.
pub struct CumulativeSum;

impl Algorithm for CumulativeSum {
    fn name(&self) -> &str {
        "Cumulative Sum"
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
        let (i, a) = (state.values()[0], state.values()[1]);
        if i == 0 {
            state.clone()
        } else {
            StateTuple::new(vec![i - 1, a + i])
        }
    }

    fn pi(&self, state: &StateTuple) -> i64 {
        state.values()[1]
    }

    fn is_terminal(&self, next: &StateTuple, _previous: &StateTuple) -> bool {
        next.get(0) == Some(0)
    }
}

impl AlgorithmRegistry {
    /// The compiled-in registry: factorial, exponentiation, fibonacci, sum.
    pub fn builtins() -> AlgorithmRegistry {
        let mut registry = AlgorithmRegistry::new();
        registry
            .register("factorial", Factorial)
            .expect("builtin keys should never collide");
        registry
            .register("exponentiation", Exponentiation)
            .expect("builtin keys should never collide");
        registry
            .register("fibonacci", Fibonacci)
            .expect("builtin keys should never collide");
        registry
            .register("sum", CumulativeSum)
            .expect("builtin keys should never collide");
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs a descriptor from ρ to its terminal state, collecting the trace.
    fn run(algo: &dyn Algorithm, inputs: &[i64]) -> (Vec<StateTuple>, i64) {
        let mut current = algo.rho(inputs);
        let mut trace = Vec::new();
        for _ in 0..10_000 {
            let next = algo.next_state(&current);
            let done = algo.is_terminal(&next, &current);
            trace.push(next.clone());
            current = next;
            if done {
                return (trace, algo.pi(&current));
            }
        }
        panic!("descriptor did not terminate");
    }

    #[test]
    fn factorial_of_five_traces_the_expected_tuples() {
        let (trace, result) = run(&Factorial, &[5]);
        let expected: Vec<StateTuple> = [[4, 5], [3, 20], [2, 60], [1, 120], [0, 120]]
            .into_iter()
            .map(StateTuple::from)
            .collect();
        assert_eq!(trace, expected);
        assert_eq!(result, 120);
    }

    #[test]
    fn factorial_of_zero_terminates_in_one_step() {
        let (trace, result) = run(&Factorial, &[0]);
        assert_eq!(trace, vec![StateTuple::from([0, 1])]);
        assert_eq!(result, 1);
    }

    #[test]
    fn exponentiation_keeps_the_base_in_the_tuple() {
        let initial = Exponentiation.rho(&[3, 4]);
        assert_eq!(initial, StateTuple::from([4, 3, 1]));

        let (trace, result) = run(&Exponentiation, &[3, 4]);
        assert_eq!(result, 81);
        for state in &trace {
            assert_eq!(state.get(1), Some(3));
        }
    }

    #[test]
    fn exponent_of_zero_yields_one() {
        let (trace, result) = run(&Exponentiation, &[7, 0]);
        assert_eq!(trace.len(), 1);
        assert_eq!(result, 1);
    }

    #[test]
    fn fibonacci_of_seven_is_thirteen() {
        let (trace, result) = run(&Fibonacci, &[7]);
        assert_eq!(trace.len(), 7);
        assert_eq!(result, 13);
    }

    #[test]
    fn fibonacci_pair_slides() {
        let state = StateTuple::from([5, 2, 3]);
        assert_eq!(Fibonacci.next_state(&state), StateTuple::from([4, 3, 5]));
    }

    #[test]
    fn cumulative_sum_of_four_is_ten() {
        let (trace, result) = run(&CumulativeSum, &[4]);
        let expected: Vec<StateTuple> = [[3, 4], [2, 7], [1, 9], [0, 10]]
            .into_iter()
            .map(StateTuple::from)
            .collect();
        assert_eq!(trace, expected);
        assert_eq!(result, 10);
    }

    #[test]
    fn terminal_states_are_fixed_points() {
        let cases: Vec<(Box<dyn Algorithm>, StateTuple)> = vec![
            (Box::new(Factorial), StateTuple::from([0, 120])),
            (Box::new(Exponentiation), StateTuple::from([0, 3, 81])),
            (Box::new(Fibonacci), StateTuple::from([0, 13, 21])),
            (Box::new(CumulativeSum), StateTuple::from([0, 10])),
        ];
        for (algo, terminal) in cases {
            assert_eq!(algo.next_state(&terminal), terminal);
            assert!(algo.is_terminal(&terminal, &terminal));
        }
    }

    #[test]
    fn builtin_registry_holds_the_four_algorithms() {
        let registry = AlgorithmRegistry::builtins();
        assert_eq!(registry.len(), 4);
        for key in ["factorial", "exponentiation", "fibonacci", "sum"] {
            assert!(registry.contains(key));
        }
        assert_eq!(registry.get("sum").unwrap().name(), "Cumulative Sum");
    }
}

//! Fluent construction of descriptors from closures.
//!
//! Shipped algorithms implement [`Algorithm`] directly; the builder is for
//! one-off descriptors in tests and demos where declaring a struct would be
//! ceremony.

use super::descriptor::Algorithm;
use super::tuple::StateTuple;
use std::fmt;
use thiserror::Error;

/// Errors that can occur while building an algorithm descriptor.
#[derive(Debug, Error)]
pub enum BuildError {
    /// No name was provided.
    #[error("Algorithm name not specified. Call .name(name) before .build()")]
    MissingName,

    /// No initialization function was provided.
    #[error("Initialization function not specified. Call .rho(f) before .build()")]
    MissingRho,

    /// No transition function was provided.
    #[error("Transition function not specified. Call .next_state(f) before .build()")]
    MissingNextState,

    /// No extraction function was provided.
    #[error("Extraction function not specified. Call .pi(f) before .build()")]
    MissingPi,
}

type RhoFn = Box<dyn Fn(&[i64]) -> StateTuple + Send + Sync>;
type NextFn = Box<dyn Fn(&StateTuple) -> StateTuple + Send + Sync>;
type PiFn = Box<dyn Fn(&StateTuple) -> i64 + Send + Sync>;
type TerminalFn = Box<dyn Fn(&StateTuple, &StateTuple) -> bool + Send + Sync>;

/// An [`Algorithm`] assembled from closures.
///
/// Created by [`AlgorithmBuilder`]; behaves exactly like a hand-written
/// descriptor once built.
pub struct FnAlgorithm {
    name: String,
    arity: usize,
    labels: Vec<String>,
    rho: RhoFn,
    next: NextFn,
    pi: PiFn,
    terminal: Option<TerminalFn>,
}

impl fmt::Debug for FnAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAlgorithm")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

impl Algorithm for FnAlgorithm {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        self.arity
    }

    fn input_labels(&self) -> Vec<String> {
        self.labels.clone()
    }

    fn rho(&self, inputs: &[i64]) -> StateTuple {
        (self.rho)(inputs)
    }

    fn next_state(&self, state: &StateTuple) -> StateTuple {
        (self.next)(state)
    }

    fn pi(&self, state: &StateTuple) -> i64 {
        (self.pi)(state)
    }

    fn is_terminal(&self, next: &StateTuple, previous: &StateTuple) -> bool {
        match &self.terminal {
            Some(test) => test(next, previous),
            None => next == previous,
        }
    }
}

/// Builder for [`FnAlgorithm`].
///
/// Name, ρ, F and π are required; arity defaults to 1, labels default to
/// `Input 1..=N`, and the termination test defaults to fixed-point
/// detection.
///
/// # Example
///
/// ```rust
/// use primtrace::algorithm::{Algorithm, AlgorithmBuilder, StateTuple};
///
/// let triple = AlgorithmBuilder::new()
///     .name("Triple")
///     .input_labels(["Enter n"])
///     .rho(|inputs| StateTuple::new(vec![inputs[0], 0]))
///     .next_state(|s| {
///         let (i, acc) = (s.values()[0], s.values()[1]);
///         if i == 0 {
///             s.clone()
///         } else {
///             StateTuple::new(vec![i - 1, acc + 3])
///         }
///     })
///     .pi(|s| s.values()[1])
///     .terminal_when(|next, _previous| next.get(0) == Some(0))
///     .build()
///     .unwrap();
///
/// assert_eq!(triple.arity(), 1);
/// assert_eq!(triple.rho(&[4]).values(), &[4, 0]);
/// ```
pub struct AlgorithmBuilder {
    name: Option<String>,
    arity: usize,
    labels: Option<Vec<String>>,
    rho: Option<RhoFn>,
    next: Option<NextFn>,
    pi: Option<PiFn>,
    terminal: Option<TerminalFn>,
}

impl AlgorithmBuilder {
    /// Start a builder with nothing configured.
    pub fn new() -> Self {
        AlgorithmBuilder {
            name: None,
            arity: 1,
            labels: None,
            rho: None,
            next: None,
            pi: None,
            terminal: None,
        }
    }

    /// Set the display name (required).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the number of inputs ρ expects (defaults to 1).
    pub fn arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    /// Set the input display labels (defaults to `Input 1..=N`).
    pub fn input_labels<I, L>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Set the initialization function ρ (required).
    pub fn rho<F>(mut self, rho: F) -> Self
    where
        F: Fn(&[i64]) -> StateTuple + Send + Sync + 'static,
    {
        self.rho = Some(Box::new(rho));
        self
    }

    /// Set the transition function F (required).
    pub fn next_state<F>(mut self, next: F) -> Self
    where
        F: Fn(&StateTuple) -> StateTuple + Send + Sync + 'static,
    {
        self.next = Some(Box::new(next));
        self
    }

    /// Set the extraction function π (required).
    pub fn pi<F>(mut self, pi: F) -> Self
    where
        F: Fn(&StateTuple) -> i64 + Send + Sync + 'static,
    {
        self.pi = Some(Box::new(pi));
        self
    }

    /// Override the default fixed-point termination test.
    pub fn terminal_when<F>(mut self, terminal: F) -> Self
    where
        F: Fn(&StateTuple, &StateTuple) -> bool + Send + Sync + 'static,
    {
        self.terminal = Some(Box::new(terminal));
        self
    }

    /// Build the descriptor, failing on any missing required piece.
    pub fn build(self) -> Result<FnAlgorithm, BuildError> {
        let name = self.name.ok_or(BuildError::MissingName)?;
        let rho = self.rho.ok_or(BuildError::MissingRho)?;
        let next = self.next.ok_or(BuildError::MissingNextState)?;
        let pi = self.pi.ok_or(BuildError::MissingPi)?;
        let labels = self
            .labels
            .unwrap_or_else(|| (1..=self.arity).map(|i| format!("Input {}", i)).collect());

        Ok(FnAlgorithm {
            name,
            arity: self.arity,
            labels,
            rho,
            next,
            pi,
            terminal: self.terminal,
        })
    }
}

impl Default for AlgorithmBuilder {
    fn default() -> Self {
        AlgorithmBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_algorithm() -> AlgorithmBuilder {
        AlgorithmBuilder::new()
            .name("Identity")
            .rho(|inputs| StateTuple::new(vec![inputs[0]]))
            .next_state(|s| s.clone())
            .pi(|s| s.values()[0])
    }

    #[test]
    fn builds_with_required_pieces() {
        let algo = identity_algorithm().build().unwrap();
        assert_eq!(algo.name(), "Identity");
        assert_eq!(algo.arity(), 1);
        assert_eq!(algo.pi(&StateTuple::from(9)), 9);
    }

    #[test]
    fn missing_name_fails() {
        let result = AlgorithmBuilder::new()
            .rho(|inputs| StateTuple::new(inputs.to_vec()))
            .next_state(|s| s.clone())
            .pi(|s| s.values()[0])
            .build();
        assert!(matches!(result, Err(BuildError::MissingName)));
    }

    #[test]
    fn missing_rho_fails() {
        let result = AlgorithmBuilder::new()
            .name("NoRho")
            .next_state(|s| s.clone())
            .pi(|s| s.values()[0])
            .build();
        assert!(matches!(result, Err(BuildError::MissingRho)));
    }

    #[test]
    fn missing_next_state_fails() {
        let result = AlgorithmBuilder::new()
            .name("NoNext")
            .rho(|inputs| StateTuple::new(inputs.to_vec()))
            .pi(|s| s.values()[0])
            .build();
        assert!(matches!(result, Err(BuildError::MissingNextState)));
    }

    #[test]
    fn missing_pi_fails() {
        let result = AlgorithmBuilder::new()
            .name("NoPi")
            .rho(|inputs| StateTuple::new(inputs.to_vec()))
            .next_state(|s| s.clone())
            .build();
        assert!(matches!(result, Err(BuildError::MissingPi)));
    }

    #[test]
    fn labels_default_to_numbered_inputs() {
        let algo = identity_algorithm().arity(3).build().unwrap();
        assert_eq!(algo.input_labels(), vec!["Input 1", "Input 2", "Input 3"]);
    }

    #[test]
    fn explicit_labels_are_kept() {
        let algo = identity_algorithm()
            .input_labels(["Enter n"])
            .build()
            .unwrap();
        assert_eq!(algo.input_labels(), vec!["Enter n"]);
    }

    #[test]
    fn default_termination_is_fixed_point() {
        let algo = identity_algorithm().build().unwrap();
        let state = StateTuple::from(5);
        assert!(algo.is_terminal(&state, &state));
        assert!(!algo.is_terminal(&StateTuple::from(4), &state));
    }

    #[test]
    fn terminal_when_overrides_the_default() {
        let algo = identity_algorithm()
            .terminal_when(|next, _previous| next.get(0) == Some(0))
            .build()
            .unwrap();
        assert!(algo.is_terminal(&StateTuple::from(0), &StateTuple::from(1)));
        assert!(!algo.is_terminal(&StateTuple::from(5), &StateTuple::from(5)));
    }

    #[test]
    fn build_errors_describe_the_missing_call() {
        let message = AlgorithmBuilder::new().build().unwrap_err().to_string();
        assert!(message.contains(".name(name)"));
    }
}

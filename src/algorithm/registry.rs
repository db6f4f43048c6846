//! Keyed registry of algorithm descriptors.
//!
//! The registry is the one place a descriptor enters the system, so it is
//! also where descriptor invariants are checked. Registration is
//! append-only; nothing removes a key, which lets the engine resolve any
//! key ever recorded in a snapshot.

use super::descriptor::Algorithm;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors raised by registration and lookup.
///
/// All three indicate programmer mistakes (colliding keys, typo'd lookups,
/// label drift), so callers should surface them rather than swallow them.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The key is already taken.
    #[error("algorithm key '{0}' is already registered")]
    DuplicateKey(String),

    /// No descriptor is registered under the key.
    #[error("no algorithm registered under key '{0}'")]
    UnknownAlgorithm(String),

    /// The descriptor's label count disagrees with its arity.
    #[error("algorithm '{key}' declares {labels} input label(s) for arity {arity}")]
    LabelArityMismatch {
        key: String,
        arity: usize,
        labels: usize,
    },
}

/// Mapping from stable key to shared descriptor.
///
/// Keys iterate in sorted order, so listings are deterministic.
///
/// # Example
///
/// ```rust
/// use primtrace::algorithm::AlgorithmRegistry;
///
/// let registry = AlgorithmRegistry::builtins();
/// assert!(registry.contains("factorial"));
///
/// let keys: Vec<&str> = registry.keys().collect();
/// assert_eq!(keys, ["exponentiation", "factorial", "fibonacci", "sum"]);
/// ```
pub struct AlgorithmRegistry {
    algorithms: BTreeMap<String, Arc<dyn Algorithm>>,
}

impl AlgorithmRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        AlgorithmRegistry {
            algorithms: BTreeMap::new(),
        }
    }

    /// Register `algorithm` under `key`.
    ///
    /// Fails with [`RegistryError::DuplicateKey`] if the key is taken, and
    /// with [`RegistryError::LabelArityMismatch`] if the descriptor's label
    /// count does not match its arity.
    pub fn register<A>(&mut self, key: impl Into<String>, algorithm: A) -> Result<(), RegistryError>
    where
        A: Algorithm + 'static,
    {
        let key = key.into();
        let arity = algorithm.arity();
        let labels = algorithm.input_labels().len();
        if labels != arity {
            return Err(RegistryError::LabelArityMismatch { key, arity, labels });
        }
        if self.algorithms.contains_key(&key) {
            return Err(RegistryError::DuplicateKey(key));
        }

        debug!(key = %key, name = algorithm.name(), arity, "registered algorithm");
        self.algorithms.insert(key, Arc::new(algorithm));
        Ok(())
    }

    /// Look up the descriptor registered under `key`.
    pub fn get(&self, key: &str) -> Result<&Arc<dyn Algorithm>, RegistryError> {
        self.algorithms
            .get(key)
            .ok_or_else(|| RegistryError::UnknownAlgorithm(key.to_string()))
    }

    /// True if `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.algorithms.contains_key(key)
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.algorithms.keys().map(String::as_str)
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        AlgorithmRegistry::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::builder::AlgorithmBuilder;
    use crate::algorithm::tuple::StateTuple;

    fn successor() -> impl Algorithm + 'static {
        AlgorithmBuilder::new()
            .name("Successor")
            .rho(|inputs| StateTuple::new(vec![inputs[0] + 1]))
            .next_state(|s| s.clone())
            .pi(|s| s.values()[0])
            .build()
            .unwrap()
    }

    #[test]
    fn registers_and_resolves_by_key() {
        let mut registry = AlgorithmRegistry::new();
        registry.register("successor", successor()).unwrap();

        let algo = registry.get("successor").unwrap();
        assert_eq!(algo.name(), "Successor");
        assert!(registry.contains("successor"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let mut registry = AlgorithmRegistry::new();
        registry.register("successor", successor()).unwrap();

        let result = registry.register("successor", successor());
        assert!(matches!(result, Err(RegistryError::DuplicateKey(key)) if key == "successor"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let registry = AlgorithmRegistry::new();
        let result = registry.get("ackermann");
        assert!(matches!(result, Err(RegistryError::UnknownAlgorithm(key)) if key == "ackermann"));
    }

    #[test]
    fn label_arity_mismatch_is_rejected() {
        let drifted = AlgorithmBuilder::new()
            .name("Drifted")
            .arity(2)
            .input_labels(["only one"])
            .rho(|inputs| StateTuple::new(inputs.to_vec()))
            .next_state(|s| s.clone())
            .pi(|s| s.values()[0])
            .build()
            .unwrap();

        let mut registry = AlgorithmRegistry::new();
        let result = registry.register("drifted", drifted);
        assert!(matches!(
            result,
            Err(RegistryError::LabelArityMismatch {
                arity: 2,
                labels: 1,
                ..
            })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn keys_iterate_sorted() {
        let mut registry = AlgorithmRegistry::new();
        registry.register("zeta", successor()).unwrap();
        registry.register("alpha", successor()).unwrap();
        registry.register("mid", successor()).unwrap();

        let keys: Vec<&str> = registry.keys().collect();
        assert_eq!(keys, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn error_messages_name_the_key() {
        let mut registry = AlgorithmRegistry::new();
        registry.register("successor", successor()).unwrap();

        let duplicate = registry.register("successor", successor()).unwrap_err();
        assert_eq!(
            duplicate.to_string(),
            "algorithm key 'successor' is already registered"
        );

        let unknown = registry.get("missing").unwrap_err();
        assert_eq!(
            unknown.to_string(),
            "no algorithm registered under key 'missing'"
        );
    }
}

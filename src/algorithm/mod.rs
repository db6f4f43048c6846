//! Algorithm descriptors: the plugin contract and the shipped set.
//!
//! A descriptor decomposes one primitive-recursive function into four pure
//! pieces: ρ (initialization), F (single-step transition), a termination
//! test, and π (result extraction). The engine in [`crate::engine`] drives
//! descriptors; it never inspects what a tuple means.

mod builder;
mod builtins;
mod descriptor;
mod registry;
mod tuple;

pub use builder::{AlgorithmBuilder, BuildError, FnAlgorithm};
pub use builtins::{CumulativeSum, Exponentiation, Factorial, Fibonacci};
pub use descriptor::Algorithm;
pub use registry::{AlgorithmRegistry, RegistryError};
pub use tuple::StateTuple;

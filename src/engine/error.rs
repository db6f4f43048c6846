//! Engine command errors.

use super::stage::Stage;
use thiserror::Error;

/// Errors reported by engine commands.
///
/// A failed command is a rejected no-op: the snapshot and the history log
/// are exactly as they were before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// An input failed validation.
    #[error("invalid input '{value}': expected a non-negative integer")]
    InvalidInput {
        /// The offending raw value, as submitted.
        value: String,
    },

    /// The submitted input count does not match the algorithm's arity.
    #[error("'{algorithm}' takes {expected} input(s), got {got}")]
    WrongArity {
        algorithm: String,
        expected: usize,
        got: usize,
    },

    /// Evaluation was requested before the input set was complete.
    #[error("'{algorithm}' needs {expected} input(s), only {got} submitted")]
    MissingInputs {
        algorithm: String,
        expected: usize,
        got: usize,
    },

    /// A command was issued from a stage that does not permit it.
    #[error("{command} is not valid in stage {stage}")]
    InvalidTransition {
        command: &'static str,
        stage: Stage,
    },
}

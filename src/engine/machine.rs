//! The trace engine: the imperative shell around the pure descriptors.

use std::sync::Arc;

use tracing::debug;

use crate::algorithm::{Algorithm, AlgorithmRegistry, RegistryError};
use crate::history::{HistoryError, HistoryLog};

use super::error::CommandError;
use super::snapshot::{join_values, TraceState};
use super::stage::Stage;

/// Steps a primitive-recursive evaluation through its stages.
///
/// The engine owns the active descriptor, the current [`TraceState`], and
/// the history log. All mutation goes through the command methods; each
/// successful command computes a complete successor snapshot, makes it
/// current, and retains it in the log, so undo and redo restore exact
/// states.
///
/// Commands are atomic. They validate first, build the successor in full,
/// and commit last: a rejected command, or a descriptor that panics
/// mid-computation, leaves the engine and the log untouched.
///
/// The engine is synchronous and not thread-safe: confine it to one
/// logical thread and feed it one command at a time, the way a UI event
/// loop does.
///
/// # Example
///
/// ```rust
/// use primtrace::{Stage, TraceEngine};
///
/// let mut engine = TraceEngine::with_builtins("sum").unwrap();
/// engine.submit_inputs(&[4]).unwrap();
/// engine.advance_to_ready().unwrap();
/// engine.initialize().unwrap();
///
/// while engine.state().stage != Stage::Terminated {
///     engine.iterate().unwrap();
/// }
///
/// let state = engine.finalize().unwrap();
/// assert_eq!(state.result, Some(10));
/// ```
pub struct TraceEngine {
    registry: AlgorithmRegistry,
    active: Arc<dyn Algorithm>,
    state: TraceState,
    history: HistoryLog<TraceState>,
}

impl TraceEngine {
    /// Create an engine over `registry` with the algorithm at `key` active.
    ///
    /// The initial Idle snapshot becomes the permanent first history entry.
    pub fn new(registry: AlgorithmRegistry, key: &str) -> Result<Self, RegistryError> {
        let active = Arc::clone(registry.get(key)?);
        let state = TraceState::idle(key);
        debug!(algorithm = key, "trace engine created");
        Ok(TraceEngine {
            registry,
            active,
            history: HistoryLog::new(state.clone()),
            state,
        })
    }

    /// Create an engine over the compiled-in registry.
    pub fn with_builtins(key: &str) -> Result<Self, RegistryError> {
        TraceEngine::new(AlgorithmRegistry::builtins(), key)
    }

    /// Read-only view of the current snapshot.
    pub fn state(&self) -> &TraceState {
        &self.state
    }

    /// The descriptor commands currently dispatch to.
    pub fn active_algorithm(&self) -> &Arc<dyn Algorithm> {
        &self.active
    }

    /// The registry backing [`change_algorithm`](Self::change_algorithm).
    pub fn registry(&self) -> &AlgorithmRegistry {
        &self.registry
    }

    /// Read-only view of the history log, for undo/redo affordances.
    pub fn history(&self) -> &HistoryLog<TraceState> {
        &self.history
    }

    /// Commit a full set of validated inputs, returning the machine to a
    /// fresh Idle snapshot that keeps only the algorithm and the inputs.
    ///
    /// Valid in every stage: changing the inputs abandons whatever run was
    /// in progress. The stage does not advance until
    /// [`advance_to_ready`](Self::advance_to_ready).
    pub fn submit_inputs(&mut self, values: &[i64]) -> Result<&TraceState, CommandError> {
        let expected = self.active.arity();
        if values.len() != expected {
            return Err(CommandError::WrongArity {
                algorithm: self.state.algorithm.clone(),
                expected,
                got: values.len(),
            });
        }
        if let Some(bad) = values.iter().find(|value| **value < 0) {
            return Err(CommandError::InvalidInput {
                value: bad.to_string(),
            });
        }

        let mut next = TraceState::idle(self.state.algorithm.clone());
        next.inputs = values.to_vec();
        debug!(inputs = %join_values(values), "inputs submitted");
        Ok(self.commit(next))
    }

    /// Parse raw text inputs, then commit them as
    /// [`submit_inputs`](Self::submit_inputs) does.
    ///
    /// Each value is trimmed and parsed as a decimal integer. Any entry
    /// that is fractional, negative, or not a number rejects the whole
    /// command and leaves the previous inputs in place.
    pub fn submit_raw_inputs(&mut self, values: &[&str]) -> Result<&TraceState, CommandError> {
        let mut parsed = Vec::with_capacity(values.len());
        for raw in values {
            let trimmed = raw.trim();
            let value: i64 = trimmed.parse().map_err(|_| CommandError::InvalidInput {
                value: trimmed.to_string(),
            })?;
            parsed.push(value);
        }
        self.submit_inputs(&parsed)
    }

    /// Freeze the inputs and request evaluation. Valid only from Idle with
    /// a complete input set.
    pub fn advance_to_ready(&mut self) -> Result<&TraceState, CommandError> {
        if self.state.stage != Stage::Idle {
            return Err(self.invalid("advance_to_ready"));
        }
        let expected = self.active.arity();
        if self.state.inputs.len() != expected {
            return Err(CommandError::MissingInputs {
                algorithm: self.state.algorithm.clone(),
                expected,
                got: self.state.inputs.len(),
            });
        }

        let mut next = self.state.clone();
        next.stage = Stage::Ready;
        debug!(inputs = %join_values(&next.inputs), "evaluation requested");
        Ok(self.commit(next))
    }

    /// Apply ρ to the frozen inputs. Valid only from Ready.
    pub fn initialize(&mut self) -> Result<&TraceState, CommandError> {
        if self.state.stage != Stage::Ready {
            return Err(self.invalid("initialize"));
        }

        let initial = self.active.rho(&self.state.inputs);
        let mut next = self.state.clone();
        next.computation_label = format!(
            "ρ({}) = {} : Initial state setup",
            join_values(&next.inputs),
            initial
        );
        next.initial_state = Some(initial);
        next.stage = Stage::Initialized;
        debug!(label = %next.computation_label, "initial state computed");
        Ok(self.commit(next))
    }

    /// Apply exactly one F-step. Valid from Initialized or Iterating.
    ///
    /// Each call appends one tuple to the trace. When the fresh tuple
    /// tests terminal (the very first iteration included), the result is
    /// computed immediately and the machine enters Terminated, so the
    /// terminal tuple is never appended twice.
    pub fn iterate(&mut self) -> Result<&TraceState, CommandError> {
        if !matches!(self.state.stage, Stage::Initialized | Stage::Iterating) {
            return Err(self.invalid("iterate"));
        }
        let Some(previous) = self.state.current_tuple() else {
            return Err(self.invalid("iterate"));
        };

        let algorithm = Arc::clone(&self.active);
        let next_tuple = algorithm.next_state(previous);
        let terminal = algorithm.is_terminal(&next_tuple, previous);

        let mut next = self.state.clone();
        next.computation_label = format!(
            "Iteration {}: F{} = {}",
            next.trace.len() + 1,
            previous,
            next_tuple
        );
        if terminal {
            next.result = Some(algorithm.pi(&next_tuple));
            next.stage = Stage::Terminated;
        } else {
            next.stage = Stage::Iterating;
        }
        next.trace.push(next_tuple);
        debug!(
            iteration = next.trace.len(),
            terminal,
            label = %next.computation_label,
            "transition applied"
        );
        Ok(self.commit(next))
    }

    /// Publish the result with π. Valid only from Terminated.
    pub fn finalize(&mut self) -> Result<&TraceState, CommandError> {
        if self.state.stage != Stage::Terminated {
            return Err(self.invalid("finalize"));
        }
        let Some(terminal) = self.state.current_tuple() else {
            return Err(self.invalid("finalize"));
        };
        let Some(result) = self.state.result else {
            return Err(self.invalid("finalize"));
        };

        let mut next = self.state.clone();
        next.computation_label = format!("π{} = {} : Final result extraction", terminal, result);
        next.stage = Stage::Finalized;
        debug!(result, "result finalized");
        Ok(self.commit(next))
    }

    /// Return to a blank Idle snapshot, clearing inputs, trace, and
    /// result. Valid in every stage; the cleared snapshot is itself pushed
    /// onto the history log, so a reset can be undone.
    pub fn reset(&mut self) -> &TraceState {
        let next = TraceState::idle(self.state.algorithm.clone());
        debug!("engine reset");
        self.commit(next)
    }

    /// Switch the active algorithm, keeping compatible inputs.
    ///
    /// The first `min(arity, submitted)` inputs survive left-to-right;
    /// everything else resets to Idle. Valid in every stage.
    pub fn change_algorithm(&mut self, key: &str) -> Result<&TraceState, RegistryError> {
        let algorithm = Arc::clone(self.registry.get(key)?);
        let keep = algorithm.arity().min(self.state.inputs.len());

        let mut next = TraceState::idle(key);
        next.inputs = self.state.inputs[..keep].to_vec();
        self.active = algorithm;
        debug!(algorithm = key, kept_inputs = keep, "algorithm changed");
        Ok(self.commit(next))
    }

    /// Restore the snapshot preceding the current one.
    pub fn undo(&mut self) -> Result<&TraceState, HistoryError> {
        let restored = self.history.undo()?.clone();
        Ok(self.restore(restored))
    }

    /// Restore the most recently undone snapshot.
    pub fn redo(&mut self) -> Result<&TraceState, HistoryError> {
        let restored = self.history.redo()?.clone();
        Ok(self.restore(restored))
    }

    /// Make `next` the current snapshot and retain it in the log.
    fn commit(&mut self, next: TraceState) -> &TraceState {
        self.history.push(next.clone());
        self.state = next;
        &self.state
    }

    /// Adopt a snapshot coming back out of the history log.
    fn restore(&mut self, snapshot: TraceState) -> &TraceState {
        // Registration is append-only, so a key recorded in any snapshot
        // still resolves.
        if let Ok(algorithm) = self.registry.get(&snapshot.algorithm) {
            self.active = Arc::clone(algorithm);
        }
        self.state = snapshot;
        debug!(stage = %self.state.stage, "snapshot restored");
        &self.state
    }

    fn invalid(&self, command: &'static str) -> CommandError {
        CommandError::InvalidTransition {
            command,
            stage: self.state.stage,
        }
    }
}

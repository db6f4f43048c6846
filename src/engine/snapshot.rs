//! The whole-state snapshot the engine replaces on every command.

use super::stage::Stage;
use crate::algorithm::StateTuple;
use serde::{Deserialize, Serialize};

/// Render `[5, 1]` as `5,1` for labels and status lines.
pub(crate) fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Complete snapshot of one traced evaluation.
///
/// A plain value with no behavior of its own: commands on
/// [`TraceEngine`](super::TraceEngine) replace it wholesale, and the
/// history log retains the previous value, which is what makes undo and
/// redo exact. Everything here is serializable, so a snapshot can be
/// shipped to a view layer or stored as-is.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TraceState {
    /// Registry key of the algorithm this evaluation belongs to.
    pub algorithm: String,
    /// Validated non-negative inputs, in submission order.
    pub inputs: Vec<i64>,
    /// Current stage of the state machine.
    pub stage: Stage,
    /// ρ's output; present from [`Stage::Initialized`] onward.
    pub initial_state: Option<StateTuple>,
    /// One tuple per accepted iteration, oldest first.
    pub trace: Vec<StateTuple>,
    /// Extracted result; present from [`Stage::Terminated`] onward.
    pub result: Option<i64>,
    /// Human-readable description of the last transition.
    pub computation_label: String,
}

impl TraceState {
    /// Fresh Idle snapshot for `algorithm` with nothing submitted.
    pub fn idle(algorithm: impl Into<String>) -> Self {
        TraceState {
            algorithm: algorithm.into(),
            inputs: Vec::new(),
            stage: Stage::Idle,
            initial_state: None,
            trace: Vec::new(),
            result: None,
            computation_label: String::new(),
        }
    }

    /// The tuple the next F-step would be computed from: the newest trace
    /// entry, or the initial state before any iteration.
    pub fn current_tuple(&self) -> Option<&StateTuple> {
        self.trace.last().or(self.initial_state.as_ref())
    }

    /// Number of accepted iterations.
    pub fn iterations(&self) -> usize {
        self.trace.len()
    }

    /// One line of status for a view to display.
    ///
    /// The latest computation label when one exists, a prompt for what the
    /// current stage is waiting on otherwise, and the closed-form summary
    /// once the evaluation is finalized.
    pub fn status_line(&self) -> String {
        if let (Stage::Finalized, Some(result)) = (self.stage, self.result) {
            return format!(
                "{}({}) = {}",
                self.algorithm,
                join_values(&self.inputs),
                result
            );
        }
        if !self.computation_label.is_empty() {
            return self.computation_label.clone();
        }
        match self.stage {
            Stage::Idle if self.inputs.is_empty() => "Submit inputs to begin".to_string(),
            Stage::Idle => "Advance when the inputs are complete".to_string(),
            Stage::Ready => "Initialize the iteration state with ρ".to_string(),
            Stage::Initialized | Stage::Iterating => {
                "Apply the next transition with F".to_string()
            }
            Stage::Terminated => "Extract the final result with π".to_string(),
            Stage::Finalized => String::new(),
        }
    }
}

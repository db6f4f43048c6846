//! Discrete stages of a traced evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of the trace state machine.
///
/// Variant order matches evaluation order, so range comparisons like
/// `stage >= Stage::Initialized` read the way they sound. Termination sits
/// between iteration and finalization; [`marker`](Stage::marker) exposes
/// that as the half-step 3.5.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Stage {
    /// Inputs not yet committed, or the machine was just reset.
    Idle,
    /// Evaluation requested; the inputs are frozen.
    Ready,
    /// ρ has produced the initial state.
    Initialized,
    /// One or more F-steps applied, none terminal yet.
    Iterating,
    /// A terminal tuple was produced; the result is computed but unpublished.
    Terminated,
    /// π applied; the result is authoritative.
    Finalized,
}

impl Stage {
    /// Stage name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Idle => "Idle",
            Stage::Ready => "Ready",
            Stage::Initialized => "Initialized",
            Stage::Iterating => "Iterating",
            Stage::Terminated => "Terminated",
            Stage::Finalized => "Finalized",
        }
    }

    /// Numeric step marker: 0, 1, 2, 3, 3.5, 4.
    pub fn marker(&self) -> f64 {
        match self {
            Stage::Idle => 0.0,
            Stage::Ready => 1.0,
            Stage::Initialized => 2.0,
            Stage::Iterating => 3.0,
            Stage::Terminated => 3.5,
            Stage::Finalized => 4.0,
        }
    }

    /// True once the result has been published.
    pub fn is_final(&self) -> bool {
        matches!(self, Stage::Finalized)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

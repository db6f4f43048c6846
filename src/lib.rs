//! Primtrace: a step-by-step trace engine for primitive-recursive functions
//!
//! Primtrace animates the classical decomposition of a primitive-recursive
//! function into four pure pieces: ρ builds the initial iteration state
//! from the inputs, repeated F-steps advance it, a termination test
//! recognizes the fixed point, and π extracts the final result. The engine
//! advances one command at a time, records every intermediate tuple in an
//! explicit trace, and keeps each whole-state snapshot in an undo/redo
//! log, which is exactly what a view layer needs to animate an evaluation
//! and scrub back and forth through it.
//!
//! # Core Concepts
//!
//! - **Algorithm**: the descriptor contract of ρ, F, π and a termination
//!   test, all pure functions over a [`StateTuple`]
//! - **TraceEngine**: owns the current [`TraceState`] and steps it through
//!   the discrete stages of one evaluation
//! - **HistoryLog**: linear undo/redo over whole-state snapshots
//!
//! # Example
//!
//! ```rust
//! use primtrace::{Stage, TraceEngine};
//!
//! let mut engine = TraceEngine::with_builtins("factorial").unwrap();
//! engine.submit_inputs(&[5]).unwrap();
//! engine.advance_to_ready().unwrap();
//! engine.initialize().unwrap();
//!
//! while engine.state().stage != Stage::Terminated {
//!     engine.iterate().unwrap();
//! }
//!
//! let state = engine.finalize().unwrap();
//! assert_eq!(state.result, Some(120));
//! assert_eq!(state.status_line(), "factorial(5) = 120");
//!
//! // Scrub one command back, then forward again.
//! let stage = engine.undo().unwrap().stage;
//! assert_eq!(stage, Stage::Terminated);
//! engine.redo().unwrap();
//! assert_eq!(engine.state().stage, Stage::Finalized);
//! ```

pub mod algorithm;
pub mod engine;
pub mod history;

// Re-export commonly used types
pub use algorithm::{Algorithm, AlgorithmBuilder, AlgorithmRegistry, StateTuple};
pub use engine::{CommandError, Stage, TraceEngine, TraceState};
pub use history::{HistoryError, HistoryLog};

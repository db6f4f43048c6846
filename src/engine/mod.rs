//! The trace engine layer.
//!
//! [`TraceEngine`] is the imperative shell around the pure descriptor
//! contract: it owns the current [`TraceState`], applies every command as
//! a whole-state replacement, and retains each snapshot in the history
//! log. The pure/imperative split keeps the interesting semantics (ρ, F,
//! termination, π) in [`crate::algorithm`], where they are trivially
//! testable.

mod error;
mod machine;
mod snapshot;
mod stage;

pub use error::CommandError;
pub use machine::TraceEngine;
pub use snapshot::TraceState;
pub use stage::Stage;

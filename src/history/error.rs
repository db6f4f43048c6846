//! History log errors.

use thiserror::Error;

/// Errors raised when navigating the undo/redo log.
///
/// Both are boundary conditions rather than faults: the log is already at
/// the end the caller tried to move past, and remains unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Undo was requested with only the permanent initial snapshot left.
    #[error("nothing to undo")]
    NothingToUndo,

    /// Redo was requested with an empty redo stack.
    #[error("nothing to redo")]
    NothingToRedo,
}

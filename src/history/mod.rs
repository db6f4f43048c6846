//! Linear undo/redo over whole-state snapshots.
//!
//! The log is deliberately ignorant of what a snapshot means: it stores
//! owned copies of whatever state type it is given and moves them between
//! an undo stack and a redo stack. History is linear, not branching:
//! pushing a new snapshot discards every previously undone future.

mod error;

pub use error::HistoryError;

/// One retained snapshot and its position in the command sequence.
///
/// The sequence index is assigned once at push time and travels with the
/// entry through undo and redo, so an entry restored twice is still
/// distinguishable from a fresh push that happens to carry an equal
/// snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry<T> {
    /// The retained snapshot.
    pub snapshot: T,
    /// Monotonically increasing index, starting at 0 for the initial entry.
    pub seq: u64,
}

/// Linear undo/redo log seeded with a permanent initial snapshot.
///
/// The entry recorded at construction can never be popped, so the log
/// always has a current snapshot to read. Entries keep their identity
/// across navigation: undo moves the newest entry onto the redo stack and
/// redo moves it back, unchanged.
///
/// # Example
///
/// ```rust
/// use primtrace::history::HistoryLog;
///
/// let mut log = HistoryLog::new("start");
/// log.push("one");
/// log.push("two");
///
/// assert_eq!(log.undo().unwrap(), &"one");
/// assert_eq!(log.redo().unwrap(), &"two");
///
/// // A new push erases the undone future.
/// log.undo().unwrap();
/// log.push("one'");
/// assert!(log.redo().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct HistoryLog<T> {
    initial: HistoryEntry<T>,
    /// Entries after the initial one, newest last.
    undo_stack: Vec<HistoryEntry<T>>,
    /// Undone entries, most recently undone last.
    redo_stack: Vec<HistoryEntry<T>>,
    next_seq: u64,
}

impl<T> HistoryLog<T> {
    /// Create a log whose permanent first entry is `initial`.
    pub fn new(initial: T) -> Self {
        HistoryLog {
            initial: HistoryEntry {
                snapshot: initial,
                seq: 0,
            },
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            next_seq: 1,
        }
    }

    /// Append a snapshot and discard any previously undone futures.
    pub fn push(&mut self, snapshot: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.undo_stack.push(HistoryEntry { snapshot, seq });
        self.redo_stack.clear();
    }

    /// The snapshot an observer should treat as current.
    pub fn current(&self) -> &T {
        match self.undo_stack.last() {
            Some(entry) => &entry.snapshot,
            None => &self.initial.snapshot,
        }
    }

    /// Sequence index of the current entry.
    pub fn sequence(&self) -> u64 {
        match self.undo_stack.last() {
            Some(entry) => entry.seq,
            None => self.initial.seq,
        }
    }

    /// Step back one entry and return the snapshot now current.
    ///
    /// Fails with [`HistoryError::NothingToUndo`] when only the permanent
    /// initial snapshot remains.
    pub fn undo(&mut self) -> Result<&T, HistoryError> {
        let entry = self.undo_stack.pop().ok_or(HistoryError::NothingToUndo)?;
        self.redo_stack.push(entry);
        Ok(self.current())
    }

    /// Step forward one previously undone entry and return its snapshot.
    ///
    /// Fails with [`HistoryError::NothingToRedo`] when nothing has been
    /// undone since the last push.
    pub fn redo(&mut self) -> Result<&T, HistoryError> {
        let entry = self.redo_stack.pop().ok_or(HistoryError::NothingToRedo)?;
        self.undo_stack.push(entry);
        Ok(self.current())
    }

    /// True if a call to [`undo`](Self::undo) would succeed.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// True if a call to [`redo`](Self::redo) would succeed.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots on the undo side, the initial one included.
    pub fn len(&self) -> usize {
        1 + self.undo_stack.len()
    }

    /// Always false: the initial snapshot is permanent.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of undone entries waiting for redo.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}

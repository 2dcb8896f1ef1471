//! History module - linear undo/redo over tableau snapshots
//!
//! The history is a list of snapshots and a cursor pointing at the one that matches the
//! live game. Recording while the cursor is behind the tail drops the redo branch first.

use crate::tableau::Tableau;

/// Everything undo/redo restores. Move count, elapsed time and manual score adjustments
/// are not part of it; the score follows from the completed sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot {
    pub tableau: Tableau,
    pub complete: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<Snapshot>,
    index: usize,
}

impl History {
    /// Start a history whose only entry is `initial`
    pub fn new(initial: Snapshot) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// Drop everything and seed with `initial`
    pub fn reset(&mut self, initial: Snapshot) {
        self.entries.clear();
        self.entries.push(initial);
        self.index = 0;
    }

    /// Forget all entries (no game in progress)
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index = 0;
    }

    /// Append a snapshot after the cursor, discarding any redo entries
    pub fn record(&mut self, snapshot: Snapshot) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(snapshot);
        self.index = self.entries.len() - 1;
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Step back. Returns the snapshot now under the cursor.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index)
    }

    /// Step forward. Returns the snapshot now under the cursor.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index)
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

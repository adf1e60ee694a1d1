//! Snapshot-based undo/redo.
//!
//! Every mutating user action pushes the pre-mutation shape collection onto
//! the undo stack and clears the redo stack. Undo swaps the current
//! collection with the popped snapshot, parking the replaced state on the
//! redo stack; redo is the mirror image. View state is not tracked.

use super::Editor;
use crate::canvas::DrawingObject;

impl Editor {
    /// Pushes the current collection as the pre-mutation snapshot.
    pub(crate) fn push_history(&mut self) {
        let snapshot = self.canvas.store.snapshot();
        self.push_history_snapshot(snapshot);
    }

    /// Pushes an explicit snapshot (used by drags that captured their
    /// pre-drag state earlier).
    pub(crate) fn push_history_snapshot(&mut self, snapshot: Vec<DrawingObject>) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Restores the most recent snapshot; the replaced collection becomes
    /// redoable. The selection is reconciled against the restored shapes so
    /// it never references a missing id.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(self.canvas.store.snapshot());
        self.canvas.store.restore(snapshot);
        self.canvas.selection.reconcile(&self.canvas.store);
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(self.canvas.store.snapshot());
        self.canvas.store.restore(snapshot);
        self.canvas.selection.reconcile(&self.canvas.store);
        true
    }
}

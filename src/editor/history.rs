use crate::graph::Graph;

/// Linear undo/redo over full graph snapshots.
///
/// Snapshots are whole `Graph` clones rather than diffs; authored flows are
/// tens of nodes, so the memory cost is negligible and replay is trivial.
/// The history is strictly linear: recording a new snapshot after an undo
/// discards the entire redo stack.
#[derive(Debug, Default)]
pub struct History {
    undo_stack: Vec<Graph>,
    redo_stack: Vec<Graph>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the state *immediately prior to* a mutation. Must be called
    /// synchronously, before the change is applied, and only for mutations
    /// that will actually commit. Unconditionally clears the redo stack.
    pub fn record(&mut self, current: &Graph) {
        self.undo_stack.push(current.clone());
        self.redo_stack.clear();
    }

    /// Restores the most recent snapshot into `live`, pushing the pre-undo
    /// state onto the redo stack. Returns false (no-op) when there is
    /// nothing to undo.
    pub fn undo(&mut self, live: &mut Graph) -> bool {
        match self.undo_stack.pop() {
            Some(entry) => {
                let current = std::mem::replace(live, entry);
                self.redo_stack.push(current);
                true
            }
            None => false,
        }
    }

    /// Inverse of [`undo`](Self::undo): restores the most recently undone
    /// state, pushing the pre-redo state onto the undo stack. Returns false
    /// when there is nothing to redo.
    pub fn redo(&mut self, live: &mut Graph) -> bool {
        match self.redo_stack.pop() {
            Some(entry) => {
                let current = std::mem::replace(live, entry);
                self.undo_stack.push(current);
                true
            }
            None => false,
        }
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

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}

//! Cell action queue
//!
//! Presentation adapters (click handlers, REPL commands) do not mutate the
//! grid directly mid-step. They submit actions here; the simulation drains
//! the queue at the start of each step and applies them before the rules
//! run. A bounded history of applied actions is kept for replay/debugging.

/// Action kinds a presentation adapter can request on a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Set a flamable cell on fire
    Ignite,
    /// Put out a burning cell, returning it to flamable
    Extinguish,
}

/// A requested cell action at a grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellAction {
    pub kind: ActionKind,
    pub x: usize,
    pub y: usize,
}

impl CellAction {
    /// Create an ignite action
    pub fn ignite(x: usize, y: usize) -> Self {
        CellAction {
            kind: ActionKind::Ignite,
            x,
            y,
        }
    }

    /// Create an extinguish action
    pub fn extinguish(x: usize, y: usize) -> Self {
        CellAction {
            kind: ActionKind::Extinguish,
            x,
            y,
        }
    }
}

/// Queue of pending cell actions with a bounded applied-action history
#[derive(Debug)]
pub struct ActionQueue {
    pending: Vec<CellAction>,
    history: Vec<CellAction>,
    max_history: usize,
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl ActionQueue {
    /// Create a queue keeping at most `max_history` applied actions
    pub fn new(max_history: usize) -> Self {
        ActionQueue {
            pending: Vec::new(),
            history: Vec::with_capacity(max_history.min(64)),
            max_history,
        }
    }

    /// Queue an action for the next step
    pub fn submit(&mut self, action: CellAction) {
        self.pending.push(action);
    }

    /// Actions waiting to be applied
    pub fn pending(&self) -> &[CellAction] {
        &self.pending
    }

    /// Take all pending actions for processing
    pub fn take_pending(&mut self) -> Vec<CellAction> {
        std::mem::take(&mut self.pending)
    }

    /// Record an action as applied, trimming the oldest beyond the limit
    pub fn mark_applied(&mut self, action: CellAction) {
        self.history.push(action);
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }
    }

    /// Applied actions, oldest first
    pub fn history(&self) -> &[CellAction] {
        &self.history
    }

    /// Drop all pending and applied actions
    pub fn clear(&mut self) {
        self.pending.clear();
        self.history.clear();
    }
}

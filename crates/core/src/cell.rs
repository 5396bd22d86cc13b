//! Per-cell state for the fire-spread automaton
//!
//! Each grid cell is in exactly one discrete state at any time. Delayed
//! transitions (slow ignition, slow burnout) are gated by per-cell step
//! counters that reset whenever the state changes.

use serde::{Deserialize, Serialize};

/// Discrete fire state of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Cannot burn (rock, bare ground)
    Inflamable,
    /// Fuel present, not yet ignited
    Flamable,
    /// Actively on fire
    Burning,
    /// Fuel consumed; terminal state
    Burnt,
}

impl CellState {
    /// True for states that count as fire when tallying neighbors
    pub fn is_burning(self) -> bool {
        matches!(self, CellState::Burning)
    }

    /// True once the cell's fuel is consumed
    pub fn is_burnt(self) -> bool {
        matches!(self, CellState::Burnt)
    }

    /// Single-character glyph for terminal rendering
    pub fn glyph(self) -> char {
        match self {
            CellState::Inflamable => '.',
            CellState::Flamable => ',',
            CellState::Burning => '#',
            CellState::Burnt => 'x',
        }
    }
}

impl std::fmt::Display for CellState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CellState::Inflamable => "inflamable",
            CellState::Flamable => "flamable",
            CellState::Burning => "burning",
            CellState::Burnt => "burnt",
        };
        write!(f, "{name}")
    }
}

/// Full per-cell record: state plus transition counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Current discrete state
    pub state: CellState,
    /// Steps spent next to fire while flamable
    pub ignite_ticks: u32,
    /// Steps spent crowded by fire while burning
    pub burnout_ticks: u32,
}

impl Cell {
    /// Create a cell in the given state with zeroed counters
    pub fn new(state: CellState) -> Self {
        Cell {
            state,
            ignite_ticks: 0,
            burnout_ticks: 0,
        }
    }

    /// Transition to a new state, clearing both counters
    pub fn transition(&mut self, state: CellState) {
        self.state = state;
        self.ignite_ticks = 0;
        self.burnout_ticks = 0;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::new(CellState::Inflamable)
    }
}

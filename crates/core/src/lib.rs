//! Fire Grid Core Library
//!
//! A deterministic 2D fire-spread cellular automaton over a fixed-size grid
//! of discrete cell states (inflamable, flamable, burning, burnt). Each
//! simulation step evaluates every cell's 8-connected Moore neighborhood
//! against threshold rules and counter-gated delayed transitions, always
//! reading from an immutable snapshot of the previous grid.
//!
//! Presentation concerns (rendering, input) stay outside this crate; the
//! demos talk to [`FireSimulation`] through queued cell actions and the
//! per-step change list.

pub mod actions;
pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod mapgen;
pub mod rules;
pub mod simulation;
pub mod snapshot;

pub use actions::{ActionKind, ActionQueue, CellAction};
pub use cell::{Cell, CellState};
pub use config::SimulationConfig;
pub use error::{ConfigError, GridError};
pub use grid::{CellGrid, StateCounts};
pub use mapgen::MapLayout;
pub use rules::{IgnitionMode, NeighborTally, RuleSet};
pub use simulation::{CellChange, FireSimulation};
pub use snapshot::{GridSnapshot, SnapshotError};

//! Step-driven fire-spread simulation
//!
//! `FireSimulation` owns the current grid and advances it one full step at a
//! time. Every step recomputes a new grid from an immutable snapshot of the
//! previous one (no read-after-write within a step), then swaps it in.
//! Queued cell actions from presentation adapters are applied before the
//! rules run.

use crate::actions::{ActionKind, ActionQueue, CellAction};
use crate::cell::{Cell, CellState};
use crate::config::SimulationConfig;
use crate::error::{ConfigError, GridError};
use crate::grid::{CellGrid, StateCounts};
use crate::mapgen;
use crate::rules::{evaluate, tally_neighbors, RuleSet};
use crate::snapshot::{GridSnapshot, SnapshotError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// One cell transition observed during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub x: usize,
    pub y: usize,
    pub from: CellState,
    pub to: CellState,
}

/// Main fire-spread simulation
pub struct FireSimulation {
    grid: CellGrid,
    rules: RuleSet,
    actions: ActionQueue,
    changes: Vec<CellChange>,
    seed: u64,
    steps: u64,
}

impl FireSimulation {
    /// Build a simulation from a validated configuration.
    ///
    /// # Errors
    /// Fails if the configuration is invalid (zero dimensions, fill
    /// percentage out of range).
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let grid = mapgen::generate(config.width, config.height, config.layout, seed);

        info!(
            "Created {}x{} fire grid (seed {seed})",
            config.width, config.height
        );

        Ok(FireSimulation {
            grid,
            rules: config.rules,
            actions: ActionQueue::default(),
            changes: Vec::new(),
            seed,
            steps: 0,
        })
    }

    /// Current grid, for rendering and inspection
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Active rule thresholds
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Seed actually in use (recorded even when drawn from entropy)
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of completed steps
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Per-state cell tallies of the current grid
    pub fn counts(&self) -> StateCounts {
        self.grid.counts()
    }

    /// Transitions recorded during the most recent step
    pub fn last_changes(&self) -> &[CellChange] {
        &self.changes
    }

    /// Applied cell actions, oldest first
    pub fn action_history(&self) -> &[CellAction] {
        self.actions.history()
    }

    /// Queue a cell action for the next step.
    ///
    /// # Errors
    /// Rejects coordinates outside the grid immediately.
    pub fn queue_action(&mut self, action: CellAction) -> Result<(), GridError> {
        if !self.grid.in_bounds(action.x, action.y) {
            let (width, height) = self.grid.dimensions();
            warn!(
                "Rejected {:?} at ({}, {}): outside {}x{} grid",
                action.kind, action.x, action.y, width, height
            );
            return Err(GridError::OutOfBounds {
                x: action.x,
                y: action.y,
                width,
                height,
            });
        }
        self.actions.submit(action);
        Ok(())
    }

    /// Queue an ignite action at `(x, y)`.
    ///
    /// # Errors
    /// Rejects coordinates outside the grid.
    pub fn ignite(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        self.queue_action(CellAction::ignite(x, y))
    }

    /// Queue an extinguish action at `(x, y)`.
    ///
    /// # Errors
    /// Rejects coordinates outside the grid.
    pub fn extinguish(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        self.queue_action(CellAction::extinguish(x, y))
    }

    /// Overwrite a cell's state immediately, bypassing the action queue.
    ///
    /// Scenario setup helper; the cell's counters are cleared. Interactive
    /// adapters should prefer queued actions, which respect step boundaries.
    ///
    /// # Errors
    /// Rejects coordinates outside the grid.
    pub fn set_cell(&mut self, x: usize, y: usize, state: CellState) -> Result<(), GridError> {
        self.grid.set(x, y, state)
    }

    /// Capture the current state for persistence
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::capture(&self.grid, self.rules, self.steps, self.seed)
    }

    /// Resume a simulation from a snapshot.
    ///
    /// The action queue starts empty; applied-action history is not part of
    /// a snapshot.
    ///
    /// # Errors
    /// Fails if the snapshot's cell buffer is inconsistent with its
    /// recorded dimensions.
    pub fn from_snapshot(snapshot: GridSnapshot) -> Result<Self, SnapshotError> {
        let rules = snapshot.rules;
        let steps = snapshot.steps;
        let seed = snapshot.seed;
        let grid = snapshot.into_grid()?;

        info!(
            "Resumed {}x{} fire grid at step {steps} (seed {seed})",
            grid.width(),
            grid.height()
        );

        Ok(FireSimulation {
            grid,
            rules,
            actions: ActionQueue::default(),
            changes: Vec::new(),
            seed,
            steps,
        })
    }

    /// Advance the simulation by one step
    pub fn step(&mut self) {
        let mut changes = Vec::new();

        // 1. Apply queued actions to the working grid
        for action in self.actions.take_pending() {
            self.apply_action(action, &mut changes);
        }

        // 2. Recompute every cell from the immutable snapshot, row-parallel
        let rules = self.rules;
        let seed = self.seed;
        let step_idx = self.steps;
        let (width, height) = self.grid.dimensions();
        let grid = &self.grid;

        let next_cells: Vec<Cell> = (0..height)
            .into_par_iter()
            .flat_map_iter(|y| {
                (0..width).map(move |x| {
                    let cell = &grid.row(y)[x];
                    let tally = tally_neighbors(grid, x, y);
                    evaluate(cell, tally, &rules, || cell_roll(seed, step_idx, x, y))
                })
            })
            .collect();
        let next = CellGrid::from_cells(width, height, next_cells);

        // 3. Record rule transitions, then swap the new grid in
        for ((x, y, old), new) in self.grid.iter().zip(next.cells()) {
            if old.state != new.state {
                changes.push(CellChange {
                    x,
                    y,
                    from: old.state,
                    to: new.state,
                });
            }
        }

        self.grid = next;
        self.changes = changes;
        self.steps += 1;

        let counts = self.grid.counts();
        debug!(
            "Step {}: {} flamable, {} burning, {} burnt, {} transitions",
            self.steps,
            counts.flamable,
            counts.burning,
            counts.burnt,
            self.changes.len()
        );
    }

    /// Advance the simulation by `n` steps
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    fn apply_action(&mut self, action: CellAction, changes: &mut Vec<CellChange>) {
        // Bounds were checked at submit time
        let Ok(current) = self.grid.get(action.x, action.y) else {
            return;
        };
        let target = match (action.kind, current) {
            (ActionKind::Ignite, CellState::Flamable) => CellState::Burning,
            (ActionKind::Extinguish, CellState::Burning) => CellState::Flamable,
            _ => {
                debug!(
                    "Ignored {:?} at ({}, {}): cell is {current}",
                    action.kind, action.x, action.y
                );
                return;
            }
        };
        // Infallible after the submit-time bounds check
        let _ = self.grid.set(action.x, action.y, target);
        changes.push(CellChange {
            x: action.x,
            y: action.y,
            from: current,
            to: target,
        });
        self.actions.mark_applied(action);
    }
}

/// Deterministic per-cell draw for stochastic ignition.
///
/// Seeding from `(seed, step, x, y)` keeps draws independent of evaluation
/// order, so row-parallel evaluation and replays produce identical results.
fn cell_roll(seed: u64, step: u64, x: usize, y: usize) -> f32 {
    let mix = seed
        ^ step.wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (((y as u64) << 32) | x as u64).wrapping_mul(0xD1B5_4A32_D192_ED03);
    StdRng::seed_from_u64(mix).random::<f32>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::MapLayout;

    fn small_config() -> SimulationConfig {
        SimulationConfig {
            width: 5,
            height: 5,
            seed: Some(42),
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulationConfig {
            height: 0,
            ..small_config()
        };
        assert!(FireSimulation::new(&config).is_err());
    }

    #[test]
    fn test_ignite_applies_on_next_step() {
        let mut sim = FireSimulation::new(&small_config()).unwrap();
        sim.ignite(2, 2).unwrap();

        // Queued, not yet applied
        assert_eq!(sim.grid().get(2, 2).unwrap(), CellState::Flamable);

        sim.step();
        assert_eq!(sim.grid().get(2, 2).unwrap(), CellState::Burning);
        assert_eq!(sim.action_history().len(), 1);
    }

    #[test]
    fn test_ignite_out_of_bounds_rejected() {
        let mut sim = FireSimulation::new(&small_config()).unwrap();
        assert!(sim.ignite(5, 0).is_err());
        assert!(sim.action_history().is_empty());
    }

    #[test]
    fn test_ignite_inflamable_is_noop() {
        let config = SimulationConfig {
            layout: MapLayout::Uniform(CellState::Inflamable),
            ..small_config()
        };
        let mut sim = FireSimulation::new(&config).unwrap();
        sim.ignite(1, 1).unwrap();
        sim.step();

        assert_eq!(sim.grid().get(1, 1).unwrap(), CellState::Inflamable);
        assert!(sim.action_history().is_empty());
    }

    #[test]
    fn test_extinguish_returns_cell_to_flamable() {
        let mut sim = FireSimulation::new(&small_config()).unwrap();
        sim.ignite(2, 2).unwrap();
        sim.step();
        assert_eq!(sim.counts().burning, 1);

        sim.extinguish(2, 2).unwrap();
        sim.step();
        assert_eq!(sim.grid().get(2, 2).unwrap(), CellState::Flamable);
        assert_eq!(sim.counts().burning, 0);
    }

    #[test]
    fn test_change_list_covers_actions_and_rules() {
        let mut sim = FireSimulation::new(&small_config()).unwrap();
        sim.ignite(2, 2).unwrap();
        sim.step();

        let changes = sim.last_changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(
            changes[0],
            CellChange {
                x: 2,
                y: 2,
                from: CellState::Flamable,
                to: CellState::Burning,
            }
        );
    }

    #[test]
    fn test_dimensions_preserved_across_steps() {
        let mut sim = FireSimulation::new(&small_config()).unwrap();
        sim.ignite(2, 2).unwrap();
        sim.run(25);
        assert_eq!(sim.grid().dimensions(), (5, 5));
        assert_eq!(sim.steps(), 25);
    }

    #[test]
    fn test_snapshot_resume_continues_identically() {
        let mut sim = FireSimulation::new(&small_config()).unwrap();
        sim.ignite(2, 2).unwrap();
        sim.run(3);

        let mut resumed = FireSimulation::from_snapshot(sim.snapshot()).unwrap();
        assert_eq!(resumed.steps(), 3);
        assert_eq!(resumed.grid(), sim.grid());

        // Both copies evolve identically from the resume point
        sim.run(5);
        resumed.run(5);
        assert_eq!(resumed.grid(), sim.grid());
    }

    #[test]
    fn test_counts_total_matches_grid() {
        let sim = FireSimulation::new(&small_config()).unwrap();
        assert_eq!(sim.counts().total(), 25);
    }
}

//! Transition rules for the fire-spread automaton
//!
//! Each cell's next state is a pure function of its previous record and the
//! burning/burnt tallies of its 8-connected Moore neighborhood, taken from
//! the previous full-grid snapshot. Edges are clamped; the grid does not
//! wrap around.

use crate::cell::{Cell, CellState};
use crate::grid::CellGrid;
use serde::{Deserialize, Serialize};

/// How a flamable cell next to fire catches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnitionMode {
    /// Ignite after `ignite_delay` consecutive-or-not steps next to fire
    Delayed,
    /// Ignite with probability `n / 8` per step for `n` burning neighbors
    Stochastic,
}

/// Threshold configuration for the rule evaluator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Ignition behavior for flamable cells with at least one burning neighbor
    pub ignition: IgnitionMode,
    /// Steps a flamable cell smolders next to fire before igniting
    pub ignite_delay: u32,
    /// Steps a crowded burning cell persists before burning out
    pub burnout_delay: u32,
    /// Burning neighbors above which ignition is immediate
    pub crowd_ignition: u8,
    /// Burning neighbors at which the burnout counter starts ticking
    pub burnout_pressure: u8,
    /// Burnt neighbors at which a burning cell burns out immediately
    pub collapse_burnt: u8,
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet {
            ignition: IgnitionMode::Delayed,
            ignite_delay: 10,
            burnout_delay: 10,
            crowd_ignition: 3,
            burnout_pressure: 3,
            collapse_burnt: 2,
        }
    }
}

/// Burning/burnt tallies of one cell's Moore neighborhood
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighborTally {
    /// Number of burning neighbors (0-8)
    pub burning: u8,
    /// Number of burnt neighbors (0-8)
    pub burnt: u8,
}

/// Tally burning and burnt cells in the Moore neighborhood of `(x, y)`.
///
/// Neighbors beyond the grid edge simply do not exist; a corner cell has
/// three neighbors, an edge cell five.
pub fn tally_neighbors(grid: &CellGrid, x: usize, y: usize) -> NeighborTally {
    let (width, height) = grid.dimensions();
    let mut tally = NeighborTally::default();

    let x_lo = x.saturating_sub(1);
    let x_hi = (x + 1).min(width.saturating_sub(1));
    let y_lo = y.saturating_sub(1);
    let y_hi = (y + 1).min(height.saturating_sub(1));

    for ny in y_lo..=y_hi {
        let row = grid.row(ny);
        for nx in x_lo..=x_hi {
            if nx == x && ny == y {
                continue;
            }
            match row[nx].state {
                CellState::Burning => tally.burning += 1,
                CellState::Burnt => tally.burnt += 1,
                CellState::Inflamable | CellState::Flamable => {}
            }
        }
    }
    tally
}

/// Compute a cell's next record from its previous one and its neighborhood.
///
/// `roll` supplies a uniform draw in `[0, 1)`; it is consulted only in
/// stochastic ignition mode. Immediate rules (crowd ignition, burnt
/// collapse) take precedence over the counter-gated ones.
pub fn evaluate<F>(cell: &Cell, tally: NeighborTally, rules: &RuleSet, roll: F) -> Cell
where
    F: FnOnce() -> f32,
{
    let mut next = *cell;
    match cell.state {
        CellState::Flamable => {
            if tally.burning > rules.crowd_ignition {
                next.transition(CellState::Burning);
            } else if tally.burning >= 1 {
                match rules.ignition {
                    IgnitionMode::Delayed => {
                        next.ignite_ticks += 1;
                        if next.ignite_ticks > rules.ignite_delay {
                            next.transition(CellState::Burning);
                        }
                    }
                    IgnitionMode::Stochastic => {
                        if roll() < f32::from(tally.burning) / 8.0 {
                            next.transition(CellState::Burning);
                        }
                    }
                }
            }
        }
        CellState::Burning => {
            if tally.burnt >= rules.collapse_burnt {
                next.transition(CellState::Burnt);
            } else if tally.burning >= rules.burnout_pressure {
                next.burnout_ticks += 1;
                if next.burnout_ticks > rules.burnout_delay {
                    next.transition(CellState::Burnt);
                }
            }
        }
        // No fuel, or fuel already consumed
        CellState::Inflamable | CellState::Burnt => {}
    }
    next
}

//! Initial map generation
//!
//! The starting grid is either a uniform fill or a seeded random scatter of
//! fuel: each cell becomes flamable with `fill_percent` probability and bare
//! ground otherwise. The same seed always yields the same map.

use crate::cell::CellState;
use crate::grid::CellGrid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Initial layout of the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MapLayout {
    /// Every cell starts in the same state
    Uniform(CellState),
    /// Cells are flamable with `fill_percent` probability, inflamable otherwise
    RandomFill {
        /// Percentage of cells carrying fuel, 0-100
        fill_percent: f32,
    },
}

impl Default for MapLayout {
    fn default() -> Self {
        MapLayout::Uniform(CellState::Flamable)
    }
}

/// Build the starting grid for the given layout and seed
pub fn generate(width: usize, height: usize, layout: MapLayout, seed: u64) -> CellGrid {
    match layout {
        MapLayout::Uniform(state) => CellGrid::filled(width, height, state),
        MapLayout::RandomFill { fill_percent } => {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = CellGrid::filled(width, height, CellState::Inflamable);
            for y in 0..height {
                for x in 0..width {
                    if rng.random::<f32>() * 100.0 <= fill_percent {
                        // Infallible: (x, y) ranges over the grid itself
                        let _ = grid.set(x, y, CellState::Flamable);
                    }
                }
            }
            grid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_layout() {
        let grid = generate(10, 10, MapLayout::Uniform(CellState::Burnt), 0);
        assert_eq!(grid.counts().burnt, 100);
    }

    #[test]
    fn test_random_fill_is_reproducible() {
        let layout = MapLayout::RandomFill { fill_percent: 45.0 };
        let a = generate(32, 20, layout, 1234);
        let b = generate(32, 20, layout, 1234);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_fill_extremes() {
        let empty = generate(16, 16, MapLayout::RandomFill { fill_percent: 0.0 }, 7);
        assert_eq!(empty.counts().flamable, 0);

        let full = generate(
            16,
            16,
            MapLayout::RandomFill {
                fill_percent: 100.0,
            },
            7,
        );
        assert_eq!(full.counts().flamable, 256);
    }

    #[test]
    fn test_different_seeds_differ() {
        let layout = MapLayout::RandomFill { fill_percent: 50.0 };
        let a = generate(32, 32, layout, 1);
        let b = generate(32, 32, layout, 2);
        assert_ne!(a, b);
    }
}

//! Simulation configuration and validation

use crate::error::ConfigError;
use crate::mapgen::MapLayout;
use crate::rules::RuleSet;
use serde::{Deserialize, Serialize};

/// Complete configuration for one simulation run.
///
/// `seed` drives both map generation and stochastic ignition; `None` draws
/// a fresh seed from entropy at startup (the chosen value is recorded on the
/// simulation so the run can be reproduced).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Transition rule thresholds
    pub rules: RuleSet,
    /// Initial grid layout
    pub layout: MapLayout,
    /// RNG seed; `None` picks one at random
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            width: 64,
            height: 40,
            rules: RuleSet::default(),
            layout: MapLayout::default(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Check the configuration before building a simulation from it.
    ///
    /// # Errors
    /// Fails on zero grid dimensions or a fill percentage outside `[0, 100]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if let MapLayout::RandomFill { fill_percent } = self.layout {
            if !(0.0..=100.0).contains(&fill_percent) {
                return Err(ConfigError::InvalidFillPercent(fill_percent));
            }
        }
        Ok(())
    }
}

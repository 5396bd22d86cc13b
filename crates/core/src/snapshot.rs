//! Grid snapshot persistence
//!
//! A snapshot captures everything needed to resume or replay a run: grid
//! dimensions and cells, rule thresholds, step count, and the seed. Stored
//! as JSON on disk.

use crate::cell::Cell;
use crate::grid::CellGrid;
use crate::rules::RuleSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serializable record of a simulation's full state at one step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
    pub rules: RuleSet,
    pub steps: u64,
    pub seed: u64,
}

impl GridSnapshot {
    /// Capture the state of a grid together with its run metadata
    pub fn capture(grid: &CellGrid, rules: RuleSet, steps: u64, seed: u64) -> Self {
        GridSnapshot {
            width: grid.width(),
            height: grid.height(),
            cells: grid.iter().map(|(_, _, cell)| *cell).collect(),
            rules,
            steps,
            seed,
        }
    }

    /// Rebuild the grid stored in this snapshot.
    ///
    /// # Errors
    /// Fails if the cell buffer does not match the recorded dimensions.
    pub fn into_grid(self) -> Result<CellGrid, SnapshotError> {
        if self.cells.len() != self.width * self.height {
            return Err(SnapshotError::ParseFailed(format!(
                "cell count {} does not match {}x{} grid",
                self.cells.len(),
                self.width,
                self.height
            )));
        }
        Ok(CellGrid::from_cells(self.width, self.height, self.cells))
    }

    /// Load a snapshot from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let contents =
            fs::read_to_string(path).map_err(|e| SnapshotError::LoadFailed(e.to_string()))?;

        let snapshot: Self = serde_json::from_str(&contents)
            .map_err(|e| SnapshotError::ParseFailed(e.to_string()))?;

        if snapshot.cells.len() != snapshot.width * snapshot.height {
            return Err(SnapshotError::ParseFailed(format!(
                "cell count {} does not match {}x{} grid",
                snapshot.cells.len(),
                snapshot.width,
                snapshot.height
            )));
        }
        Ok(snapshot)
    }

    /// Save this snapshot to a JSON file.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SnapshotError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializeFailed(e.to_string()))?;

        fs::write(path, contents).map_err(|e| SnapshotError::SaveFailed(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with snapshot operations
#[derive(Debug)]
pub enum SnapshotError {
    /// Failed to read the file
    LoadFailed(String),
    /// Failed to parse file contents, or contents are inconsistent
    ParseFailed(String),
    /// Failed to serialize the snapshot
    SerializeFailed(String),
    /// Failed to write the file
    SaveFailed(String),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::LoadFailed(msg) => write!(f, "Failed to load: {msg}"),
            SnapshotError::ParseFailed(msg) => write!(f, "Failed to parse: {msg}"),
            SnapshotError::SerializeFailed(msg) => write!(f, "Failed to serialize: {msg}"),
            SnapshotError::SaveFailed(msg) => write!(f, "Failed to save: {msg}"),
        }
    }
}

impl std::error::Error for SnapshotError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState;

    #[test]
    fn test_capture_and_rebuild() {
        let mut grid = CellGrid::filled(4, 3, CellState::Flamable);
        grid.set(1, 2, CellState::Burning).unwrap();

        let snapshot = GridSnapshot::capture(&grid, RuleSet::default(), 9, 77);
        assert_eq!(snapshot.steps, 9);
        assert_eq!(snapshot.seed, 77);

        let rebuilt = snapshot.into_grid().unwrap();
        assert_eq!(rebuilt, grid);
    }

    #[test]
    fn test_inconsistent_cell_count_rejected() {
        let grid = CellGrid::filled(2, 2, CellState::Inflamable);
        let mut snapshot = GridSnapshot::capture(&grid, RuleSet::default(), 0, 0);
        snapshot.cells.pop();

        assert!(snapshot.into_grid().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let grid = CellGrid::filled(3, 3, CellState::Burnt);
        let snapshot = GridSnapshot::capture(&grid, RuleSet::default(), 5, 11);

        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: GridSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.into_grid().unwrap(), grid);
    }

    #[test]
    fn test_file_round_trip() {
        let grid = CellGrid::filled(2, 5, CellState::Flamable);
        let snapshot = GridSnapshot::capture(&grid, RuleSet::default(), 3, 8);

        let path = std::env::temp_dir().join("fire-grid-snapshot-test.json");
        snapshot.save(&path).unwrap();
        let loaded = GridSnapshot::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.steps, 3);
        assert_eq!(loaded.into_grid().unwrap(), grid);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = GridSnapshot::load("/nonexistent/fire-grid.json").unwrap_err();
        assert!(matches!(err, SnapshotError::LoadFailed(_)));
    }
}

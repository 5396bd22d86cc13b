//! Error types shared across the simulation crate

/// Errors raised by grid coordinate access
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate outside `[0, width) x [0, height)`
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "Coordinate ({x}, {y}) out of bounds for {width}x{height} grid"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Errors raised when validating a simulation configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions must both be positive
    InvalidDimensions { width: usize, height: usize },
    /// Random fill percentage must lie in `[0, 100]`
    InvalidFillPercent(f32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidDimensions { width, height } => {
                write!(f, "Grid dimensions must be positive, got {width}x{height}")
            }
            ConfigError::InvalidFillPercent(pct) => {
                write!(f, "Fill percent must be within [0, 100], got {pct}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GridError::OutOfBounds {
            x: 5,
            y: 9,
            width: 4,
            height: 4,
        };
        assert_eq!(
            err.to_string(),
            "Coordinate (5, 9) out of bounds for 4x4 grid"
        );

        let err = ConfigError::InvalidDimensions {
            width: 0,
            height: 10,
        };
        assert!(err.to_string().contains("0x10"));
    }
}
